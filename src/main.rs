use panda_snake::components::App;
use panda_snake::util::init_logging;

fn main() {
    init_logging();
    yew::Renderer::<App>::new().render();
}
