use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub start: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_cb = props.start.clone();
    let start_btn = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        start_cb.emit(());
    });
    html! {
        <div style="position:absolute; inset:0; background:rgba(0,0,0,0.4); backdrop-filter:blur(2px); display:flex; align-items:center; justify-content:center; z-index:20;">
            <div style="background:#fff; border:4px solid #22c55e; padding:24px 32px; border-radius:24px; text-align:center; max-width:320px; width:80%;">
                <h1 style="margin:0 0 8px 0; font-size:28px; color:#166534;">{"Panda Snake"}</h1>
                <p style="margin:0 0 20px 0; font-size:13px; color:#6b7280;">{"Swipe or use the arrow keys / WASD to guide the panda to the bamboo!"}</p>
                <button onclick={start_btn} style="padding:12px 32px; background:#22c55e; color:#fff; border:none; border-radius:999px; font-weight:700; cursor:pointer;">{"▶ Start"}</button>
            </div>
        </div>
    }
}
