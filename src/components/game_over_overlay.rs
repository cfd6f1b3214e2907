use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub new_best: bool,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        restart_cb.emit(());
    });
    html! {
        <div style="position:absolute; inset:0; background:rgba(239,68,68,0.2); backdrop-filter:blur(2px); display:flex; align-items:center; justify-content:center; z-index:20;">
            <div style="background:#fff; border:4px solid #ef4444; padding:24px 32px; border-radius:24px; text-align:center; min-width:220px;">
                <div style="font-size:40px;">{"⚠"}</div>
                <h2 style="margin:0 0 8px 0; color:#1f2937;">{"Game Over!"}</h2>
                <p style="margin:4px 0; color:#6b7280;">{ format!("Final score: {}", props.score) }</p>
                if props.new_best {
                    <p style="margin:4px 0; color:#16a34a; font-weight:700;">{"New best!"}</p>
                }
                <div style="margin-top:16px;">
                    <button onclick={restart_btn} style="padding:10px 28px; background:#ef4444; color:#fff; border:none; border-radius:999px; font-weight:700; cursor:pointer;">{"↻ Play Again"}</button>
                </div>
            </div>
        </div>
    }
}
