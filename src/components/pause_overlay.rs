use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PauseOverlayProps {
    pub show: bool,
    pub resume: Callback<()>,
}

#[function_component]
pub fn PauseOverlay(props: &PauseOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let resume_cb = props.resume.clone();
    let resume_btn = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        resume_cb.emit(());
    });
    html! {
        <div style="position:absolute; inset:0; background:rgba(234,179,8,0.1); backdrop-filter:blur(2px); display:flex; align-items:center; justify-content:center; z-index:20;">
            <div style="background:#fff; border:4px solid #facc15; padding:24px 32px; border-radius:24px; text-align:center;">
                <h2 style="margin:0 0 16px 0; color:#ca8a04;">{"Paused"}</h2>
                <button onclick={resume_btn} style="padding:10px 28px; background:#eab308; color:#fff; border:none; border-radius:999px; font-weight:700; cursor:pointer;">{"▶ Resume"}</button>
            </div>
        </div>
    }
}
