use crate::model::GameStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub status: GameStatus,
    pub on_toggle_pause: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let label = match props.status {
        GameStatus::Playing => "⏸ Pause",
        GameStatus::Paused => "▶ Resume",
        _ => return html! {},
    };
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="margin-top:24px; display:flex; justify-content:center;">
        <button onclick={pause_cb} aria-label={label} style="padding:12px 20px; background:#fff; border:none; border-radius:999px; box-shadow:0 2px 6px rgba(0,0,0,0.15); color:#16a34a; font-weight:700; cursor:pointer;">{ label }</button>
        <div style="margin-left:12px; align-self:center; font-size:11px; opacity:0.6;">{"Space / Esc"}</div>
    </div>}
}
