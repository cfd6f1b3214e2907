use crate::model::GameStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let label_style = "font-size:11px; font-weight:700; letter-spacing:0.08em; text-transform:uppercase; color:#9ca3af;";
    let value_style = "font-size:24px; font-weight:700; font-variant-numeric:tabular-nums;";
    let status_color = match props.status {
        GameStatus::Playing => "#16a34a",
        GameStatus::Paused => "#ca8a04",
        GameStatus::GameOver => "#ef4444",
        GameStatus::Idle => "#6b7280",
    };
    html! {
        <div style="display:flex; justify-content:space-between; align-items:center; width:100%; margin-bottom:16px; background:#fff; padding:12px 16px; border-radius:16px; border:2px solid #dcfce7; box-sizing:border-box;">
            <div style="display:flex; flex-direction:column;">
                <span style={label_style}>{"Score"}</span>
                <span style={format!("{} color:#16a34a;", value_style)}>{ props.score }</span>
            </div>
            <div style={format!("background:#dcfce7; padding:6px 12px; border-radius:999px; min-width:80px; text-align:center; font-weight:700; color:{};", status_color)}>
                { props.status.label() }
            </div>
            <div style="display:flex; flex-direction:column; align-items:flex-end;">
                <span style={label_style}>{"Best 🏆"}</span>
                <span style={format!("{} color:#374151;", value_style)}>{ props.high_score }</span>
            </div>
        </div>
    }
}
