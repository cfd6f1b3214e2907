use crate::constants::GRID_SIZE;
use crate::model::{Position, Snapshot};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub snapshot: Snapshot,
    pub ontouchstart: Callback<TouchEvent>,
    pub ontouchend: Callback<TouchEvent>,
    #[prop_or_default]
    pub children: Html,
}

/// 20x20 cell grid; overlays are passed as children.
#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    let snap = &props.snapshot;
    let cells = (0..GRID_SIZE * GRID_SIZE).map(|i| {
        let pos = Position::new(i % GRID_SIZE, i / GRID_SIZE);
        let content = match snap.segment_at(pos) {
            Some(0) => html! {
                <div style={format!("font-size:18px; line-height:1; transform:rotate({}deg); transition:transform 0.1s;", snap.direction.rotation_deg())}>{"🐼"}</div>
            },
            Some(_) => html! {
                <div style="width:90%; height:90%; background:#fff; border:2px solid #1f2937; border-radius:50%; box-sizing:border-box;"></div>
            },
            None if pos == snap.food => html! { <div style="font-size:16px; line-height:1;">{"🎋"}</div> },
            None => html! {},
        };
        html! {
            <div key={format!("{}-{}", pos.x, pos.y)} style="width:100%; height:100%; aspect-ratio:1/1; display:flex; align-items:center; justify-content:center;">
                { content }
            </div>
        }
    });
    html! {
        <div
            ontouchstart={props.ontouchstart.clone()}
            ontouchend={props.ontouchend.clone()}
            style={format!("position:relative; display:grid; grid-template-columns:repeat({}, 1fr); width:100%; max-width:400px; aspect-ratio:1/1; background:#dcfce7; border:4px solid #166534; border-radius:12px; overflow:hidden; touch-action:none;", GRID_SIZE)}
        >
            { for cells }
            { props.children.clone() }
        </div>
    }
}
