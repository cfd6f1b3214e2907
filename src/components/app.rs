use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    board::Board, controls_panel::ControlsPanel, game_over_overlay::GameOverOverlay,
    intro_overlay::IntroOverlay, pause_overlay::PauseOverlay, stats_panel::StatsPanel,
};
use crate::config::GameConfig;
use crate::game::{GameEngine, IntervalTicker, RandomPlacer, SimulationClock};
use crate::model::{GameStatus, Snapshot};
use crate::session::GameSession;
use crate::storage::LocalScoreStore;
use crate::util::clog;

type SessionRef = Rc<RefCell<Option<GameSession>>>;

/// Runs `f` against the live session and publishes the resulting snapshot.
fn with_session(
    session: &SessionRef,
    snapshot: &UseStateHandle<Option<Snapshot>>,
    f: impl FnOnce(&mut GameSession),
) {
    let snap = {
        let mut guard = session.borrow_mut();
        let Some(s) = guard.as_mut() else { return };
        f(s);
        s.snapshot()
    };
    snapshot.set(Some(snap));
}

#[function_component(App)]
pub fn app() -> Html {
    let session: SessionRef = use_mut_ref(|| None);
    let snapshot = use_state(|| None::<Snapshot>);

    // Mount: build the session, wire the clock and keyboard, tear both down on unmount.
    {
        let session = session.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");

            let on_tick = {
                let session = session.clone();
                let snapshot = snapshot.clone();
                move || with_session(&session, &snapshot, |s| {
                    s.tick();
                })
            };
            let engine = GameEngine::new(
                GameConfig::default(),
                RandomPlacer::from_browser(),
                Box::new(LocalScoreStore::default()),
            );
            let clock = SimulationClock::new(Box::new(IntervalTicker::new(window.clone(), on_tick)));
            let s = GameSession::new(engine, clock);
            snapshot.set(Some(s.snapshot()));
            *session.borrow_mut() = Some(s);

            let keydown_cb = {
                let session = session.clone();
                let snapshot = snapshot.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let key = e.key();
                    let mut handled = false;
                    with_session(&session, &snapshot, |s| {
                        handled = s.handle_key(&key).is_some();
                    });
                    if handled {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .is_err()
            {
                clog("keydown listener not attached");
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                drop(keydown_cb);
                // Dropping the session clears the interval and releases the tick closure.
                session.borrow_mut().take();
            }
        });
    }

    let start = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| with_session(&session, &snapshot, |s| {
            s.start();
        }))
    };
    let toggle_pause = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| with_session(&session, &snapshot, |s| {
            s.toggle_pause();
        }))
    };
    let ontouchstart = {
        let session = session.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = e.touches().item(0) {
                if let Some(s) = session.borrow_mut().as_mut() {
                    s.touch_start(t.client_x() as f64, t.client_y() as f64);
                }
            }
        })
    };
    let ontouchend = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = e.changed_touches().item(0) {
                with_session(&session, &snapshot, |s| {
                    s.touch_end(t.client_x() as f64, t.client_y() as f64);
                });
            }
        })
    };

    let Some(snap) = (*snapshot).clone() else {
        return html! {};
    };
    let status = snap.status;
    html! {
        <div style="min-height:100vh; background:#f0fdf4; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:32px 16px; box-sizing:border-box; font-family:sans-serif;">
            <div style="width:100%; max-width:420px; display:flex; flex-direction:column; align-items:center;">
                <StatsPanel score={snap.score} high_score={snap.high_score} status={status} />
                <Board snapshot={snap.clone()} ontouchstart={ontouchstart} ontouchend={ontouchend}>
                    <IntroOverlay show={status == GameStatus::Idle} start={start.clone()} />
                    <GameOverOverlay show={status == GameStatus::GameOver} score={snap.score} new_best={snap.new_best} restart={start.clone()} />
                    <PauseOverlay show={status == GameStatus::Paused} resume={toggle_pause.clone()} />
                </Board>
                <ControlsPanel status={status} on_toggle_pause={toggle_pause.clone()} />
            </div>
        </div>
    }
}
