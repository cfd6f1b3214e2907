use std::cell::RefCell;
use std::rc::Rc;

use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Something that can fire a callback every `interval_ms`.
pub trait Ticker {
    fn arm(&mut self, interval_ms: u32);
    fn disarm(&mut self);
}

/// Owns the single live tick schedule.
///
/// `rearm` always cancels before scheduling, so there is never more than one
/// pending interval and a new speed only applies from the next cycle.
pub struct SimulationClock {
    ticker: Box<dyn Ticker>,
    interval_ms: Option<u32>,
}

impl SimulationClock {
    pub fn new(ticker: Box<dyn Ticker>) -> Self {
        Self {
            ticker,
            interval_ms: None,
        }
    }

    pub fn rearm(&mut self, interval_ms: u32) {
        self.cancel();
        trace!(interval_ms, "clock armed");
        self.ticker.arm(interval_ms);
        self.interval_ms = Some(interval_ms);
    }

    pub fn cancel(&mut self) {
        if self.interval_ms.take().is_some() {
            trace!("clock cancelled");
            self.ticker.disarm();
        }
    }

    /// Current interval, `None` when stopped.
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.interval_ms.is_some()
    }
}

/// `window.setInterval` backed ticker.
pub struct IntervalTicker {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl IntervalTicker {
    pub fn new(window: web_sys::Window, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
            handle: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self, interval_ms: u32) {
        self.disarm();
        match self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(id) => self.handle = Some(id),
            Err(err) => warn!(?err, "setInterval failed"),
        }
    }

    fn disarm(&mut self) {
        if let Some(id) = self.handle.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerEvent {
    Armed(u32),
    Disarmed,
}

/// Records arm/disarm calls instead of scheduling anything.
#[derive(Clone, Default)]
pub struct RecordingTicker {
    events: Rc<RefCell<Vec<TickerEvent>>>,
}

impl RecordingTicker {
    pub fn events(&self) -> Vec<TickerEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Ticker for RecordingTicker {
    fn arm(&mut self, interval_ms: u32) {
        self.events.borrow_mut().push(TickerEvent::Armed(interval_ms));
    }

    fn disarm(&mut self) {
        self.events.borrow_mut().push(TickerEvent::Disarmed);
    }
}
