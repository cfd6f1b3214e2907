pub mod clock;
pub mod engine;
pub mod gate;
pub mod placer;

pub use clock::{IntervalTicker, RecordingTicker, SimulationClock, Ticker, TickerEvent};
pub use engine::{Collision, GameEngine, StepOutcome};
pub use gate::DirectionGate;
pub use placer::RandomPlacer;
