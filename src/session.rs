//! Ties the engine to its clock and to raw input.
//!
//! The clock is re-armed at exactly two kinds of points: when play starts or
//! resumes, and when a tick changes the speed. Every other way out of
//! `Playing` cancels it.

use tracing::debug;

use crate::game::{GameEngine, SimulationClock, StepOutcome};
use crate::input::{InputCommand, command_for_key, swipe_direction};
use crate::model::{Direction, GameStatus, Snapshot};
use crate::state::SwipeState;

pub struct GameSession {
    engine: GameEngine,
    clock: SimulationClock,
    swipe: SwipeState,
}

impl GameSession {
    pub fn new(engine: GameEngine, clock: SimulationClock) -> Self {
        Self {
            engine,
            clock,
            swipe: SwipeState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// New game from Idle or GameOver.
    pub fn start(&mut self) -> bool {
        if !self.engine.start() {
            return false;
        }
        self.clock.rearm(self.engine.speed_ms());
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if !self.engine.toggle_pause() {
            return false;
        }
        match self.engine.status() {
            GameStatus::Playing => self.clock.rearm(self.engine.speed_ms()),
            _ => self.clock.cancel(),
        }
        true
    }

    /// One clock tick.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.engine.step();
        match outcome {
            StepOutcome::Ate {
                speed_changed: true,
            } => self.clock.rearm(self.engine.speed_ms()),
            StepOutcome::Crashed(_) | StepOutcome::Skipped => self.clock.cancel(),
            _ => {}
        }
        outcome
    }

    pub fn turn(&mut self, dir: Direction) -> Option<Direction> {
        self.engine.propose(dir)
    }

    /// Applies a `KeyboardEvent.key`. Returns the command it mapped to, if any.
    pub fn handle_key(&mut self, key: &str) -> Option<InputCommand> {
        let cmd = command_for_key(key)?;
        match cmd {
            InputCommand::TogglePause => {
                self.toggle_pause();
            }
            InputCommand::Turn(dir) => {
                self.turn(dir);
            }
        }
        Some(cmd)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.swipe.begin(x, y);
    }

    /// Finishes a swipe and proposes its direction while playing.
    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (dx, dy) = self.swipe.finish(x, y)?;
        if self.engine.status() != GameStatus::Playing {
            return None;
        }
        let dir = swipe_direction(dx, dy, self.engine.config().swipe_min_distance)?;
        debug!(?dir, dx, dy, "swipe");
        self.turn(dir)
    }
}
