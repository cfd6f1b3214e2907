use std::collections::{HashSet, VecDeque};

use tracing::{debug, info, warn};

use super::gate::DirectionGate;
use super::placer::RandomPlacer;
use crate::config::GameConfig;
use crate::constants::{IDLE_FOOD, IDLE_SNAKE, START_DIRECTION, START_SNAKE};
use crate::model::{Direction, GameStatus, Position, Snapshot};
use crate::storage::ScoreStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// What a single `step` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not playing; nothing changed.
    Skipped,
    Moved,
    Ate { speed_changed: bool },
    Crashed(Collision),
}

/// Authoritative game state and the per-tick transition.
pub struct GameEngine {
    config: GameConfig,
    /// Head first.
    snake: VecDeque<Position>,
    food: Position,
    score: u32,
    high_score: u32,
    /// Set once this game has beaten the stored best.
    new_best: bool,
    speed_ms: u32,
    status: GameStatus,
    /// Direction used by the most recent tick; only `step` writes it.
    last_applied: Direction,
    gate: DirectionGate,
    placer: RandomPlacer,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    pub fn new(config: GameConfig, placer: RandomPlacer, store: Box<dyn ScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            config,
            snake: IDLE_SNAKE.into_iter().collect(),
            food: IDLE_FOOD,
            score: 0,
            high_score,
            new_best: false,
            speed_ms: config.initial_speed_ms,
            status: GameStatus::Idle,
            last_applied: START_DIRECTION,
            gate: DirectionGate::new(START_DIRECTION),
            placer,
            store,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn last_applied(&self) -> Direction {
        self.last_applied
    }

    pub fn pending(&self) -> Direction {
        self.gate.pending()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> impl ExactSizeIterator<Item = &Position> {
        self.snake.iter()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            direction: self.last_applied,
            status: self.status,
            score: self.score,
            high_score: self.high_score,
            new_best: self.new_best,
            speed_ms: self.speed_ms,
        }
    }

    /// Starts a fresh game from Idle or GameOver. Returns whether it did.
    pub fn start(&mut self) -> bool {
        if !matches!(self.status, GameStatus::Idle | GameStatus::GameOver) {
            return false;
        }
        self.snake = START_SNAKE.into_iter().collect();
        self.food = self.placer.place(&self.occupied());
        self.last_applied = START_DIRECTION;
        self.gate.reset(START_DIRECTION);
        self.score = 0;
        self.new_best = false;
        self.speed_ms = self.config.initial_speed_ms;
        self.set_status(GameStatus::Playing);
        true
    }

    /// Playing ⇄ Paused. Ignored in any other state.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => self.set_status(GameStatus::Paused),
            GameStatus::Paused => self.set_status(GameStatus::Playing),
            _ => return false,
        }
        true
    }

    /// Queues a turn for the next tick. Only honoured while playing.
    pub fn propose(&mut self, dir: Direction) -> Option<Direction> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.gate.propose(dir, self.last_applied)
    }

    /// Replaces the board layout; used to set up specific positions.
    ///
    /// An empty body is rejected and leaves the engine untouched. Food that
    /// lands on the body is moved to a free cell.
    pub fn arrange(
        &mut self,
        snake: impl IntoIterator<Item = Position>,
        direction: Direction,
        food: Position,
    ) -> bool {
        let snake: VecDeque<Position> = snake.into_iter().collect();
        if snake.is_empty() {
            warn!("empty snake layout rejected");
            return false;
        }
        self.snake = snake;
        self.last_applied = direction;
        self.gate.reset(direction);
        self.food = food;
        if self.snake.contains(&self.food) {
            self.food = self.placer.place(&self.occupied());
        }
        true
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Skipped;
        }
        self.last_applied = self.gate.pending();
        let Some(&head) = self.snake.front() else {
            unreachable!("snake is never empty once built");
        };
        let new_head = head.step(self.last_applied);

        if !new_head.in_bounds() {
            self.game_over(Collision::Wall);
            return StepOutcome::Crashed(Collision::Wall);
        }
        // The tail still counts: it only moves out after this check.
        if self.snake.contains(&new_head) {
            self.game_over(Collision::Body);
            return StepOutcome::Crashed(Collision::Body);
        }

        self.snake.push_front(new_head);
        if new_head != self.food {
            self.snake.pop_back();
            return StepOutcome::Moved;
        }

        self.score += 1;
        let previous_speed = self.speed_ms;
        self.speed_ms = self.config.next_speed(self.speed_ms);
        self.food = self.placer.place(&self.occupied());
        self.record_high_score();
        StepOutcome::Ate {
            speed_changed: self.speed_ms != previous_speed,
        }
    }

    fn occupied(&self) -> HashSet<Position> {
        self.snake.iter().copied().collect()
    }

    fn record_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        self.new_best = true;
        info!(high_score = self.high_score, "new high score");
        if let Err(err) = self.store.save(self.high_score) {
            warn!(%err, "high score not saved");
        }
    }

    fn game_over(&mut self, cause: Collision) {
        self.set_status(GameStatus::GameOver);
        let snapshot = serde_json::to_string(&self.snapshot()).unwrap_or_default();
        info!(?cause, score = self.score, %snapshot, "game over");
    }

    fn set_status(&mut self, status: GameStatus) {
        debug!(from = ?self.status, to = ?status, "status");
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryScoreStore;

    fn engine_with(store: MemoryScoreStore) -> GameEngine {
        GameEngine::new(
            GameConfig::default(),
            RandomPlacer::seeded(42),
            Box::new(store),
        )
    }

    fn playing() -> GameEngine {
        let mut engine = engine_with(MemoryScoreStore::default());
        assert!(engine.start());
        engine
    }

    fn body(engine: &GameEngine) -> Vec<Position> {
        engine.snake().copied().collect()
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn idle_layout_before_start() {
        let engine = engine_with(MemoryScoreStore::with_value(12));
        let snap = engine.snapshot();
        assert_eq!(snap.status, GameStatus::Idle);
        assert_eq!(snap.snake, vec![p(10, 10)]);
        assert_eq!(snap.food, p(15, 10));
        assert_eq!(snap.high_score, 12);
    }

    #[test]
    fn start_lays_out_three_segments() {
        let engine = playing();
        assert_eq!(body(&engine), vec![p(10, 10), p(9, 10), p(8, 10)]);
        assert_eq!(engine.last_applied(), Direction::Right);
        assert_eq!(engine.speed_ms(), 180);
        assert!(!body(&engine).contains(&engine.food()));
    }

    #[test]
    fn eating_grows_and_speeds_up() {
        let mut engine = playing();
        engine.arrange([p(10, 10), p(9, 10), p(8, 10)], Direction::Right, p(11, 10));
        assert_eq!(engine.step(), StepOutcome::Ate { speed_changed: true });
        assert_eq!(body(&engine), vec![p(11, 10), p(10, 10), p(9, 10), p(8, 10)]);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.speed_ms(), 178);
        assert!(!body(&engine).contains(&engine.food()));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut engine = playing();
        engine.arrange([p(10, 10), p(9, 10), p(8, 10)], Direction::Right, p(0, 0));
        assert_eq!(engine.step(), StepOutcome::Moved);
        assert_eq!(body(&engine), vec![p(11, 10), p(10, 10), p(9, 10)]);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn wall_hit_leaves_snake_untouched() {
        let mut engine = playing();
        engine.arrange([p(0, 5), p(1, 5)], Direction::Left, p(9, 9));
        let before = body(&engine);
        assert_eq!(engine.step(), StepOutcome::Crashed(Collision::Wall));
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert_eq!(body(&engine), before);
    }

    #[test]
    fn moving_into_tail_cell_is_a_crash() {
        // A 2x2 loop: the head's next cell is the tail that would vacate this tick.
        let mut engine = playing();
        engine.arrange([p(5, 5), p(5, 6), p(6, 6), p(6, 5)], Direction::Right, p(0, 0));
        let before = body(&engine);
        assert_eq!(engine.step(), StepOutcome::Crashed(Collision::Body));
        assert_eq!(body(&engine), before);
    }

    #[test]
    fn game_over_freezes_state() {
        let mut engine = playing();
        engine.arrange([p(19, 0)], Direction::Right, p(3, 3));
        engine.step();
        let frozen = engine.snapshot();
        assert_eq!(engine.step(), StepOutcome::Skipped);
        assert!(!engine.toggle_pause());
        assert_eq!(engine.propose(Direction::Up), None);
        assert_eq!(engine.snapshot(), frozen);
    }

    #[test]
    fn paused_engine_does_not_move() {
        let mut engine = playing();
        assert!(engine.toggle_pause());
        let frozen = engine.snapshot();
        assert_eq!(engine.step(), StepOutcome::Skipped);
        assert_eq!(engine.snapshot(), frozen);
        assert!(engine.toggle_pause());
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn pause_ignored_when_idle() {
        let mut engine = engine_with(MemoryScoreStore::default());
        assert!(!engine.toggle_pause());
        assert_eq!(engine.status(), GameStatus::Idle);
    }

    #[test]
    fn start_only_from_idle_or_game_over() {
        let mut engine = playing();
        assert!(!engine.start());
        engine.toggle_pause();
        assert!(!engine.start());
    }

    #[test]
    fn reversal_is_rejected_until_committed() {
        let mut engine = playing();
        engine.arrange([p(10, 10), p(10, 9)], Direction::Down, p(0, 0));
        assert_eq!(engine.propose(Direction::Up), None);
        assert_eq!(engine.pending(), Direction::Down);
        assert_eq!(engine.propose(Direction::Left), Some(Direction::Left));
        engine.step();
        assert_eq!(engine.last_applied(), Direction::Left);
        assert_eq!(engine.propose(Direction::Up), Some(Direction::Up));
    }

    #[test]
    fn speed_is_floored() {
        let config = GameConfig {
            initial_speed_ms: 82,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(
            config,
            RandomPlacer::seeded(3),
            Box::new(MemoryScoreStore::default()),
        );
        engine.start();
        for x in 11..14 {
            engine.arrange([p(x - 1, 10)], Direction::Right, p(x, 10));
            engine.step();
        }
        assert_eq!(engine.speed_ms(), 80);
        assert_eq!(engine.score(), 3);
    }

    #[test]
    fn high_score_saved_only_when_beaten() {
        let store = MemoryScoreStore::with_value(1);
        let mut engine = engine_with(store.clone());
        engine.start();
        engine.arrange([p(10, 10)], Direction::Right, p(11, 10));
        engine.step();
        assert_eq!(store.save_count(), 0);
        assert_eq!(engine.high_score(), 1);

        engine.arrange([p(11, 10)], Direction::Right, p(12, 10));
        engine.step();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.value(), 2);
        assert_eq!(engine.high_score(), 2);
    }

    #[test]
    fn empty_layout_is_rejected() {
        let mut engine = playing();
        let before = engine.snapshot();
        assert!(!engine.arrange(Vec::new(), Direction::Left, p(1, 1)));
        assert_eq!(engine.snapshot(), before);
        assert!(matches!(
            engine.step(),
            StepOutcome::Moved | StepOutcome::Ate { .. }
        ));
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn food_on_the_body_is_moved() {
        let mut engine = playing();
        assert!(engine.arrange([p(3, 3), p(2, 3)], Direction::Right, p(3, 3)));
        assert_ne!(engine.food(), p(3, 3));
        assert!(!body(&engine).contains(&engine.food()));
    }

    #[test]
    fn tying_the_best_is_not_a_new_best() {
        let store = MemoryScoreStore::with_value(1);
        let mut engine = engine_with(store.clone());
        engine.start();
        engine.arrange([p(10, 10)], Direction::Right, p(11, 10));
        engine.step();
        assert!(!engine.snapshot().new_best);
        assert_eq!(store.save_count(), 0);

        engine.arrange([p(11, 10)], Direction::Right, p(12, 10));
        engine.step();
        assert!(engine.snapshot().new_best);

        engine.arrange([p(19, 10)], Direction::Right, p(0, 0));
        engine.step();
        assert!(engine.start());
        assert!(!engine.snapshot().new_best);
    }

    #[test]
    fn restart_keeps_high_score() {
        let store = MemoryScoreStore::default();
        let mut engine = engine_with(store.clone());
        engine.start();
        engine.arrange([p(10, 10)], Direction::Right, p(11, 10));
        engine.step();
        engine.arrange([p(19, 10)], Direction::Right, p(0, 0));
        engine.step();
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert!(engine.start());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.high_score(), 1);
        assert_eq!(engine.speed_ms(), 180);
        assert_eq!(store.value(), 1);
    }
}
