use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::constants::{GRID_SIZE, PLACER_MAX_ATTEMPTS};
use crate::model::Position;

/// Picks free cells for bamboo by rejection sampling over the whole grid.
#[derive(Debug, Clone)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from `Math.random`; only callable inside a browser.
    pub fn from_browser() -> Self {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::seeded((hi << 32) | lo)
    }

    /// A uniformly random cell not in `occupied`, or the origin if the board is full.
    pub fn place(&mut self, occupied: &HashSet<Position>) -> Position {
        let free = (GRID_SIZE * GRID_SIZE) as usize - occupied.iter().filter(|p| p.in_bounds()).count();
        if free == 0 {
            warn!("board full, placing food at origin");
            return Position::new(0, 0);
        }
        for _ in 0..PLACER_MAX_ATTEMPTS {
            let candidate = Position::new(
                self.rng.gen_range(0..GRID_SIZE),
                self.rng.gen_range(0..GRID_SIZE),
            );
            if !occupied.contains(&candidate) {
                return candidate;
            }
        }
        // Nearly full board: pick among the remaining cells directly.
        let pick = self.rng.gen_range(0..free);
        (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
            .filter(|p| !occupied.contains(p))
            .nth(pick)
            .unwrap_or(Position::new(0, 0))
    }
}
