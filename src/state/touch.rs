// Swipe gesture tracking between touchstart and touchend
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SwipeState {
    start: Option<(f64, f64)>,
}

impl SwipeState {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Ends the gesture, returning its (dx, dy) if one was started.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.start.take().map(|(sx, sy)| (x - sx, y - sy))
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut s = SwipeState::default();
        assert_eq!(s.finish(10.0, 10.0), None);
    }

    #[test]
    fn finish_clears_start() {
        let mut s = SwipeState::default();
        s.begin(100.0, 200.0);
        assert_eq!(s.finish(160.0, 190.0), Some((60.0, -10.0)));
        assert!(!s.is_active());
        assert_eq!(s.finish(0.0, 0.0), None);
    }
}
