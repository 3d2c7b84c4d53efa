use std::time::{Duration, Instant};

/// Paces snake movement against a monotonic clock, independent of
/// how often frames are drawn
pub struct MoveTimer {
    last_advance: Instant,
}

impl MoveTimer {
    pub fn new(now: Instant) -> Self {
        Self { last_advance: now }
    }

    /// `interval == None` means every call is ready
    pub fn ready(&self, now: Instant, interval: Option<Duration>) -> bool {
        match interval {
            None => true,
            Some(interval) => now.saturating_duration_since(self.last_advance) >= interval,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_advance = now;
    }

    /// Marks and returns true if ready
    pub fn try_advance(&mut self, now: Instant, interval: Option<Duration>) -> bool {
        let ready = self.ready(now, interval);
        if ready {
            self.mark(now);
        }
        ready
    }
}

#[test]
fn test_move_timer() {
    let start = Instant::now();
    let interval = Some(Duration::from_millis(100));
    let mut timer = MoveTimer::new(start);

    assert!(!timer.try_advance(start + Duration::from_millis(99), interval));
    assert!(timer.try_advance(start + Duration::from_millis(100), interval));
    assert!(!timer.try_advance(start + Duration::from_millis(150), interval));
    assert!(timer.try_advance(start + Duration::from_millis(230), interval));

    // non-positive interval: every frame
    assert!(timer.try_advance(start + Duration::from_millis(230), None));
    assert!(timer.try_advance(start + Duration::from_millis(230), None));
}
