//! Trailing-edge debounce for viewport resizes

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<((f32, f32), Instant)>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a resize; any earlier pending resize is superseded and the
    /// deadline restarts from `now`.
    pub fn schedule(&mut self, size: (f32, f32), now: Instant) {
        self.pending = Some((size, now + self.delay));
    }

    /// The latest requested size once its deadline has passed, exactly once
    pub fn poll(&mut self, now: Instant) -> Option<(f32, f32)> {
        match self.pending {
            Some((size, deadline)) if now >= deadline => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_fires_after_delay_once() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::new(DELAY);
        debouncer.schedule((800.0, 600.0), t0);

        assert_eq!(debouncer.poll(t0 + Duration::from_millis(99)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(100)),
            Some((800.0, 600.0))
        );
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn test_burst_collapses_to_last_size() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::new(DELAY);
        for i in 0..10u64 {
            debouncer.schedule((800.0 + i as f32, 600.0), t0 + Duration::from_millis(i * 30));
        }

        // Last event at 270ms, so nothing fires before 370ms.
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(370)),
            Some((809.0, 600.0))
        );
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::new(DELAY);
        debouncer.schedule((800.0, 600.0), t0);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(t0 + DELAY * 2), None);
    }
}
