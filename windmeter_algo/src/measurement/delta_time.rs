/// Tracks a free-running 16-bit hardware counter and yields tick deltas.
///
/// Wraparound is handled by unsigned subtraction, so the caller must poll
/// faster than the counter wrap period (at most one wrap between calls).
pub struct DeltaTime {
    prev: u16,
}

impl DeltaTime {
    pub const fn new() -> Self {
        Self { prev: 0 }
    }

    /// Ticks elapsed since the previous call.
    pub fn tick(&mut self, now: u16) -> u16 {
        let delta = now.wrapping_sub(self.prev);
        self.prev = now;
        delta
    }

    /// Re-baseline without producing a delta. Used when leaving the idle
    /// state so the time spent waiting is not counted.
    pub fn rebase(&mut self, now: u16) {
        self.prev = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_delta() {
        let mut dt = DeltaTime::new();
        dt.rebase(100);
        assert_eq!(dt.tick(350), 250);
        assert_eq!(dt.tick(350), 0);
    }

    #[test]
    fn delta_across_counter_wrap() {
        let mut dt = DeltaTime::new();
        dt.rebase(65_530);
        assert_eq!(dt.tick(10), 16);
    }

    #[test]
    fn rebase_discards_stale_time() {
        let mut dt = DeltaTime::new();
        dt.rebase(0);
        dt.rebase(40_000);
        assert_eq!(dt.tick(40_005), 5);
    }
}
