/// Edge detector for the reed-switch rotation sensor.
///
/// The input is pulled up and the contact is normally open, so the pin reads
/// low while the magnet holds the switch closed. One rotation produces one
/// open-to-closed and one closed-to-open transition; only the closure is
/// counted so each rotation registers exactly once.
pub struct RotationSensor {
    prev_closed: bool,
}

impl RotationSensor {
    pub const fn new() -> Self {
        Self { prev_closed: false }
    }

    /// Sample the raw pin level; true when a new closure was detected.
    pub fn tick(&mut self, pin_high: bool) -> bool {
        let closed = !pin_high;
        let rotated = closed && !self.prev_closed;
        self.prev_closed = closed;
        rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_closures() {
        let mut sensor = RotationSensor::new();
        let samples = [true, false, true, false];
        let events: Vec<bool> = samples.iter().map(|&pin| sensor.tick(pin)).collect();
        // Events fire on the two high-to-low transitions only.
        assert_eq!(events, [false, true, false, true]);
    }

    #[test]
    fn a_held_closure_is_one_event() {
        let mut sensor = RotationSensor::new();
        assert!(sensor.tick(false));
        assert!(!sensor.tick(false));
        assert!(!sensor.tick(false));
        assert!(!sensor.tick(true));
        assert!(sensor.tick(false));
    }
}
