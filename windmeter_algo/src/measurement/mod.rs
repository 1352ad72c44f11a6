pub mod delta_time;
pub mod rotation;

use delta_time::DeltaTime;
use rotation::RotationSensor;

/// Wind run per contact closure, in centimetres. The anemometer closes the
/// reed switch once per 1.25 m of wind passing the cups.
const CENTIMETRES_PER_CLOSURE: u64 = 125;

/// Seconds of ticks a measurement window may span before it is closed out.
const WINDOW_SECONDS: u32 = 2;

/// Derived measurement constants, computed once at startup from the tick
/// rate the timer driver reports.
#[derive(Clone, Copy)]
pub struct MeterConfig {
    /// Timer ticks credited to `count` per detected closure, pre-scaled by
    /// the decimal resolution so `count / time` is already a scaled speed.
    pub step: u32,
    /// Count threshold that closes a window early; one step below the
    /// accumulator maximum so `count += step` can never overflow.
    pub max_count: u32,
    /// Tick threshold that closes a window during slow or stopped spells.
    pub period: u32,
}

impl MeterConfig {
    pub fn from_timing(ticks_per_second: u32, resolution: u32) -> Self {
        let ticks_per_closure = u64::from(ticks_per_second) * CENTIMETRES_PER_CLOSURE / 100;
        let step = (ticks_per_closure * u64::from(resolution)) as u32;
        Self {
            step,
            max_count: u32::MAX - step,
            period: WINDOW_SECONDS * ticks_per_second,
        }
    }
}

enum State {
    /// Waiting for the first closure; nothing is accumulated.
    Idle,
    Measuring,
}

/// Measurement window state machine.
///
/// Polled once per control-loop iteration with the raw counter value and pin
/// level. Returns the scaled speed value when a window completes: either
/// enough distance accumulated for a quick reading, or the window timed out
/// so a slow (possibly zero) reading goes out instead of nothing.
pub struct WindMeter {
    config: MeterConfig,
    state: State,
    delta: DeltaTime,
    sensor: RotationSensor,
    count: u32,
    time: u32,
}

impl WindMeter {
    pub const fn new(config: MeterConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            delta: DeltaTime::new(),
            sensor: RotationSensor::new(),
            count: 0,
            time: 0,
        }
    }

    pub fn tick(&mut self, now_ticks: u16, pin_high: bool) -> Option<u32> {
        match self.state {
            State::Idle => {
                if self.sensor.tick(pin_high) {
                    self.count = 0;
                    self.time = 0;
                    // Time spent idle must not leak into the window.
                    self.delta.rebase(now_ticks);
                    self.state = State::Measuring;
                }
                None
            }
            State::Measuring => {
                // Time first, then the closure check, then the exit check:
                // a closure in the iteration that crosses the time threshold
                // is still counted.
                self.time += u32::from(self.delta.tick(now_ticks));
                if self.sensor.tick(pin_high) {
                    self.count += self.config.step;
                }
                if self.count >= self.config.max_count || self.time > self.config.period {
                    let speed = rounded_speed(self.count, self.time);
                    self.state = State::Idle;
                    return speed;
                }
                None
            }
        }
    }

    pub fn is_measuring(&self) -> bool {
        matches!(self.state, State::Measuring)
    }
}

/// Round-half-up integer division, widened so the rounding add cannot
/// overflow when `count` sits near its ceiling.
fn rounded_speed(count: u32, time: u32) -> Option<u32> {
    if time == 0 {
        // Unreachable through the exit conditions on real hardware, but a
        // divide fault has no supervisor to recover to.
        return None;
    }
    let time = u64::from(time);
    Some(((u64::from(count) + time / 2) / time) as u32)
}
