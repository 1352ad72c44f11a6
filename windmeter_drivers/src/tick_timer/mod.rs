use hal::{
    clocks::Clocks,
    pac::TIM3,
    timer::{Timer, TimerConfig},
};

/// Free-running 16-bit tick counter on TIM3.
///
/// The counter wraps silently at 0xFFFF; consumers recover deltas with
/// wrapping subtraction, so they must poll faster than the wrap period
/// (262 ms at the 250 kHz design point).
pub struct TickTimer {
    tim: Timer<TIM3>,
    ticks_per_second: u32,
}

impl TickTimer {
    /// `divider` scales the APB1 timer clock down to the tick rate, which
    /// `ticks_per_second` reports back for the measurement constants.
    pub fn new(tim3: TIM3, clock_cfg: &Clocks, divider: u16) -> Self {
        let mut timer = Timer::new_tim3(tim3, 1_000., TimerConfig::default(), clock_cfg);

        // Reprogram as a plain free-running counter: raw prescaler, full
        // 16-bit auto-reload, update event to latch the prescaler.
        timer.regs.psc.write(|w| unsafe { w.bits(u32::from(divider - 1)) });
        timer.regs.arr.write(|w| unsafe { w.bits(0xFFFF) });
        timer.regs.egr.write(|w| unsafe { w.bits(1) });
        timer.enable();

        Self {
            tim: timer,
            ticks_per_second: clock_cfg.apb1_timer() / u32::from(divider),
        }
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Read the raw 16-bit counter value.
    pub fn count(&self) -> u16 {
        self.tim.regs.cnt.read().bits() as u16
    }
}
