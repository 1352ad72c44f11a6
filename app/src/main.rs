#![no_main]
#![no_std]

use defmt_rtt as _;
use panic_probe as _;

use cortex_m_rt::entry;

use hal::{self, clocks::Clocks, pac};

use windmeter_algo::WindMonitor;
use windmeter_drivers::{pinout, serial::SerialLink, tick_timer::TickTimer};

/// Decimal scaling of reported speed: one fractional digit.
const RESOLUTION: u32 = 10;

/// APB1 timer clock divider: 170 MHz / 680 = 250 kHz tick rate, so the
/// 16-bit counter wraps every 262 ms. The polling loop below runs far
/// faster than that, which the delta arithmetic relies on.
const TICK_DIVIDER: u16 = 680;

const BAUD: u32 = 9_600;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    let clock_cfg = Clocks::default();
    clock_cfg.setup().unwrap();
    defmt::debug!(
        "SYSTEM: Clock frequency is {} MHz",
        clock_cfg.sysclk() / 1_000_000
    );

    let mut link = SerialLink::new(dp.USART1, BAUD, &clock_cfg);
    let timer = TickTimer::new(dp.TIM3, &clock_cfg, TICK_DIVIDER);
    let reed = pinout::sensor::REED.init();

    let mut monitor = WindMonitor::new(timer.ticks_per_second(), RESOLUTION);

    // Interrupt-free control loop: drain one queued byte if the UART can
    // take it, then advance the measurement pipeline by one sample.
    loop {
        monitor.drain_step(&mut link);
        monitor.tick(timer.count(), reed.is_high());
    }
}

#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
