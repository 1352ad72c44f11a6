#![cfg_attr(not(test), no_std)]

pub mod measurement;
pub mod serial;

use measurement::{MeterConfig, WindMeter};
use serial::speed_report::SpeedReporter;
use serial::{SerialTx, TxQueue};

/// Transmit queue size. Power of two so the index wrap stays cheap; one
/// slot is reserved, leaving 255 usable bytes.
const TX_QUEUE_SIZE: usize = 256;

/// The main controller for the anemometer, holding all the state required
/// to measure wind speed and report it over the serial link.
pub struct WindMonitor {
    tx: TxQueue<TX_QUEUE_SIZE>,
    reporter: SpeedReporter,
    meter: WindMeter,
}

impl WindMonitor {
    /// Create a new WindMonitor instance.
    ///
    /// # Arguments
    /// * `ticks_per_second` - tick rate the hardware counter runs at
    /// * `resolution` - power of ten fixing the decimal point of reports
    pub fn new(ticks_per_second: u32, resolution: u32) -> Self {
        let config = MeterConfig::from_timing(ticks_per_second, resolution);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "METER: {} ticks/s, step {}, window {} ticks",
            ticks_per_second,
            config.step,
            config.period
        );

        let mut tx = TxQueue::new();
        tx.write_bytes(b"Start\n");

        Self {
            tx,
            reporter: SpeedReporter::new(resolution),
            meter: WindMeter::new(config),
        }
    }

    /// Main update method, called once per control-loop iteration with the
    /// raw hardware counter value and the sensor pin level.
    pub fn tick(&mut self, now_ticks: u16, pin_high: bool) {
        // Advance the in-flight report by one digit before measuring, so a
        // finished window below never stalls behind a half-rendered line.
        self.reporter.step(&mut self.tx);

        if let Some(speed) = self.meter.tick(now_ticks, pin_high) {
            #[cfg(feature = "defmt")]
            defmt::debug!("REPORT: speed value {}", speed);

            self.reporter.start(speed);
        }
    }

    /// Move at most one queued byte to the transport if it is ready.
    pub fn drain_step<T: SerialTx>(&mut self, port: &mut T) {
        self.tx.drain_step(port);
    }
}
