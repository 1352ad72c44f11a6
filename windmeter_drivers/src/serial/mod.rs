use hal::{
    clocks::Clocks,
    pac::USART1,
    usart::{Usart, UsartConfig},
};

use windmeter_algo::serial::SerialTx;

use super::pinout;

/// Transmit-only telemetry link over USART1. The receive direction is
/// configured by the HAL but never read.
pub struct SerialLink {
    uart: Usart<USART1>,
}

impl SerialLink {
    pub fn new(usart1: USART1, baud: u32, clock_cfg: &Clocks) -> Self {
        pinout::serial::TX.init();
        let uart = Usart::new(usart1, baud, UsartConfig::default(), clock_cfg);
        SerialLink { uart }
    }
}

impl SerialTx for SerialLink {
    fn ready_to_send(&self) -> bool {
        // ISR bit 7: TXE, transmit data register empty.
        self.uart.regs.isr.read().bits() & (1 << 7) != 0
    }

    fn send_byte(&mut self, byte: u8) {
        self.uart.regs.tdr.write(|w| unsafe { w.bits(byte as u32) });
    }
}
