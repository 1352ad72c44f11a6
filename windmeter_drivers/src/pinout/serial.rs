use super::PinDef;
use super::{PinMode, Port, Pull};

/// USART1 transmit pin.
pub const TX: PinDef = PinDef {
    port: Port::A,
    pin: 9,
    mode: PinMode::Alt(7),
    pull: Pull::Floating,
};
