use super::PinDef;
use super::{PinMode, Port, Pull};

/// Reed-switch input. The contact is normally open and grounds the pin when
/// the rotor magnet passes, so the pin reads low once per rotation.
pub const REED: PinDef = PinDef {
    port: Port::B,
    pin: 5,
    mode: PinMode::Input,
    pull: Pull::Up,
};
