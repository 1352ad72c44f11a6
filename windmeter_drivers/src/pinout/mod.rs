use hal::gpio::{Pin, PinMode, Port, Pull};

pub mod sensor;
pub mod serial;

/// Represents the definition of a GPIO pin.
pub struct PinDef {
    /// The port to which the pin belongs (e.g., Port::A, Port::B).
    port: Port,
    /// The pin number within the port.
    pin: u8,
    /// The mode of the pin (e.g., Output, Input, Alternate function).
    mode: PinMode,
    /// The internal pull resistor, if any.
    pull: Pull,
}

impl PinDef {
    /// Converts the PinDef struct to a Pin struct. Useful for predefined
    /// pin configurations.
    pub fn init(&self) -> Pin {
        let mut pin = Pin::new(self.port, self.pin, self.mode);
        pin.pull(self.pull);
        pin
    }
}
