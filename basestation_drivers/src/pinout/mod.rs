use hal::gpio::{Pin, PinMode, Port};

pub mod radio;

/// Represents the definition of a GPIO pin.
pub struct PinDef {
    /// The port to which the pin belongs (e.g., Port::A, Port::B).
    port: Port,
    /// The pin number within the port.
    pin: u8,
    /// The mode of the pin (e.g., Output, Input, Alternate function).
    mode: PinMode,
}

impl PinDef {
    pub fn new(port: Port, pin: u8, mode: PinMode) -> PinDef {
        PinDef {
            port: port,
            pin: pin,
            mode: mode,
        }
    }

    /// Converts the PinDef struct to a Pin struct. Useful for predefined pin configurations.
    /// # Example
    /// ```ignore
    /// let mut radio_ncs = RADIO_NCS.init();
    /// radio_ncs.set_high();
    /// ```
    pub fn init(&self) -> Pin {
        Pin::new(self.port, self.pin, self.mode)
    }

    /// True if both definitions name the same physical pad (port and pin number).
    pub const fn shares_pad(&self, other: &PinDef) -> bool {
        self.port as u8 == other.port as u8 && self.pin == other.pin
    }

    /// A GPIO port has pads 0..=15.
    pub const fn is_valid_pad(&self) -> bool {
        self.pin < 16
    }
}

/// Checks that no two definitions in the list name the same pad.
pub const fn no_shared_pads(pads: &[&PinDef]) -> bool {
    let mut i = 0;
    while i < pads.len() {
        let mut j = i + 1;
        while j < pads.len() {
            if pads[i].shares_pad(pads[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
