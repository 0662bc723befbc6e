//! Pin assignments for the primary SPI data bus and the radio transceiver.
use super::PinDef;
use super::{no_shared_pads, PinMode, Port};

/// SPI1 clock line for the primary data bus
pub const SPI1_SCK: PinDef = PinDef {
    port: Port::A,
    pin: 5,
    mode: PinMode::Alt(5),
};

/// SPI1 data-in line for the primary data bus
pub const SPI1_MISO: PinDef = PinDef {
    port: Port::A,
    pin: 6,
    mode: PinMode::Alt(5),
};

/// SPI1 data-out line for the primary data bus
pub const SPI1_MOSI: PinDef = PinDef {
    port: Port::A,
    pin: 7,
    mode: PinMode::Alt(5),
};

/// Chip select for the radio transceiver. This must stay a dedicated
/// output, not shared with any other device select on the bus.
pub const RADIO_NCS: PinDef = PinDef {
    port: Port::C,
    pin: 4,
    mode: PinMode::Output,
};

/// Interrupt line from the radio transceiver (EXTI line 0).
pub const RADIO_INT: PinDef = PinDef {
    port: Port::B,
    pin: 0,
    mode: PinMode::Input,
};

// Wiring checks, evaluated at build time.
const _: () = {
    assert!(SPI1_SCK.is_valid_pad(), "SPI1_SCK pad out of range");
    assert!(SPI1_MISO.is_valid_pad(), "SPI1_MISO pad out of range");
    assert!(SPI1_MOSI.is_valid_pad(), "SPI1_MOSI pad out of range");
    assert!(RADIO_NCS.is_valid_pad(), "RADIO_NCS pad out of range");
    assert!(RADIO_INT.is_valid_pad(), "RADIO_INT pad out of range");

    assert!(
        no_shared_pads(&[&SPI1_SCK, &SPI1_MISO, &SPI1_MOSI, &RADIO_NCS, &RADIO_INT]),
        "a pad is assigned to more than one role"
    );
};
