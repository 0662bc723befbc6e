use hal::{
    self,
    gpio::{Edge, Pin, Pull},
    pac::SPI1,
    spi::{BaudRate, Spi, SpiConfig, SpiMode},
};

use super::pinout;

/// Bus and control pins for the radio transceiver, claimed from the
/// pinout table. Transaction payloads belong to the radio driver; this
/// only brings the wiring up and drives chip select.
pub struct RadioSpi {
    pub spi: Spi<SPI1>,
    ncs_pin: Pin,
    int_pin: Pin,
}

impl RadioSpi {
    pub fn new(spi_reg: SPI1) -> Self {
        let spi_cfg = SpiConfig {
            mode: SpiMode::mode0(),
            ..Default::default()
        };

        pinout::radio::SPI1_SCK.init();
        pinout::radio::SPI1_MISO.init();
        pinout::radio::SPI1_MOSI.init();

        let mut ncs_pin = pinout::radio::RADIO_NCS.init();
        ncs_pin.set_high();

        // IRQ line idles high, radio pulls it low.
        let mut int_pin = pinout::radio::RADIO_INT.init();
        int_pin.pull(Pull::Up);
        int_pin.enable_interrupt(Edge::Falling);

        let spi = Spi::new(spi_reg, spi_cfg, BaudRate::Div32);

        RadioSpi {
            spi,
            ncs_pin,
            int_pin,
        }
    }

    pub fn get_ncs(&mut self) -> &mut Pin {
        &mut self.ncs_pin
    }

    pub fn get_int(&mut self) -> &mut Pin {
        &mut self.int_pin
    }

    /// Pull chip select low to start a transaction.
    pub fn select(&mut self) {
        self.ncs_pin.set_low();
    }

    /// Raise chip select to end a transaction.
    pub fn deselect(&mut self) {
        self.ncs_pin.set_high();
    }

    pub fn irq_asserted(&self) -> bool {
        self.int_pin.is_low()
    }
}
