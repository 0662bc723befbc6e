#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use cortex_m_rt::entry; // The runtime

use hal::{self, clocks::Clocks, pac};

use defmt_rtt as _;
// global logger
use panic_probe as _;

use basestation_drivers::radio_spi::RadioSpi;

// Pulses the radio chip select and samples the IRQ line so the wiring
// can be checked on the bench with a scope.

#[entry]
fn main() -> ! {
    // Set up CPU peripherals
    let cp = cortex_m::Peripherals::take().unwrap();
    // Set up microcontroller peripherals
    let dp = pac::Peripherals::take().unwrap();

    let clock_cfg = Clocks::default();
    clock_cfg.setup().unwrap();

    // Setup a delay, based on the Cortex-m systick.
    let mut delay = Delay::new(cp.SYST, clock_cfg.systick());

    let mut radio = RadioSpi::new(dp.SPI1);

    loop {
        radio.select();
        delay.delay_ms(1);
        radio.deselect();
        delay.delay_ms(999);

        if radio.irq_asserted() {
            defmt::println!("radio IRQ line asserted");
        } else {
            defmt::println!("radio IRQ line idle");
        }
    }
}

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
