#![no_main]
#![no_std]

use defmt_rtt as _;
use panic_probe as _;

use hal::{self, clocks::Clocks, gpio, pac};

use basestation_drivers::radio_spi::RadioSpi;

use cortex_m;

#[rtic::app(device = pac, peripherals = true)]
mod app {
    use super::*;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        radio: RadioSpi,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local) {
        let dp = ctx.device;

        let clock_cfg = Clocks::default();
        clock_cfg.setup().unwrap();

        let sysclk_freq = clock_cfg.sysclk(); // System clock frequency in Hz
        defmt::debug!("SYSTEM: Clock frequency is {} MHz", sysclk_freq / 1000000);

        // Claims the SPI bus pins, raises nCS and arms the IRQ edge trigger.
        let radio = RadioSpi::new(dp.SPI1);

        (Shared {}, Local { radio })
    }

    #[idle]
    fn idle(_ctx: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    // Radio IRQ line, falling edge on RADIO_INT (EXTI line 0).
    #[task(binds = EXTI0, local = [radio])]
    fn radio_irq(cx: radio_irq::Context) {
        gpio::clear_exti_interrupt(0);
        defmt::info!(
            "RADIO: IRQ edge, line asserted: {}",
            cx.local.radio.irq_asserted()
        );
    }
}
