//! Switches PA1 between input and output at runtime

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use panic_halt as _;

use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;
use stm32f0_gpio::{pac, prelude::*};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    let gpioa = dp.GPIOA.split();

    let mut pin = gpioa.pa1.into_dynamic();

    loop {
        pin.make_floating_input();
        cortex_m::asm::delay(8_000_000);
        hprintln!("{}", pin.is_high().unwrap());

        pin.make_push_pull_output();
        pin.set_high().unwrap();
        cortex_m::asm::delay(8_000_000);
        pin.set_low().unwrap();
        cortex_m::asm::delay(8_000_000);
    }
}
