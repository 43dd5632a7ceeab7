//! Drives a 4 bit bus on PA0..=PA3 and mirrors a button on PB8 using pin numbers only

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use panic_halt as _;

use cortex_m_rt::entry;
use stm32f0_gpio::{
    gpio::{GpioPort, ModeFlags, PinState},
    pac, rcc,
};

const BUS: u16 = 0b1111;
const LED: u8 = 5;
const BUTTON: u8 = 8;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    rcc::enable_port::<pac::GPIOA>();
    rcc::enable_port::<pac::GPIOB>();

    let gpioa = dp.GPIOA;
    let gpiob = dp.GPIOB;

    for pin in 0..4 {
        gpioa.configure(pin, ModeFlags::GP_OUTPUT | ModeFlags::HIGH_SPEED);
    }
    gpioa.configure(LED, ModeFlags::GP_OUTPUT);
    gpiob.configure(BUTTON, ModeFlags::INPUT | ModeFlags::PULL_UP);

    let mut value: u16 = 0;
    loop {
        // Sets and clears the bus bits with a single BSRR write
        gpioa.set_masks(value & BUS, !value & BUS);
        value = value.wrapping_add(1);

        gpioa.set(LED, PinState::from(gpiob.is_low(BUTTON)));

        cortex_m::asm::delay(800_000);
    }
}
