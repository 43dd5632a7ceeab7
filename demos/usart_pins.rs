//! Routes USART1 to PA9/PA10 (AF1) with typed pins and I2C1 to PB6/PB7 (AF1, open drain)
//! by pin number

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use panic_halt as _;

use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;
use stm32f0_gpio::{
    gpio::{GpioPort, Mode, ModeFlags, OutputSpeed, Pull, Speed},
    pac,
    prelude::*,
    rcc,
};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    let gpioa = dp.GPIOA.split();
    let mut tx = gpioa.pa9.into_alternate::<1>();
    tx.set_speed(Speed::High);
    let mut rx = gpioa.pa10.into_alternate::<1>();
    rx.set_internal_resistor(Pull::Up);

    rcc::enable_port::<pac::GPIOB>();
    let gpiob = dp.GPIOB;
    for pin in [6, 7] {
        gpiob.configure(pin, ModeFlags::ALT_1 | ModeFlags::OPEN_DRAIN | ModeFlags::PULL_UP);
    }

    let scl = gpiob.pin_config(6);
    assert_eq!(scl.mode, Mode::Alternate);
    hprintln!("PB6: {:?}", scl);

    loop {
        cortex_m::asm::wfi();
    }
}
