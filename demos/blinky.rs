//! Blinks an LED on PA4 and a second one on PB1 stored in an array of erased pins

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use panic_halt as _;

use cortex_m_rt::entry;
use stm32f0_gpio::{gpio::Speed, pac, prelude::*};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    // Starts the port clocks and hands out the pins
    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();

    let mut leds = [
        gpioa.pa4.into_push_pull_output().speed(Speed::Medium).erase(),
        gpiob.pb1.into_push_pull_output().erase(),
    ];

    // 8 MHz HSI after reset
    loop {
        for led in leds.iter_mut() {
            led.toggle();
        }
        cortex_m::asm::delay(4_000_000);
    }
}
