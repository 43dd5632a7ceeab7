//! # GPIO layer for the STM32F030 family of microcontrollers
//!
//! Configures and drives the general purpose I/O ports of STM32F030-class parts. Two levels
//! of access are provided:
//!
//! - [`gpio::GpioPort`]: pin-number based operations directly on the `pac` GPIO blocks
//!   (configure, set/reset single pins or masks, read inputs)
//! - typed pins obtained with [`gpio::GpioExt::split`], which implement the
//!   [`embedded-hal`] digital traits
//!
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal
//!
//! # Usage
//!
//! Select the microcontroller with the corresponding Cargo feature (`stm32f030` is the
//! default) and enable `rt` when building an application:
//!
//! ```toml
//! [dependencies.stm32f0-gpio]
//! version = "0.1.0"
//! features = ["rt"]
//! ```
//!
//! ## Usage example
//!
//! ```rust,ignore
//! #![no_std]
//! #![no_main]
//!
//! use panic_halt as _;
//!
//! use cortex_m_rt::entry;
//! use stm32f0_gpio::{pac, prelude::*};
//!
//! #[entry]
//! fn main() -> ! {
//!     let dp = pac::Peripherals::take().unwrap();
//!
//!     // Enables the GPIOA clock and hands out the pins
//!     let gpioa = dp.GPIOA.split();
//!     let mut led = gpioa.pa4.into_push_pull_output();
//!
//!     loop {
//!         led.toggle();
//!         cortex_m::asm::delay(1_000_000);
//!     }
//! }
//! ```
//!
//! # More examples
//!
//! See the `demos` folder.

#![cfg_attr(not(test), no_std)]

#[cfg(any(feature = "stm32f030", feature = "stm32f070"))]
pub use stm32f0::stm32f0x0 as pac;

pub use crate::pac as device;

pub mod gpio;
pub mod prelude;
pub mod rcc;

mod sealed {
    pub trait Sealed {}
}
pub(crate) use sealed::Sealed;
