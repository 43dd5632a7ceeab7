//! Pin-number based access to a whole port
//!
//! [`GpioPort`] works directly on the peripheral access crate GPIO blocks and takes the pin
//! number as an argument. Nothing stops two owners from driving the same pin, use the typed
//! [`Pin`](super::Pin) API when that matters.
//!
//! ```rust,ignore
//! let dp = pac::Peripherals::take().unwrap();
//! rcc::enable_port::<pac::GPIOA>();
//!
//! dp.GPIOA.configure(4, ModeFlags::GP_OUTPUT | ModeFlags::HIGH_SPEED);
//! dp.GPIOA.set_high(4);
//! dp.GPIOA.set_masks(0b0000_0011, 0b0001_0000);
//! ```

use cortex_m::interrupt;

use super::config::{afr_index, bsrr_for, bsrr_masks, bv, set_field2, PinConfig, PortImage};
use super::{PinState, Pull, Speed};
use crate::pac;

/// Register block shared by all GPIO ports
pub type RegisterBlock = pac::gpioa::RegisterBlock;

/// Register level operations on a GPIO port
///
/// `pin` must be below 16.
///
/// The configuration registers hold fields of all 16 pins. Every method that changes them
/// does its read-modify-write inside a critical section, so pins of one port can be
/// reconfigured from different interrupt priorities.
pub trait GpioPort {
    #[doc(hidden)]
    fn block(&self) -> &RegisterBlock;

    /// Applies a complete configuration to `pin`
    ///
    /// Accepts a [`PinConfig`] or a packed [`ModeFlags`](super::ModeFlags). The mode is
    /// written last so the pin never runs in its new mode with the old type, pull or
    /// alternate function.
    fn configure(&self, pin: u8, cfg: impl Into<PinConfig>) {
        debug_assert!(pin < 16);
        let cfg = cfg.into();
        interrupt::free(|_| write_config(self.block(), pin, cfg));
    }

    /// Rewrites the configuration of `pin` with `f` and returns the new value
    ///
    /// The current configuration is read and the result written in the same critical
    /// section.
    fn update(&self, pin: u8, f: impl FnOnce(PinConfig) -> PinConfig) -> PinConfig {
        debug_assert!(pin < 16);
        interrupt::free(|_| {
            let cfg = f(self.pin_config(pin));
            write_config(self.block(), pin, cfg);
            cfg
        })
    }

    /// Reads back the current configuration of `pin`
    fn pin_config(&self, pin: u8) -> PinConfig {
        debug_assert!(pin < 16);
        let gpio = self.block();
        PortImage {
            moder: gpio.moder.read().bits(),
            otyper: gpio.otyper.read().bits(),
            ospeedr: gpio.ospeedr.read().bits(),
            pupdr: gpio.pupdr.read().bits(),
            afr: [gpio.afrl.read().bits(), gpio.afrh.read().bits()],
        }
        .pin_config(pin)
    }

    /// Changes only the output speed of `pin`
    fn set_speed(&self, pin: u8, speed: Speed) {
        debug_assert!(pin < 16);
        let ospeedr = &self.block().ospeedr;
        interrupt::free(|_| unsafe {
            ospeedr.modify(|r, w| w.bits(set_field2(r.bits(), pin, speed as u32)))
        })
    }

    /// Changes only the pull resistor of `pin`
    fn set_pull(&self, pin: u8, pull: Pull) {
        debug_assert!(pin < 16);
        let pupdr = &self.block().pupdr;
        interrupt::free(|_| unsafe {
            pupdr.modify(|r, w| w.bits(set_field2(r.bits(), pin, pull as u32)))
        })
    }

    #[inline(always)]
    fn set(&self, pin: u8, state: PinState) {
        debug_assert!(pin < 16);
        // NOTE(unsafe) atomic write to a stateless register
        unsafe { self.block().bsrr.write(|w| w.bits(bsrr_for(pin, state))) }
    }

    #[inline(always)]
    fn set_high(&self, pin: u8) {
        debug_assert!(pin < 16);
        // NOTE(unsafe) atomic write to a stateless register
        unsafe { self.block().bsrr.write(|w| w.bits(bv(pin))) }
    }

    #[inline(always)]
    fn set_low(&self, pin: u8) {
        debug_assert!(pin < 16);
        // NOTE(unsafe) atomic write to a stateless register
        unsafe { self.block().brr.write(|w| w.bits(bv(pin))) }
    }

    /// Drives every pin in `mask` high
    #[inline(always)]
    fn set_high_mask(&self, mask: u16) {
        unsafe { self.block().bsrr.write(|w| w.bits(mask as u32)) }
    }

    /// Drives every pin in `mask` low
    #[inline(always)]
    fn set_low_mask(&self, mask: u16) {
        unsafe { self.block().brr.write(|w| w.bits(mask as u32)) }
    }

    /// Drives the pins in `high` high and the pins in `low` low with a single write
    #[inline(always)]
    fn set_masks(&self, high: u16, low: u16) {
        unsafe { self.block().bsrr.write(|w| w.bits(bsrr_masks(high, low))) }
    }

    /// Input bit of `pin` left at its position: `0` or `1 << pin`
    #[inline(always)]
    fn input_bit(&self, pin: u8) -> u16 {
        debug_assert!(pin < 16);
        (self.block().idr.read().bits() & bv(pin)) as u16
    }

    #[inline(always)]
    fn is_high(&self, pin: u8) -> bool {
        self.input_bit(pin) != 0
    }

    #[inline(always)]
    fn is_low(&self, pin: u8) -> bool {
        self.input_bit(pin) == 0
    }

    /// Output latch state of `pin`
    #[inline(always)]
    fn is_set_high(&self, pin: u8) -> bool {
        debug_assert!(pin < 16);
        self.block().odr.read().bits() & bv(pin) != 0
    }

    /// Input levels of all 16 pins
    #[inline(always)]
    fn read_input(&self) -> u16 {
        self.block().idr.read().bits() as u16
    }

    /// Output latches of all 16 pins
    #[inline(always)]
    fn read_output(&self) -> u16 {
        self.block().odr.read().bits() as u16
    }
}

// Must run with interrupts masked
fn write_config(gpio: &RegisterBlock, pin: u8, cfg: PinConfig) {
    // NOTE(unsafe) each write only replaces the bits belonging to `pin`
    unsafe {
        gpio.otyper
            .modify(|r, w| w.bits(cfg.update_otyper(r.bits(), pin)));
        gpio.pupdr
            .modify(|r, w| w.bits(cfg.update_pupdr(r.bits(), pin)));
        gpio.ospeedr
            .modify(|r, w| w.bits(cfg.update_ospeedr(r.bits(), pin)));
        match afr_index(pin) {
            (0, _) => gpio.afrl.modify(|r, w| w.bits(cfg.update_afr(r.bits(), pin))),
            _ => gpio.afrh.modify(|r, w| w.bits(cfg.update_afr(r.bits(), pin))),
        }
        gpio.moder
            .modify(|r, w| w.bits(cfg.update_moder(r.bits(), pin)));
    }
}

impl GpioPort for RegisterBlock {
    #[inline(always)]
    fn block(&self) -> &RegisterBlock {
        self
    }
}

macro_rules! gpio_port {
    ($($GPIOX:ident,)+) => {
        $(
            impl GpioPort for pac::$GPIOX {
                #[inline(always)]
                fn block(&self) -> &RegisterBlock {
                    // NOTE(unsafe) all ports share the GPIOA register layout
                    unsafe { &*(pac::$GPIOX::ptr() as *const RegisterBlock) }
                }
            }
        )+
    }
}

gpio_port! {
    GPIOA,
    GPIOB,
    GPIOC,
    GPIOD,
    GPIOF,
}
