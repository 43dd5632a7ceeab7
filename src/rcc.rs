//! # Reset & Clock Control
//!
//! Only the parts needed to bring the GPIO ports up are provided: every port sits on the AHB
//! and has to be clocked before its registers respond.
//!
//! ```rust,ignore
//! // Equivalent of setting IOPAEN in RCC_AHBENR by hand
//! rcc::enable_port::<pac::GPIOA>();
//! ```

use crate::pac::{rcc, RCC};

mod enable;

/// AMBA High-performance Bus (AHB) registers
pub struct AHB {
    _0: (),
}

impl AHB {
    fn enr(rcc: &rcc::RegisterBlock) -> &rcc::AHBENR {
        &rcc.ahbenr
    }

    fn rstr(rcc: &rcc::RegisterBlock) -> &rcc::AHBRSTR {
        &rcc.ahbrstr
    }
}

/// Bus associated to peripheral
pub trait RccBus: crate::Sealed {
    /// Bus type;
    type Bus;
}

/// Enable/disable peripheral
pub trait Enable: RccBus {
    fn enable(rcc: &rcc::RegisterBlock);
    fn disable(rcc: &rcc::RegisterBlock);
    fn is_enabled() -> bool;
}

/// Reset peripheral
pub trait Reset: RccBus {
    fn reset(rcc: &rcc::RegisterBlock);
}

/// Starts the clock of a GPIO port without resetting it
#[inline]
pub fn enable_port<PORT: Enable>() {
    // NOTE(unsafe) the enable bits are changed inside a critical section
    let rcc = unsafe { &*RCC::ptr() };
    PORT::enable(rcc);
}
