use super::*;

// The Cortex-M0 has no bit-banding, read-modify-write the shared RCC registers with
// interrupts masked instead.
macro_rules! bus_enable {
    ($PER:ident => $bit:literal) => {
        impl Enable for crate::pac::$PER {
            #[inline(always)]
            fn enable(rcc: &rcc::RegisterBlock) {
                cortex_m::interrupt::free(|_| unsafe {
                    Self::Bus::enr(rcc).modify(|r, w| w.bits(r.bits() | (1 << $bit)));
                });
                // The clock reaches the port two AHB cycles after the write
                cortex_m::asm::dsb();
            }
            #[inline(always)]
            fn disable(rcc: &rcc::RegisterBlock) {
                cortex_m::interrupt::free(|_| unsafe {
                    Self::Bus::enr(rcc).modify(|r, w| w.bits(r.bits() & !(1 << $bit)));
                });
            }
            #[inline(always)]
            fn is_enabled() -> bool {
                let rcc = RCC::ptr();
                (Self::Bus::enr(unsafe { &*rcc }).read().bits() >> $bit) & 0x1 != 0
            }
        }
    };
}

macro_rules! bus_reset {
    ($PER:ident => $bit:literal) => {
        impl Reset for crate::pac::$PER {
            #[inline(always)]
            fn reset(rcc: &rcc::RegisterBlock) {
                let rstr = Self::Bus::rstr(rcc);
                cortex_m::interrupt::free(|_| unsafe {
                    rstr.modify(|r, w| w.bits(r.bits() | (1 << $bit)));
                    rstr.modify(|r, w| w.bits(r.bits() & !(1 << $bit)));
                });
            }
        }
    };
}

macro_rules! bus {
    ($($PER:ident => ($busX:ty, $bit:literal),)+) => {
        $(
            impl crate::Sealed for crate::pac::$PER {}
            impl RccBus for crate::pac::$PER {
                type Bus = $busX;
            }
            bus_enable!($PER => $bit);
            bus_reset!($PER => $bit);
        )+
    }
}

bus! {
    GPIOA => (AHB, 17),
    GPIOB => (AHB, 18),
    GPIOC => (AHB, 19),
    GPIOD => (AHB, 20),
    GPIOF => (AHB, 22),
}
