use super::*;

pub type EPin<MODE> = ErasedPin<MODE>;

/// Pin whose port and number are only known at runtime
///
/// Obtained with [`Pin::erase`]. All erased pins of one mode share a type, so pins of
/// different ports fit in one array. Output and input methods are the same as on [`Pin`].
pub struct ErasedPin<MODE> {
    port: u8,
    pin: u8,
    _mode: PhantomData<MODE>,
}

impl<MODE> ErasedPin<MODE> {
    pub(crate) fn new(port: u8, pin: u8) -> Self {
        Self {
            port,
            pin,
            _mode: PhantomData,
        }
    }
}

impl<MODE> PinExt for ErasedPin<MODE> {
    type Mode = MODE;

    #[inline(always)]
    fn pin_id(&self) -> u8 {
        self.pin
    }
    #[inline(always)]
    fn port_id(&self) -> u8 {
        self.port
    }
}
