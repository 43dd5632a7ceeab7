//! `embedded-hal` 1.0 digital traits

use core::convert::Infallible;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use super::{Dynamic, ErasedPin, Input, OpenDrain, Output, Pin, PinModeError, PinState};

impl From<digital::PinState> for PinState {
    fn from(state: digital::PinState) -> Self {
        match state {
            digital::PinState::Low => PinState::Low,
            digital::PinState::High => PinState::High,
        }
    }
}

impl From<PinState> for digital::PinState {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => Self::Low,
            PinState::High => Self::High,
        }
    }
}

impl digital::Error for PinModeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl<const P: char, const N: u8, Otype> ErrorType for Pin<P, N, Output<Otype>> {
    type Error = Infallible;
}
impl<const P: char, const N: u8, PULL> ErrorType for Pin<P, N, Input<PULL>> {
    type Error = Infallible;
}
impl<MODE> ErrorType for ErasedPin<MODE> {
    type Error = Infallible;
}

// The trait methods forward to the inherent ones of the same name
macro_rules! output_pin {
    ($([$($gen:tt)*] $Ty:ty,)+) => {$(
        impl<$($gen)*> OutputPin for $Ty {
            #[inline]
            fn set_high(&mut self) -> Result<(), Self::Error> {
                <$Ty>::set_high(self);
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Self::Error> {
                <$Ty>::set_low(self);
                Ok(())
            }

            #[inline]
            fn set_state(&mut self, state: digital::PinState) -> Result<(), Self::Error> {
                <$Ty>::set_state(self, state.into());
                Ok(())
            }
        }

        impl<$($gen)*> StatefulOutputPin for $Ty {
            #[inline]
            fn is_set_high(&mut self) -> Result<bool, Self::Error> {
                Ok(<$Ty>::is_set_high(self))
            }

            #[inline]
            fn is_set_low(&mut self) -> Result<bool, Self::Error> {
                Ok(<$Ty>::is_set_low(self))
            }

            #[inline]
            fn toggle(&mut self) -> Result<(), Self::Error> {
                <$Ty>::toggle(self);
                Ok(())
            }
        }
    )+};
}

macro_rules! input_pin {
    ($([$($gen:tt)*] $Ty:ty,)+) => {$(
        impl<$($gen)*> InputPin for $Ty {
            #[inline]
            fn is_high(&mut self) -> Result<bool, Self::Error> {
                Ok(<$Ty>::is_high(self))
            }

            #[inline]
            fn is_low(&mut self) -> Result<bool, Self::Error> {
                Ok(<$Ty>::is_low(self))
            }
        }
    )+};
}

output_pin! {
    [const P: char, const N: u8, Otype] Pin<P, N, Output<Otype>>,
    [Otype] ErasedPin<Output<Otype>>,
}

input_pin! {
    [const P: char, const N: u8, PULL] Pin<P, N, Input<PULL>>,
    [const P: char, const N: u8] Pin<P, N, Output<OpenDrain>>,
    [PULL] ErasedPin<Input<PULL>>,
    [] ErasedPin<Output<OpenDrain>>,
}

// Dynamic pins report a mode mismatch instead of touching the registers

impl<const P: char, const N: u8> ErrorType for Pin<P, N, Dynamic> {
    type Error = PinModeError;
}

impl<const P: char, const N: u8> OutputPin for Pin<P, N, Dynamic> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        <Pin<P, N, Dynamic>>::set_state(self, PinState::High)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        <Pin<P, N, Dynamic>>::set_state(self, PinState::Low)
    }

    fn set_state(&mut self, state: digital::PinState) -> Result<(), Self::Error> {
        <Pin<P, N, Dynamic>>::set_state(self, state.into())
    }
}

impl<const P: char, const N: u8> InputPin for Pin<P, N, Dynamic> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        <Pin<P, N, Dynamic>>::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        <Pin<P, N, Dynamic>>::is_low(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_state_converts_both_ways() {
        assert_eq!(PinState::from(digital::PinState::High), PinState::High);
        assert_eq!(digital::PinState::from(PinState::Low), digital::PinState::Low);
    }

    #[test]
    fn mode_error_kind() {
        use digital::Error;
        assert_eq!(PinModeError::IncorrectMode.kind(), ErrorKind::Other);
    }
}
