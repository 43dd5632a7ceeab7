//! # General Purpose I/Os
//!
//! The STM32F030 has up to five ports, `GPIOA`, `GPIOB`, `GPIOC`, `GPIOD` and `GPIOF`, of up
//! to 16 pins each. They can be driven at two levels.
//!
//! ## Pin numbers
//!
//! [`GpioPort`] is implemented for the `pac` port blocks. Pins are plain numbers and each
//! method is one register access (or one critical section for configuration changes):
//!
//! ```rust,ignore
//! rcc::enable_port::<pac::GPIOB>();
//! let gpiob = dp.GPIOB;
//! gpiob.configure(1, ModeFlags::GP_OUTPUT | ModeFlags::OPEN_DRAIN);
//! gpiob.set(1, PinState::High);
//! let pressed = gpiob.is_low(0);
//! ```
//!
//! ## Typed pins
//!
//! [`GpioExt::split`] starts the port clock and returns one value per pin. The port, the pin
//! number and the mode are part of the type, so driving an input or reading a push-pull
//! output does not compile:
//!
//! ```rust,ignore
//! let gpioa = dp.GPIOA.split();
//! let mut led = gpioa.pa5.into_push_pull_output();
//! led.set_high();
//! let button = gpioa.pa0.into_pull_up_input();
//! ```
//!
//! Typed pins are a thin layer over [`GpioPort`]: a mode change is a [`GpioPort::update`] of
//! the pin's configuration. Pins of the same port may live in different interrupt handlers.
//!
//! ## Modes
//!
//! | type                        | `MODER`   | also written                  |
//! |-----------------------------|-----------|-------------------------------|
//! | `Input<Floating>`           | input     | no pull                       |
//! | `Input<PullUp>`             | input     | pull-up                       |
//! | `Input<PullDown>`           | input     | pull-down                     |
//! | `Output<PushPull>`          | output    | push-pull                     |
//! | `Output<OpenDrain>`         | output    | open drain                    |
//! | `Alternate<A, PushPull>`    | alternate | function `A` (0 to 7)         |
//! | `Alternate<A, OpenDrain>`   | alternate | function `A`, open drain      |
//! | `Analog`                    | analog    |                               |
//! | `Dynamic`                   | any       | chosen at runtime             |
//!
//! PA13 and PA14 leave reset as SWDIO and SWCLK and are handed out as `Debugger`. Converting
//! them disconnects the debug probe.
//!
//! `into_*` conversions keep the output speed already set for the pin. [`Pin::with_mode`]
//! switches a pin for the duration of a closure and then restores its whole configuration.

use core::marker::PhantomData;
use core::ops::Not;

use crate::pac;

pub mod config;
pub use config::{AltFn, Mode, ModeFlags, OutputType, PinConfig, PortImage, Pull, Speed};
mod port;
pub use port::{GpioPort, RegisterBlock};

mod erased;
pub use erased::{EPin, ErasedPin};
mod hal_1;

/// Location of a pin
pub trait PinExt {
    type Mode;
    /// Pin number, `0..=15`
    fn pin_id(&self) -> u8;
    /// Port number, `0` for GPIOA up to `5` for GPIOF
    fn port_id(&self) -> u8;
}

/// Slew rate control of pins that drive their output
///
/// All pins leave reset at low speed, except PA14 (SWCLK).
pub trait OutputSpeed {
    fn set_speed(&mut self, speed: Speed);
}

/// Extension trait to split a GPIO peripheral into independent pins
pub trait GpioExt {
    /// The parts to split the GPIO into
    type Parts;

    /// Starts the port clock, resets the port and splits it into independent pins
    fn split(self) -> Self::Parts;
}

/// Modes a pin can be converted from
pub trait Active {}

/// Input mode (type state)
#[derive(Default)]
pub struct Input<PULL>(PhantomData<PULL>);
/// Floating input (type state)
#[derive(Default)]
pub struct Floating;
/// Pulled down input (type state)
#[derive(Default)]
pub struct PullDown;
/// Pulled up input (type state)
#[derive(Default)]
pub struct PullUp;

/// Output mode (type state)
#[derive(Default)]
pub struct Output<Otype>(PhantomData<Otype>);
/// Push pull output (type state)
#[derive(Default)]
pub struct PushPull;
/// Open drain output (type state)
#[derive(Default)]
pub struct OpenDrain;

/// Alternate function `A` (type state)
///
/// Only functions 0 to 7 exist, other numbers are rejected when the pin is converted:
///
/// ```compile_fail
/// use stm32f0_gpio::gpio::{gpioa::PA9, Alternate, PushPull};
///
/// fn route(pin: PA9) -> PA9<Alternate<9, PushPull>> {
///     pin.into_alternate::<9>()
/// }
/// let _: fn(PA9) -> PA9<Alternate<9, PushPull>> = route;
/// ```
#[derive(Default)]
pub struct Alternate<const A: u8, Otype>(PhantomData<Otype>);

impl<const A: u8, Otype> Alternate<A, Otype> {
    const AF: AltFn = {
        assert!(A < 8, "alternate function number must be in 0..=7");
        AltFn::from_bits(A as u32)
    };
}

/// Analog mode (type state)
#[derive(Default)]
pub struct Analog;

/// SWD pin as left by reset (type state)
#[derive(Default)]
pub struct Debugger;

impl<PULL> Active for Input<PULL> {}
impl<Otype> Active for Output<Otype> {}
impl<const A: u8, Otype> Active for Alternate<A, Otype> {}
impl Active for Analog {}
impl Active for Debugger {}
impl Active for Dynamic {}

/// Digital output pin state
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinState {
    High,
    Low,
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        if high {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl Not for PinState {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            PinState::High => PinState::Low,
            PinState::Low => PinState::High,
        }
    }
}

mod sealed {
    use super::PinConfig;

    /// Modes with a fixed register configuration
    pub trait PinMode: Default {
        const CONFIG: PinConfig;
    }

    /// Modes in which the pin drives its output stage
    pub trait Driven {}
}
use sealed::{Driven, PinMode};

impl PinMode for Input<Floating> {
    const CONFIG: PinConfig = PinConfig::input();
}
impl PinMode for Input<PullUp> {
    const CONFIG: PinConfig = PinConfig::input().pull(Pull::Up);
}
impl PinMode for Input<PullDown> {
    const CONFIG: PinConfig = PinConfig::input().pull(Pull::Down);
}
impl PinMode for Output<PushPull> {
    const CONFIG: PinConfig = PinConfig::output();
}
impl PinMode for Output<OpenDrain> {
    const CONFIG: PinConfig = PinConfig::output().otype(OutputType::OpenDrain);
}
impl<const A: u8> PinMode for Alternate<A, PushPull> {
    const CONFIG: PinConfig = PinConfig::alternate(Self::AF);
}
impl<const A: u8> PinMode for Alternate<A, OpenDrain> {
    const CONFIG: PinConfig = PinConfig::alternate(Self::AF).otype(OutputType::OpenDrain);
}
impl PinMode for Analog {
    const CONFIG: PinConfig = PinConfig::analog();
}

impl<Otype> Driven for Output<Otype> {}
impl<const A: u8, Otype> Driven for Alternate<A, Otype> {}

/// Mode selected at runtime
///
/// Holds the configuration last written to the pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Dynamic(PinConfig);

impl Dynamic {
    /// Configuration of the pin
    pub fn config(&self) -> PinConfig {
        self.0
    }

    /// Whether the input data register reflects the pin level
    ///
    /// Analog mode disconnects the Schmitt trigger, push-pull outputs only read back
    /// their own latch.
    pub fn is_readable(&self) -> bool {
        match self.0.mode {
            Mode::Input | Mode::Alternate => true,
            Mode::Output => self.0.otype == OutputType::OpenDrain,
            Mode::Analog => false,
        }
    }

    /// Whether the output data register controls the pin
    pub fn is_drivable(&self) -> bool {
        self.0.mode == Mode::Output
    }
}

/// Returned by [`Dynamic`] pins used against their current mode
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinModeError {
    IncorrectMode,
}

/// Generic pin type
///
/// - `P` is the port letter: `'A'` for GPIOA, `'B'` for GPIOB, etc.
/// - `N` is the pin number, `0..=15`.
/// - `MODE` is one of the pin modes (see [Modes](crate::gpio#modes)).
pub struct Pin<const P: char, const N: u8, MODE> {
    mode: MODE,
}

impl<const P: char, const N: u8, MODE> Pin<P, N, MODE> {
    const fn new(mode: MODE) -> Self {
        Self { mode }
    }

    // Switches to `cfg` with the speed currently programmed
    #[inline(always)]
    fn enter(cfg: PinConfig) -> PinConfig {
        Gpio::<P>::block().update(N, |current| cfg.speed(current.speed))
    }
}

impl<const P: char, const N: u8, MODE> PinExt for Pin<P, N, MODE> {
    type Mode = MODE;

    #[inline(always)]
    fn pin_id(&self) -> u8 {
        N
    }
    #[inline(always)]
    fn port_id(&self) -> u8 {
        P as u8 - b'A'
    }
}

impl<const P: char, const N: u8, MODE: Active> Pin<P, N, MODE> {
    /// Erases the port and pin number from the type
    ///
    /// Useful to keep pins of different ports in one array.
    #[inline]
    pub fn erase(self) -> ErasedPin<MODE> {
        ErasedPin::new(P as u8 - b'A', N)
    }

    #[inline]
    pub fn into_floating_input(self) -> Pin<P, N, Input<Floating>> {
        self.into_mode()
    }

    #[inline]
    pub fn into_pull_down_input(self) -> Pin<P, N, Input<PullDown>> {
        self.into_mode()
    }

    #[inline]
    pub fn into_pull_up_input(self) -> Pin<P, N, Input<PullUp>> {
        self.into_mode()
    }

    /// Open drain output, initially low
    #[inline]
    pub fn into_open_drain_output(self) -> Pin<P, N, Output<OpenDrain>> {
        self.into_open_drain_output_with_state(PinState::Low)
    }

    /// Open drain output, latch loaded with `initial_state` before the mode switch
    #[inline]
    pub fn into_open_drain_output_with_state(
        self,
        initial_state: PinState,
    ) -> Pin<P, N, Output<OpenDrain>> {
        Gpio::<P>::block().set(N, initial_state);
        self.into_mode()
    }

    /// Push-pull output, initially low
    #[inline]
    pub fn into_push_pull_output(self) -> Pin<P, N, Output<PushPull>> {
        self.into_push_pull_output_with_state(PinState::Low)
    }

    /// Push-pull output, latch loaded with `initial_state` before the mode switch
    #[inline]
    pub fn into_push_pull_output_with_state(
        self,
        initial_state: PinState,
    ) -> Pin<P, N, Output<PushPull>> {
        Gpio::<P>::block().set(N, initial_state);
        self.into_mode()
    }

    /// Hands the pin to alternate function `A` with a push-pull driver
    #[inline]
    pub fn into_alternate<const A: u8>(self) -> Pin<P, N, Alternate<A, PushPull>> {
        self.into_mode()
    }

    /// Hands the pin to alternate function `A` with an open-drain driver
    #[inline]
    pub fn into_alternate_open_drain<const A: u8>(self) -> Pin<P, N, Alternate<A, OpenDrain>> {
        self.into_mode()
    }

    #[inline]
    pub fn into_analog(self) -> Pin<P, N, Analog> {
        self.into_mode()
    }

    /// Pin whose mode is tracked at runtime, starting as a floating input
    #[inline]
    pub fn into_dynamic(self) -> Pin<P, N, Dynamic> {
        Pin::new(Dynamic(Self::enter(PinConfig::input())))
    }

    /// Converts the pin into any of the statically known modes
    #[inline]
    pub fn into_mode<M: PinMode>(self) -> Pin<P, N, M> {
        Self::enter(M::CONFIG);
        Pin::new(M::default())
    }

    /// Runs `f` with the pin temporarily in mode `M`
    ///
    /// The complete previous configuration (speed and pull included) is restored
    /// afterwards. The output latch is left as `f` set it.
    pub fn with_mode<M: PinMode, R>(&mut self, f: impl FnOnce(&mut Pin<P, N, M>) -> R) -> R {
        let port = Gpio::<P>::block();
        let saved = port.pin_config(N);
        Self::enter(M::CONFIG);
        let result = f(&mut Pin::new(M::default()));
        port.configure(N, saved);
        result
    }
}

impl<const P: char, const N: u8, MODE: Driven> OutputSpeed for Pin<P, N, MODE> {
    #[inline]
    fn set_speed(&mut self, speed: Speed) {
        Gpio::<P>::block().set_speed(N, speed)
    }
}

impl<const P: char, const N: u8, MODE: Driven> Pin<P, N, MODE> {
    /// Builder-style [`OutputSpeed::set_speed`]
    #[inline]
    pub fn speed(mut self, speed: Speed) -> Self {
        self.set_speed(speed);
        self
    }

    /// Internal pull-up or pull-down, for example on an open-drain bus line
    #[inline]
    pub fn set_internal_resistor(&mut self, pull: Pull) {
        Gpio::<P>::block().set_pull(N, pull)
    }
}

// Output latch access shared by typed and erased pins
macro_rules! output_ops {
    ($([$($gen:tt)*] $Ty:ty,)+) => {$(
        impl<$($gen)*> $Ty {
            #[inline(always)]
            pub fn set_high(&mut self) {
                port_block(self.port_id()).set_high(self.pin_id())
            }

            #[inline(always)]
            pub fn set_low(&mut self) {
                port_block(self.port_id()).set_low(self.pin_id())
            }

            #[inline(always)]
            pub fn set_state(&mut self, state: PinState) {
                port_block(self.port_id()).set(self.pin_id(), state)
            }

            /// State held in the output latch
            #[inline(always)]
            pub fn get_state(&self) -> PinState {
                self.is_set_high().into()
            }

            #[inline(always)]
            pub fn is_set_high(&self) -> bool {
                port_block(self.port_id()).is_set_high(self.pin_id())
            }

            #[inline(always)]
            pub fn is_set_low(&self) -> bool {
                !self.is_set_high()
            }

            #[inline(always)]
            pub fn toggle(&mut self) {
                let next = !self.get_state();
                self.set_state(next)
            }
        }
    )+};
}

// Input data register access shared by typed and erased pins
macro_rules! input_ops {
    ($([$($gen:tt)*] $Ty:ty,)+) => {$(
        impl<$($gen)*> $Ty {
            #[inline(always)]
            pub fn is_high(&self) -> bool {
                port_block(self.port_id()).is_high(self.pin_id())
            }

            #[inline(always)]
            pub fn is_low(&self) -> bool {
                port_block(self.port_id()).is_low(self.pin_id())
            }
        }
    )+};
}

output_ops! {
    [const P: char, const N: u8, Otype] Pin<P, N, Output<Otype>>,
    [Otype] ErasedPin<Output<Otype>>,
}

input_ops! {
    [const P: char, const N: u8, PULL] Pin<P, N, Input<PULL>>,
    [const P: char, const N: u8] Pin<P, N, Output<OpenDrain>>,
    [PULL] ErasedPin<Input<PULL>>,
    [] ErasedPin<Output<OpenDrain>>,
}

impl<const P: char, const N: u8> Pin<P, N, Dynamic> {
    /// Current mode of the pin
    #[inline]
    pub fn mode(&self) -> Dynamic {
        self.mode
    }

    /// Writes an arbitrary configuration, speed included
    pub fn reconfigure(&mut self, cfg: impl Into<PinConfig>) {
        let cfg = cfg.into();
        Gpio::<P>::block().configure(N, cfg);
        self.mode = Dynamic(cfg);
    }

    #[inline]
    fn make<M: PinMode>(&mut self) {
        self.mode = Dynamic(Self::enter(M::CONFIG));
    }

    #[inline]
    pub fn make_floating_input(&mut self) {
        self.make::<Input<Floating>>()
    }

    #[inline]
    pub fn make_pull_up_input(&mut self) {
        self.make::<Input<PullUp>>()
    }

    #[inline]
    pub fn make_pull_down_input(&mut self) {
        self.make::<Input<PullDown>>()
    }

    #[inline]
    pub fn make_push_pull_output(&mut self) {
        self.make::<Output<PushPull>>()
    }

    #[inline]
    pub fn make_open_drain_output(&mut self) {
        self.make::<Output<OpenDrain>>()
    }

    /// Drives the pin, if it is currently an output
    pub fn set_state(&mut self, state: PinState) -> Result<(), PinModeError> {
        if !self.mode.is_drivable() {
            return Err(PinModeError::IncorrectMode);
        }
        Gpio::<P>::block().set(N, state);
        Ok(())
    }

    #[inline]
    pub fn set_high(&mut self) -> Result<(), PinModeError> {
        self.set_state(PinState::High)
    }

    #[inline]
    pub fn set_low(&mut self) -> Result<(), PinModeError> {
        self.set_state(PinState::Low)
    }

    /// Reads the pin level, if the current mode has the input buffer connected
    pub fn is_high(&self) -> Result<bool, PinModeError> {
        if !self.mode.is_readable() {
            return Err(PinModeError::IncorrectMode);
        }
        Ok(Gpio::<P>::block().is_high(N))
    }

    #[inline]
    pub fn is_low(&self) -> Result<bool, PinModeError> {
        self.is_high().map(|high| !high)
    }
}

// Ports and their pins. Pins without an explicit mode leave reset as floating inputs.
macro_rules! port {
    ($GPIOX:ident, $gpiox:ident, $P:literal, [
        $($PXn:ident: ($pxn:ident, $n:literal $(, $MODE:ty)?),)+
    ]) => {
        /// GPIO
        pub mod $gpiox {
            use super::{GpioExt, Pin};
            use crate::pac::{$GPIOX, RCC};
            use crate::rcc::{Enable, Reset};

            /// Pins of the port, in their reset modes
            pub struct Parts {
                $(
                    pub $pxn: $PXn,
                )+
            }

            $(
                pub type $PXn<MODE = reset_mode!($($MODE)?)> = Pin<$P, $n, MODE>;
            )+

            impl GpioExt for $GPIOX {
                type Parts = Parts;

                fn split(self) -> Parts {
                    // NOTE(unsafe) only the enable and reset bits of this port are changed
                    let rcc = unsafe { &*RCC::ptr() };
                    $GPIOX::enable(rcc);
                    $GPIOX::reset(rcc);

                    Parts {
                        $(
                            $pxn: Pin::new(Default::default()),
                        )+
                    }
                }
            }
        }
    };
}

macro_rules! reset_mode {
    () => {
        $crate::gpio::Input<$crate::gpio::Floating>
    };
    ($MODE:ty) => {
        $MODE
    };
}

port!(GPIOA, gpioa, 'A', [
    PA0: (pa0, 0),
    PA1: (pa1, 1),
    PA2: (pa2, 2),
    PA3: (pa3, 3),
    PA4: (pa4, 4),
    PA5: (pa5, 5),
    PA6: (pa6, 6),
    PA7: (pa7, 7),
    PA8: (pa8, 8),
    PA9: (pa9, 9),
    PA10: (pa10, 10),
    PA11: (pa11, 11),
    PA12: (pa12, 12),
    PA13: (pa13, 13, super::Debugger),
    PA14: (pa14, 14, super::Debugger),
    PA15: (pa15, 15),
]);

port!(GPIOB, gpiob, 'B', [
    PB0: (pb0, 0),
    PB1: (pb1, 1),
    PB2: (pb2, 2),
    PB3: (pb3, 3),
    PB4: (pb4, 4),
    PB5: (pb5, 5),
    PB6: (pb6, 6),
    PB7: (pb7, 7),
    PB8: (pb8, 8),
    PB9: (pb9, 9),
    PB10: (pb10, 10),
    PB11: (pb11, 11),
    PB12: (pb12, 12),
    PB13: (pb13, 13),
    PB14: (pb14, 14),
    PB15: (pb15, 15),
]);

port!(GPIOC, gpioc, 'C', [
    PC0: (pc0, 0),
    PC1: (pc1, 1),
    PC2: (pc2, 2),
    PC3: (pc3, 3),
    PC4: (pc4, 4),
    PC5: (pc5, 5),
    PC6: (pc6, 6),
    PC7: (pc7, 7),
    PC8: (pc8, 8),
    PC9: (pc9, 9),
    PC10: (pc10, 10),
    PC11: (pc11, 11),
    PC12: (pc12, 12),
    PC13: (pc13, 13),
    PC14: (pc14, 14),
    PC15: (pc15, 15),
]);

port!(GPIOD, gpiod, 'D', [
    PD2: (pd2, 2),
]);

#[cfg(feature = "stm32f070")]
port!(GPIOF, gpiof, 'F', [
    PF0: (pf0, 0),
    PF1: (pf1, 1),
]);

#[cfg(feature = "stm32f030")]
port!(GPIOF, gpiof, 'F', [
    PF0: (pf0, 0),
    PF1: (pf1, 1),
    PF4: (pf4, 4),
    PF5: (pf5, 5),
    PF6: (pf6, 6),
    PF7: (pf7, 7),
]);

/// Port lookup by letter
///
/// `Gpio::<'B'>::block()` is the GPIOB register block. Letters other than `'A'`, `'B'`,
/// `'C'`, `'D'` and `'F'` fail to build.
pub struct Gpio<const P: char>;

impl<const P: char> Gpio<P> {
    const PTR: *const RegisterBlock = match P {
        'A' => pac::GPIOA::ptr(),
        'B' => pac::GPIOB::ptr() as _,
        'C' => pac::GPIOC::ptr() as _,
        'D' => pac::GPIOD::ptr() as _,
        'F' => pac::GPIOF::ptr() as _,
        _ => panic!("no such GPIO port"),
    };

    /// Address of the port registers
    #[inline(always)]
    pub const fn ptr() -> *const RegisterBlock {
        Self::PTR
    }

    /// Registers of the port, usable through [`GpioPort`]
    ///
    /// Bypasses the ownership of the `pac` peripheral, like [`GpioPort`] itself.
    #[inline(always)]
    pub fn block() -> &'static RegisterBlock {
        // NOTE(unsafe) the port blocks live for the whole program
        unsafe { &*Self::PTR }
    }
}

// Runtime counterpart of `Gpio::<P>::block()`, indexed by `PinExt::port_id`
#[inline(always)]
fn port_block(port_id: u8) -> &'static RegisterBlock {
    match port_id {
        0 => Gpio::<'A'>::block(),
        1 => Gpio::<'B'>::block(),
        2 => Gpio::<'C'>::block(),
        3 => Gpio::<'D'>::block(),
        _ => Gpio::<'F'>::block(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_modes_map_to_register_fields() {
        assert_eq!(<Input<PullUp>>::CONFIG.pull, Pull::Up);
        assert_eq!(<Input<PullDown>>::CONFIG.pull, Pull::Down);
        assert_eq!(<Output<OpenDrain>>::CONFIG.otype, OutputType::OpenDrain);
        assert_eq!(<Analog>::CONFIG.mode, Mode::Analog);
        assert_eq!(
            ModeFlags::from(<Alternate<1, PushPull>>::CONFIG),
            ModeFlags::ALT_1
        );
    }

    #[test]
    fn alternate_number_selects_function() {
        assert_eq!(<Alternate<0, PushPull>>::CONFIG.af, AltFn::AF0);
        assert_eq!(<Alternate<7, OpenDrain>>::CONFIG.af, AltFn::AF7);
        assert_eq!(
            <Alternate<7, OpenDrain>>::CONFIG.otype,
            OutputType::OpenDrain
        );
    }

    #[test]
    fn ports_resolve_by_letter() {
        assert_eq!(Gpio::<'A'>::ptr() as usize, 0x4800_0000);
        assert_eq!(Gpio::<'B'>::ptr() as usize, 0x4800_0400);
        assert_eq!(Gpio::<'C'>::ptr() as usize, 0x4800_0800);
        assert_eq!(Gpio::<'D'>::ptr() as usize, 0x4800_0c00);
        assert_eq!(Gpio::<'F'>::ptr() as usize, 0x4800_1400);
    }

    #[test]
    fn dynamic_access_follows_configuration() {
        let input = Dynamic(PinConfig::input().pull(Pull::Up));
        assert!(input.is_readable() && !input.is_drivable());

        let push_pull = Dynamic(PinConfig::output());
        assert!(!push_pull.is_readable() && push_pull.is_drivable());

        let open_drain = Dynamic(PinConfig::output().otype(OutputType::OpenDrain));
        assert!(open_drain.is_readable() && open_drain.is_drivable());

        let analog = Dynamic(PinConfig::analog());
        assert!(!analog.is_readable() && !analog.is_drivable());

        let alternate = Dynamic(PinConfig::alternate(AltFn::AF1));
        assert!(alternate.is_readable() && !alternate.is_drivable());
    }

    #[test]
    fn pin_state_helpers() {
        assert_eq!(!PinState::High, PinState::Low);
        assert_eq!(PinState::from(false), PinState::Low);
        assert_eq!(!PinState::from(false), PinState::High);
    }
}
