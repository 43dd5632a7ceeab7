//! # Pin configuration
//!
//! Every pin of an STM32F0 port is described by five independent fields spread over the port
//! registers:
//!
//! | field            | register          | width per pin |
//! |------------------|-------------------|---------------|
//! | mode             | `MODER`           | 2 bits        |
//! | output type      | `OTYPER`          | 1 bit         |
//! | output speed     | `OSPEEDR`         | 2 bits        |
//! | pull-up/down     | `PUPDR`           | 2 bits        |
//! | alternate func.  | `AFRL` / `AFRH`   | 4 bits        |
//!
//! [`PinConfig`] holds one value of each field. Its `update_*` methods compute the new contents
//! of a register from its current contents, changing only the bits that belong to one pin. The
//! same arithmetic is used by [`GpioPort::configure`](super::GpioPort::configure) on the real
//! registers and by [`PortImage`] on a plain copy of them.
//!
//! [`ModeFlags`] is the packed form of a configuration. Its constants can be OR-ed together:
//!
//! ```rust
//! use stm32f0_gpio::gpio::{ModeFlags, PinConfig, Pull, Speed};
//!
//! let tx = ModeFlags::ALT_1 | ModeFlags::PULL_UP | ModeFlags::HIGH_SPEED;
//! let cfg = PinConfig::from(tx);
//! assert_eq!(cfg.pull, Pull::Up);
//! assert_eq!(cfg.speed, Speed::High);
//! ```

use bitflags::bitflags;

use super::PinState;

/// Pin mode (`MODER`)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Input = 0b00,
    /// General purpose output
    Output = 0b01,
    /// Pin driven by a peripheral, see [`AltFn`]
    Alternate = 0b10,
    Analog = 0b11,
}

impl Mode {
    const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Mode::Input,
            0b01 => Mode::Output,
            0b10 => Mode::Alternate,
            _ => Mode::Analog,
        }
    }
}

/// Output driver type (`OTYPER`)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    PushPull = 0,
    OpenDrain = 1,
}

/// Internal pull-up / pull-down resistor (`PUPDR`)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pull {
    None = 0b00,
    Up = 0b01,
    Down = 0b10,
}

impl Pull {
    // 0b11 is reserved, the hardware treats it as no pull
    const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b01 => Pull::Up,
            0b10 => Pull::Down,
            _ => Pull::None,
        }
    }
}

/// Output slew rate (`OSPEEDR`)
///
/// See the "I/O AC characteristics" table of the datasheet for the frequencies.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speed {
    Low = 0b00,
    Medium = 0b01,
    High = 0b11,
}

impl Speed {
    // x0 selects the low speed
    const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b01 => Speed::Medium,
            0b11 => Speed::High,
            _ => Speed::Low,
        }
    }
}

/// Alternate function number (`AFRL` / `AFRH`)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AltFn {
    AF0 = 0,
    AF1 = 1,
    AF2 = 2,
    AF3 = 3,
    AF4 = 4,
    AF5 = 5,
    AF6 = 6,
    AF7 = 7,
}

impl AltFn {
    /// Alternate function from its number. Only the low three bits are used.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b111 {
            0 => AltFn::AF0,
            1 => AltFn::AF1,
            2 => AltFn::AF2,
            3 => AltFn::AF3,
            4 => AltFn::AF4,
            5 => AltFn::AF5,
            6 => AltFn::AF6,
            _ => AltFn::AF7,
        }
    }
}

/// Complete configuration of one pin
///
/// Fields that the selected mode does not use (for example the speed of an input) are still
/// written to the registers, the hardware ignores them.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    pub mode: Mode,
    pub otype: OutputType,
    pub pull: Pull,
    pub speed: Speed,
    pub af: AltFn,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self::input()
    }
}

impl PinConfig {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            otype: OutputType::PushPull,
            pull: Pull::None,
            speed: Speed::Low,
            af: AltFn::AF0,
        }
    }

    /// Floating input, the reset state of most pins
    pub const fn input() -> Self {
        Self::new(Mode::Input)
    }

    /// Push-pull output, low speed
    pub const fn output() -> Self {
        Self::new(Mode::Output)
    }

    pub const fn alternate(af: AltFn) -> Self {
        Self::new(Mode::Alternate).af(af)
    }

    pub const fn analog() -> Self {
        Self::new(Mode::Analog)
    }

    pub const fn otype(self, otype: OutputType) -> Self {
        Self { otype, ..self }
    }

    pub const fn pull(self, pull: Pull) -> Self {
        Self { pull, ..self }
    }

    pub const fn speed(self, speed: Speed) -> Self {
        Self { speed, ..self }
    }

    pub const fn af(self, af: AltFn) -> Self {
        Self { af, ..self }
    }

    /// New `MODER` value with the mode of `pin` replaced
    #[inline(always)]
    pub const fn update_moder(&self, current: u32, pin: u8) -> u32 {
        set_field2(current, pin, self.mode as u32)
    }

    /// New `OTYPER` value with the output type of `pin` replaced
    #[inline(always)]
    pub const fn update_otyper(&self, current: u32, pin: u8) -> u32 {
        match self.otype {
            OutputType::OpenDrain => current | bv(pin),
            OutputType::PushPull => current & !bv(pin),
        }
    }

    /// New `PUPDR` value with the pull of `pin` replaced
    #[inline(always)]
    pub const fn update_pupdr(&self, current: u32, pin: u8) -> u32 {
        set_field2(current, pin, self.pull as u32)
    }

    /// New `OSPEEDR` value with the speed of `pin` replaced
    #[inline(always)]
    pub const fn update_ospeedr(&self, current: u32, pin: u8) -> u32 {
        set_field2(current, pin, self.speed as u32)
    }

    /// New value of the alternate function register selected by [`afr_index`]
    #[inline(always)]
    pub const fn update_afr(&self, current: u32, pin: u8) -> u32 {
        let (_, shift) = afr_index(pin);
        (current & !(0xf << shift)) | ((self.af as u32) << shift)
    }
}

/// Bit value of `n`
#[inline(always)]
pub const fn bv(n: u8) -> u32 {
    1 << n
}

/// Replaces the 2-bit field of `pin` in `current`
#[inline(always)]
pub const fn set_field2(current: u32, pin: u8, value: u32) -> u32 {
    let shift = 2 * pin as u32;
    (current & !(0b11 << shift)) | ((value & 0b11) << shift)
}

#[inline(always)]
const fn get_field2(current: u32, pin: u8) -> u32 {
    (current >> (2 * pin as u32)) & 0b11
}

/// Alternate function register of `pin` and the offset of its nibble in that register
///
/// The register index is `0` (`AFRL`) for pins 0..=7 and `1` (`AFRH`) for pins 8..=15.
#[inline(always)]
pub const fn afr_index(pin: u8) -> (usize, u32) {
    let offset = 4 * pin as u32;
    ((offset / 32) as usize, offset & 0x1f)
}

/// `BSRR` word driving `pin` to `state`
///
/// The low half of `BSRR` sets pins, the high half resets them.
#[inline(always)]
pub const fn bsrr_for(pin: u8, state: PinState) -> u32 {
    match state {
        PinState::High => bv(pin),
        PinState::Low => bv(pin + 16),
    }
}

/// `BSRR` word setting the pins in `high` and resetting the pins in `low` in one write
///
/// A pin present in both masks ends up high.
#[inline(always)]
pub const fn bsrr_masks(high: u16, low: u16) -> u32 {
    (high as u32) | ((low as u32) << 16)
}

/// Copy of the configuration registers of one port
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortImage {
    pub moder: u32,
    pub otyper: u32,
    pub ospeedr: u32,
    pub pupdr: u32,
    /// `AFRL`, `AFRH`
    pub afr: [u32; 2],
}

impl PortImage {
    /// Writes the configuration of `pin` into the image
    pub fn apply(&mut self, pin: u8, cfg: impl Into<PinConfig>) {
        debug_assert!(pin < 16);
        let cfg = cfg.into();
        let (i, _) = afr_index(pin);
        self.otyper = cfg.update_otyper(self.otyper, pin);
        self.moder = cfg.update_moder(self.moder, pin);
        self.pupdr = cfg.update_pupdr(self.pupdr, pin);
        self.ospeedr = cfg.update_ospeedr(self.ospeedr, pin);
        self.afr[i] = cfg.update_afr(self.afr[i], pin);
    }

    /// Rewrites the configuration of `pin` with `f` and returns the new value
    ///
    /// Same contract as [`GpioPort::update`](super::GpioPort::update) on a live port.
    pub fn update(&mut self, pin: u8, f: impl FnOnce(PinConfig) -> PinConfig) -> PinConfig {
        let cfg = f(self.pin_config(pin));
        self.apply(pin, cfg);
        cfg
    }

    /// Decodes the configuration of `pin`
    pub fn pin_config(&self, pin: u8) -> PinConfig {
        debug_assert!(pin < 16);
        let (i, shift) = afr_index(pin);
        PinConfig {
            mode: Mode::from_bits(get_field2(self.moder, pin)),
            otype: if self.otyper & bv(pin) != 0 {
                OutputType::OpenDrain
            } else {
                OutputType::PushPull
            },
            pull: Pull::from_bits(get_field2(self.pupdr, pin)),
            speed: Speed::from_bits(get_field2(self.ospeedr, pin)),
            af: AltFn::from_bits(self.afr[i] >> shift),
        }
    }
}

const MODE_MASK: u32 = 0x600;
const MODE_SHIFT: u32 = 9;
const OTYPE_MASK: u32 = 0x100;
const SPEED_MASK: u32 = 0xc0;
const SPEED_SHIFT: u32 = 6;
const PULL_MASK: u32 = 0x30;
const PULL_SHIFT: u32 = 4;
const AF_MASK: u32 = 0x0f;

bitflags! {
    /// Packed pin configuration
    ///
    /// Pick one constant from each group and OR them together. Zero-valued constants are the
    /// defaults of their group and only exist for readability.
    ///
    /// - mode: `INPUT`, `GP_OUTPUT`, `ALTERNATE`, `ANALOG` (bits 9..=10)
    /// - output type: `PUSH_PULL`, `OPEN_DRAIN` (bit 8)
    /// - speed: `LOW_SPEED`, `MEDIUM_SPEED`, `HIGH_SPEED` (bits 6..=7)
    /// - pull: `NO_PULL`, `PULL_UP`, `PULL_DOWN` (bits 4..=5)
    /// - alternate function: `AF0`..`AF7` (bits 0..=3), or `ALT_0`..`ALT_7` which also select
    ///   the alternate mode
    pub struct ModeFlags: u32 {
        const INPUT = 0;
        const GP_OUTPUT = 1 << 9;
        const ALTERNATE = 2 << 9;
        const ANALOG = 3 << 9;

        const PUSH_PULL = 0;
        const OPEN_DRAIN = 1 << 8;

        const NO_PULL = 0;
        const PULL_UP = 1 << 4;
        const PULL_DOWN = 2 << 4;

        const LOW_SPEED = 0;
        const MEDIUM_SPEED = 1 << 6;
        const HIGH_SPEED = 3 << 6;

        const AF0 = 0;
        const AF1 = 1;
        const AF2 = 2;
        const AF3 = 3;
        const AF4 = 4;
        const AF5 = 5;
        const AF6 = 6;
        const AF7 = 7;

        const ALT_0 = Self::ALTERNATE.bits | Self::AF0.bits;
        const ALT_1 = Self::ALTERNATE.bits | Self::AF1.bits;
        const ALT_2 = Self::ALTERNATE.bits | Self::AF2.bits;
        const ALT_3 = Self::ALTERNATE.bits | Self::AF3.bits;
        const ALT_4 = Self::ALTERNATE.bits | Self::AF4.bits;
        const ALT_5 = Self::ALTERNATE.bits | Self::AF5.bits;
        const ALT_6 = Self::ALTERNATE.bits | Self::AF6.bits;
        const ALT_7 = Self::ALTERNATE.bits | Self::AF7.bits;
    }
}

impl From<ModeFlags> for PinConfig {
    fn from(flags: ModeFlags) -> Self {
        let bits = flags.bits();
        PinConfig {
            mode: Mode::from_bits((bits & MODE_MASK) >> MODE_SHIFT),
            otype: if bits & OTYPE_MASK != 0 {
                OutputType::OpenDrain
            } else {
                OutputType::PushPull
            },
            pull: Pull::from_bits((bits & PULL_MASK) >> PULL_SHIFT),
            speed: Speed::from_bits((bits & SPEED_MASK) >> SPEED_SHIFT),
            af: AltFn::from_bits(bits & AF_MASK),
        }
    }
}

impl From<PinConfig> for ModeFlags {
    fn from(cfg: PinConfig) -> Self {
        ModeFlags::from_bits_truncate(
            ((cfg.mode as u32) << MODE_SHIFT)
                | ((cfg.otype as u32) << 8)
                | ((cfg.speed as u32) << SPEED_SHIFT)
                | ((cfg.pull as u32) << PULL_SHIFT)
                | (cfg.af as u32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // GPIOA reset values on the STM32F030, PA13/PA14 in SWD alternate mode
    const GPIOA_RESET: PortImage = PortImage {
        moder: 0x2800_0000,
        otyper: 0,
        ospeedr: 0x0c00_0000,
        pupdr: 0x2400_0000,
        afr: [0, 0],
    };

    #[test]
    fn output_mode_only_touches_its_own_field() {
        let cfg = PinConfig::output();
        assert_eq!(cfg.update_moder(0x2800_0000, 5), 0x2800_0400);
        assert_eq!(cfg.update_moder(0xffff_ffff, 5), 0xffff_f7ff);
    }

    #[test]
    fn afr_register_is_selected_by_pin_number() {
        assert_eq!(afr_index(0), (0, 0));
        assert_eq!(afr_index(7), (0, 28));
        assert_eq!(afr_index(8), (1, 0));
        assert_eq!(afr_index(15), (1, 28));
    }

    #[test]
    fn usart_tx_on_pa9() {
        let mut port = GPIOA_RESET;
        port.apply(9, ModeFlags::ALT_1 | ModeFlags::PULL_UP | ModeFlags::HIGH_SPEED);

        assert_eq!(port.moder, 0x2800_0000 | (0b10 << 18));
        assert_eq!(port.pupdr, 0x2400_0000 | (0b01 << 18));
        assert_eq!(port.ospeedr, 0x0c00_0000 | (0b11 << 18));
        assert_eq!(port.otyper, 0);
        assert_eq!(port.afr, [0, 1 << 4]);
    }

    #[test]
    fn low_pins_use_afrl() {
        let mut port = PortImage::default();
        port.apply(3, PinConfig::alternate(AltFn::AF5));
        assert_eq!(port.afr, [5 << 12, 0]);
    }

    #[test]
    fn open_drain_is_set_and_cleared() {
        let mut port = PortImage::default();
        port.apply(12, PinConfig::output().otype(OutputType::OpenDrain));
        assert_eq!(port.otyper, 1 << 12);
        port.apply(12, PinConfig::output());
        assert_eq!(port.otyper, 0);
    }

    #[test]
    fn neighbouring_pins_are_preserved() {
        let mut port = ALL_ONES;
        port.apply(10, PinConfig::input());

        assert_eq!(port.moder, !(0b11 << 20));
        assert_eq!(port.otyper, 0xffff & !(1 << 10));
        assert_eq!(port.ospeedr, !(0b11 << 20));
        assert_eq!(port.pupdr, !(0b11 << 20));
        assert_eq!(port.afr, [0xffff_ffff, !(0xf << 8)]);
    }

    const ALL_ONES: PortImage = PortImage {
        moder: 0xffff_ffff,
        otyper: 0xffff,
        ospeedr: 0xffff_ffff,
        pupdr: 0xffff_ffff,
        afr: [0xffff_ffff, 0xffff_ffff],
    };

    #[test]
    fn last_afrl_pin() {
        let mut port = ALL_ONES;
        port.apply(7, PinConfig::alternate(AltFn::AF2));
        assert_eq!(port.moder, !(0b01 << 14));
        assert_eq!(port.otyper, 0xffff & !(1 << 7));
        assert_eq!(port.ospeedr, !(0b11 << 14));
        assert_eq!(port.pupdr, !(0b11 << 14));
        assert_eq!(port.afr, [!(0xd << 28), 0xffff_ffff]);
    }

    #[test]
    fn first_afrh_pin() {
        let mut port = ALL_ONES;
        port.apply(8, PinConfig::alternate(AltFn::AF6).speed(Speed::Medium));
        assert_eq!(port.moder, !(0b01 << 16));
        assert_eq!(port.ospeedr, !(0b10 << 16));
        assert_eq!(port.afr, [0xffff_ffff, !0b1001]);
    }

    #[test]
    fn last_afrh_pin() {
        let mut port = ALL_ONES;
        port.apply(15, PinConfig::output().pull(Pull::Down));
        assert_eq!(port.moder, !(0b10 << 30));
        assert_eq!(port.otyper, 0x7fff);
        assert_eq!(port.pupdr, !(0b01 << 30));
        assert_eq!(port.ospeedr, !(0b11 << 30));
        assert_eq!(port.afr, [0xffff_ffff, 0x0fff_ffff]);
    }

    #[test]
    #[should_panic(expected = "pin < 16")]
    fn pin_out_of_range_is_rejected_on_read() {
        PortImage::default().pin_config(16);
    }

    #[test]
    #[should_panic(expected = "pin < 16")]
    fn pin_out_of_range_is_rejected_on_write() {
        PortImage::default().apply(16, PinConfig::output());
    }

    #[test]
    fn update_sees_current_configuration() {
        let mut port = GPIOA_RESET;
        port.apply(9, PinConfig::alternate(AltFn::AF1).speed(Speed::High));
        port.apply(1, PinConfig::output());

        let cfg = port.update(9, |cur| PinConfig::output().speed(cur.speed));
        assert_eq!(cfg, PinConfig::output().speed(Speed::High));
        assert_eq!(port.pin_config(9), cfg);
        assert_eq!(port.afr, [0, 0]);
        // pin 1 and the SWD pins keep what was there before
        assert_eq!(port.pin_config(1), PinConfig::output());
        assert_eq!(port.pin_config(13).mode, Mode::Alternate);
        assert_eq!(port.pin_config(14).mode, Mode::Alternate);
    }

    #[test]
    fn flags_decode_into_fields() {
        let cfg = PinConfig::from(ModeFlags::ALT_5 | ModeFlags::OPEN_DRAIN | ModeFlags::MEDIUM_SPEED);
        assert_eq!(
            cfg,
            PinConfig {
                mode: Mode::Alternate,
                otype: OutputType::OpenDrain,
                pull: Pull::None,
                speed: Speed::Medium,
                af: AltFn::AF5,
            }
        );
        assert_eq!(PinConfig::from(ModeFlags::ANALOG).mode, Mode::Analog);
        assert_eq!(PinConfig::from(ModeFlags::INPUT | ModeFlags::PULL_DOWN).pull, Pull::Down);
    }

    #[test]
    fn fields_encode_into_flags() {
        let cfg = PinConfig::output().pull(Pull::Up).speed(Speed::High);
        assert_eq!(
            ModeFlags::from(cfg),
            ModeFlags::GP_OUTPUT | ModeFlags::PULL_UP | ModeFlags::HIGH_SPEED
        );
    }

    #[test]
    fn configuration_reads_back_from_image() {
        let mut port = GPIOA_RESET;
        let cfg = PinConfig::alternate(AltFn::AF4)
            .otype(OutputType::OpenDrain)
            .pull(Pull::Up)
            .speed(Speed::Medium);
        port.apply(10, cfg);
        assert_eq!(port.pin_config(10), cfg);

        let swdio = port.pin_config(13);
        assert_eq!(swdio.mode, Mode::Alternate);
        assert_eq!(swdio.pull, Pull::Up);
        assert_eq!(swdio.speed, Speed::High);
    }

    #[test]
    fn reserved_encodings_decode_to_defaults() {
        let port = PortImage {
            ospeedr: 0b10,
            pupdr: 0b11,
            ..PortImage::default()
        };
        assert_eq!(port.pin_config(0).speed, Speed::Low);
        assert_eq!(port.pin_config(0).pull, Pull::None);
    }

    #[test]
    fn set_reset_words() {
        assert_eq!(bsrr_for(3, PinState::High), 1 << 3);
        assert_eq!(bsrr_for(3, PinState::Low), 1 << 19);
        assert_eq!(bsrr_for(15, PinState::Low), 1 << 31);
        assert_eq!(bsrr_masks(0x00ff, 0xff00), 0xff00_00ff);
        assert_eq!(bsrr_masks(0, 0x8001), 0x8001_0000);
    }
}
