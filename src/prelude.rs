pub use crate::gpio::GpioExt as _stm32f0_gpio_GpioExt;
pub use crate::gpio::GpioPort as _stm32f0_gpio_GpioPort;
pub use crate::gpio::OutputSpeed as _stm32f0_gpio_OutputSpeed;
pub use crate::gpio::PinExt as _stm32f0_gpio_PinExt;
pub use embedded_hal::digital::{
    InputPin as _embedded_hal_digital_InputPin, OutputPin as _embedded_hal_digital_OutputPin,
    StatefulOutputPin as _embedded_hal_digital_StatefulOutputPin,
};
