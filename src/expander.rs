use fugit::HertzU32 as Hertz;

use crate::error::Error;

/// The I/O expander the sensor array sits behind.
///
/// Pins are expander pin numbers, not sensor channels; the driver does the
/// remapping through [`OctolinerConfig::sensor_pins`](crate::OctolinerConfig).
/// Bus setup and addressing belong to the implementor.
pub trait Expander {
    type Error: Error;

    /// Sample one analog pin.
    fn analog_read(&mut self, pin: u8) -> Result<u16, Self::Error>;

    /// Snapshot every digital input in one transaction, bit n = pin n.
    fn digital_read_port(&mut self) -> Result<u16, Self::Error>;

    /// Set the PWM duty cycle of one pin.
    fn analog_write(&mut self, pin: u8, duty: u8) -> Result<(), Self::Error>;

    /// Set the PWM carrier shared by every pin.
    fn pwm_frequency(&mut self, frequency: Hertz) -> Result<(), Self::Error>;
}

impl<T: Expander + ?Sized> Expander for &mut T {
    type Error = T::Error;

    fn analog_read(&mut self, pin: u8) -> Result<u16, Self::Error> {
        (**self).analog_read(pin)
    }

    fn digital_read_port(&mut self) -> Result<u16, Self::Error> {
        (**self).digital_read_port()
    }

    fn analog_write(&mut self, pin: u8, duty: u8) -> Result<(), Self::Error> {
        (**self).analog_write(pin, duty)
    }

    fn pwm_frequency(&mut self, frequency: Hertz) -> Result<(), Self::Error> {
        (**self).pwm_frequency(frequency)
    }
}
