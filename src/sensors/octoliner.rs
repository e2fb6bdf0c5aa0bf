use crate::config::OctolinerConfig;
use crate::error::OctolinerError;
use crate::expander::Expander;
use crate::line::{
    mask_from_port, mask_from_threshold, position_from_mask, LinePositionEstimator,
    SensorReadings, SENSOR_COUNT,
};
use crate::log::{debug, trace};

use super::Sensor;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineUpdate {
    pub position: f32,
}

pub type OctolinerErrorAlias<E> = OctolinerError<<E as Expander>::Error>;

/// Octoliner 8-channel line sensor array.
pub struct Octoliner<E>
where
    E: Expander,
{
    expander: E,
    config: OctolinerConfig,
    estimator: LinePositionEstimator,
    last_position: Option<f32>,
}

impl<E> Octoliner<E>
where
    E: Expander,
{
    pub fn new(expander: E) -> Self {
        Self::with_config(expander, OctolinerConfig::default())
    }

    pub fn with_config(expander: E, config: OctolinerConfig) -> Self {
        Self {
            expander,
            config,
            estimator: LinePositionEstimator::new(),
            last_position: None,
        }
    }

    pub fn config(&self) -> &OctolinerConfig {
        &self.config
    }

    pub fn release(self) -> E {
        self.expander
    }

    /// Set up the expander PWM. Call once before the sensitivity and
    /// brightness setters.
    pub fn begin(&mut self) -> Result<(), OctolinerErrorAlias<E>> {
        let frequency = self.config.pwm_frequency;
        self.expander
            .pwm_frequency(frequency)
            .map_err(OctolinerError::PwmFrequency)?;

        debug!("octoliner: pwm at {=u32} Hz", frequency.raw());

        Ok(())
    }

    pub fn set_sensitivity(&mut self, sensitivity: u8) -> Result<(), OctolinerErrorAlias<E>> {
        self.expander
            .analog_write(self.config.sense_pin, sensitivity)
            .map_err(OctolinerError::PwmWrite)
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), OctolinerErrorAlias<E>> {
        self.expander
            .analog_write(self.config.brightness_pin, brightness)
            .map_err(OctolinerError::PwmWrite)
    }

    /// Raw reading of one sensor. Only the low three bits of `sensor` are used.
    pub fn analog_read(&mut self, sensor: u8) -> Result<u16, OctolinerErrorAlias<E>> {
        let pin = self.config.sensor_pins[usize::from(sensor & 0x07)];
        self.expander
            .analog_read(pin)
            .map_err(OctolinerError::AnalogRead)
    }

    pub fn analog_line(&mut self) -> Result<SensorReadings, OctolinerErrorAlias<E>> {
        let mut readings: SensorReadings = [0; SENSOR_COUNT];
        for (sensor, reading) in (0u8..).zip(readings.iter_mut()) {
            *reading = self.analog_read(sensor)?;
        }

        Ok(readings)
    }

    /// Binary line from the sensor comparators, read in one port transaction.
    /// Bit 0 = sensor 0.
    pub fn digital_line(&mut self) -> Result<u8, OctolinerErrorAlias<E>> {
        let port = self
            .expander
            .digital_read_port()
            .map_err(OctolinerError::DigitalRead)?;

        Ok(mask_from_port(port, &self.config.sensor_pins))
    }

    /// Binary line from the analog readings against a fixed cutoff.
    pub fn binary_line(&mut self, threshold: u16) -> Result<u8, OctolinerErrorAlias<E>> {
        let readings = self.analog_line()?;
        Ok(mask_from_threshold(&readings, threshold))
    }

    pub fn map_line(&self, binary_line: u8) -> f32 {
        position_from_mask(binary_line)
    }

    pub fn map_analog_line(&mut self, readings: &SensorReadings) -> f32 {
        self.estimator.estimate(readings)
    }

    /// Sample every sensor and run the adaptive estimator.
    pub fn track_line(&mut self) -> Result<f32, OctolinerErrorAlias<E>> {
        let readings = self.analog_line()?;
        let position = self.map_analog_line(&readings);

        trace!("octoliner: {} -> {=f32}", readings, position);

        Ok(position)
    }
}

impl<E> Sensor for Octoliner<E>
where
    E: Expander,
{
    type Message = LineUpdate;
    type Error = OctolinerErrorAlias<E>;

    fn sense(&mut self) -> Result<Option<LineUpdate>, Self::Error> {
        let position = self.track_line()?;

        if Some(position) != self.last_position {
            self.last_position = Some(position);
            Ok(Some(LineUpdate { position }))
        } else {
            Ok(None)
        }
    }
}
