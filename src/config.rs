use fugit::HertzU32 as Hertz;

use crate::line::SENSOR_COUNT;

// ~250 distinct duty levels on the expander
const DEFAULT_PWM_FREQUENCY: Hertz = Hertz::from_raw(8_000);

/// Wiring between the sensor board and its expander.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OctolinerConfig {
    /// Expander pin for each sensor channel, channel 0 first.
    pub sensor_pins: [u8; SENSOR_COUNT],
    /// PWM pin setting the comparator sensitivity.
    pub sense_pin: u8,
    /// PWM pin setting the IR emitter brightness.
    pub brightness_pin: u8,
    /// PWM carrier for the sense and brightness pins.
    pub pwm_frequency: Hertz,
}

impl OctolinerConfig {
    pub const fn new() -> Self {
        Self {
            sensor_pins: [4, 5, 6, 8, 7, 3, 2, 1],
            sense_pin: 0,
            brightness_pin: 9,
            pwm_frequency: DEFAULT_PWM_FREQUENCY,
        }
    }
}

impl Default for OctolinerConfig {
    fn default() -> Self {
        Self::new()
    }
}
