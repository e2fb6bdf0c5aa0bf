#![cfg_attr(not(test), no_std)]

mod log;

pub mod config;
pub mod error;
pub mod expander;
pub mod line;
pub mod sensors;

pub use config::OctolinerConfig;
pub use error::{Error, OctolinerError};
pub use expander::Expander;
pub use line::{
    mask_from_threshold, position_from_mask, LinePositionEstimator, SensorReadings, SENSOR_COUNT,
};
pub use sensors::octoliner::{LineUpdate, Octoliner};
pub use sensors::Sensor;
