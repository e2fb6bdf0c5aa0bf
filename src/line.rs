//! Line position estimation.
//!
//! Two independent paths reduce sensor samples to a steering error in
//! `[-1.0, 1.0]`, positive when the line sits towards sensor 0:
//!
//! - [`position_from_mask`]: centroid of the active sensors of a binary line.
//! - [`LinePositionEstimator`]: adaptive midpoint threshold, then a lookup of
//!   the resulting pattern. Patterns the table does not know keep the previous
//!   estimate.

use crate::log::trace;

/// Number of sensors in the array.
pub const SENSOR_COUNT: usize = 8;

/// Raw analog readings, sensor 0 first.
pub type SensorReadings = [u16; SENSOR_COUNT];

/// Centroid weight of each sensor, sensor 0 first.
pub const LINE_WEIGHTS: [i8; SENSOR_COUNT] = [4, 3, 2, 1, -1, -2, -3, -4];

const MAX_WEIGHT: f32 = 4.0;

/// Binary line from a fixed cutoff: bit i set when `samples[i] > threshold`.
pub fn mask_from_threshold(samples: &SensorReadings, threshold: u16) -> u8 {
    let mut mask: u8 = 0;

    for (i, &value) in samples.iter().enumerate() {
        if value > threshold {
            mask |= 1 << i;
        }
    }

    mask
}

/// Binary line from a digital port snapshot: bit i set when port bit
/// `pin_map[i]` is set. Pins past the port width never read as set.
pub fn mask_from_port(port: u16, pin_map: &[u8; SENSOR_COUNT]) -> u8 {
    let mut mask: u8 = 0;

    for (i, &pin) in pin_map.iter().enumerate() {
        let is_high = port
            .checked_shr(u32::from(pin))
            .is_some_and(|bits| bits & 1 == 1);
        if is_high {
            mask |= 1 << i;
        }
    }

    mask
}

/// Centroid of the set bits of a binary line, bit i weighted by
/// [`LINE_WEIGHTS`]`[i]` and scaled into `[-1.0, 1.0]`.
///
/// An empty line gives `0.0`, the same as a centered one.
pub fn position_from_mask(mask: u8) -> f32 {
    let mut count: i32 = 0;
    let mut weighted: i32 = 0;

    for (i, &weight) in LINE_WEIGHTS.iter().enumerate() {
        if mask & (1 << i) != 0 {
            count += 1;
            weighted += i32::from(weight);
        }
    }

    if count == 0 {
        return 0.0;
    }

    weighted as f32 / count as f32 / MAX_WEIGHT
}

/// Pattern of the samples against the midpoint of their own range.
///
/// Built most significant bit first, so sensor 0 lands on bit 7. A sample
/// equal to the midpoint counts as seeing the line.
pub fn adaptive_pattern(samples: &SensorReadings) -> u8 {
    let min = samples.iter().copied().min().unwrap_or(0);
    let max = samples.iter().copied().max().unwrap_or(0);
    let threshold = min + (max - min) / 2;

    samples.iter().fold(0u8, |pattern, &value| {
        (pattern << 1) | u8::from(value >= threshold)
    })
}

// contiguous runs only, sensor 0 = bit 7
const PATTERN_POSITIONS: [(u8, f32); 23] = [
    (0b0001_1000, 0.0),
    (0b0001_0000, 0.25),
    (0b0011_1000, 0.25),
    (0b0000_1000, -0.25),
    (0b0001_1100, -0.25),
    (0b0011_0000, 0.375),
    (0b0000_1100, -0.375),
    (0b0010_0000, 0.5),
    (0b0111_0000, 0.5),
    (0b0000_0100, -0.5),
    (0b0000_1110, -0.5),
    (0b0110_0000, 0.625),
    (0b1110_0000, 0.625),
    (0b0000_0110, -0.625),
    (0b0000_0111, -0.625),
    (0b0100_0000, 0.75),
    (0b1111_0000, 0.75),
    (0b0000_0010, -0.75),
    (0b0000_1111, -0.75),
    (0b1100_0000, 0.875),
    (0b0000_0011, -0.875),
    (0b1000_0000, 1.0),
    (0b0000_0001, -1.0),
];

static PATTERN_TABLE: [Option<f32>; 256] = {
    let mut table = [None; 256];
    let mut i = 0;
    while i < PATTERN_POSITIONS.len() {
        let (pattern, position) = PATTERN_POSITIONS[i];
        table[pattern as usize] = Some(position);
        i += 1;
    }
    table
};

/// Position for a pattern from [`adaptive_pattern`], if it is one the
/// estimator recognizes.
pub fn pattern_position(pattern: u8) -> Option<f32> {
    PATTERN_TABLE[usize::from(pattern)]
}

/// Adaptive estimator holding the last recognized position.
///
/// Noisy or broken patterns coast on the previous value instead of resetting
/// it, so a lost line is not detected here: check the raw samples for that.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinePositionEstimator {
    last_value: f32,
}

impl LinePositionEstimator {
    pub const fn new() -> Self {
        Self { last_value: 0.0 }
    }

    pub fn estimate(&mut self, samples: &SensorReadings) -> f32 {
        let pattern = adaptive_pattern(samples);

        match pattern_position(pattern) {
            Some(position) => {
                self.last_value = position;
            }
            None => {
                trace!(
                    "line pattern {=u8:#b} not recognized, holding {=f32}",
                    pattern,
                    self.last_value
                );
            }
        }

        self.last_value
    }

    pub fn last_value(&self) -> f32 {
        self.last_value
    }
}
