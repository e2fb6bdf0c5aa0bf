use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Marker for errors coming out of an [`Expander`](crate::Expander) or the driver.
pub trait Error: Debug {}

/// Driver failures, tagged by the expander operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OctolinerError<ExpanderError: Debug> {
    PwmFrequency(ExpanderError),
    PwmWrite(ExpanderError),
    AnalogRead(ExpanderError),
    DigitalRead(ExpanderError),
}

impl<E: Debug> OctolinerError<E> {
    pub fn into_inner(self) -> E {
        match self {
            OctolinerError::PwmFrequency(err)
            | OctolinerError::PwmWrite(err)
            | OctolinerError::AnalogRead(err)
            | OctolinerError::DigitalRead(err) => err,
        }
    }
}

impl<E: Debug> Display for OctolinerError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OctolinerError::PwmFrequency(err) => write!(f, "failed to set pwm frequency: {err:?}"),
            OctolinerError::PwmWrite(err) => write!(f, "failed to write pwm duty: {err:?}"),
            OctolinerError::AnalogRead(err) => write!(f, "failed to read analog channel: {err:?}"),
            OctolinerError::DigitalRead(err) => write!(f, "failed to read digital port: {err:?}"),
        }
    }
}

impl<E: Debug> Error for OctolinerError<E> {}
