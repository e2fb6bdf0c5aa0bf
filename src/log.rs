// defmt needs a global logger at link time, so logging is only wired up
// when the `defmt` feature is on. Without it these expand to nothing.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
