//! Sieve bound and its conversions
//!
//! The bound is the exclusive upper limit of the swept range. Signed and
//! floating-point inputs are accepted at the API edge but must be whole,
//! non-negative and addressable; anything else is `InvalidArgument`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SieveError;

/// Exclusive upper limit of the prime search range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bound(usize);

impl Bound {
    pub const fn new(sieve_length: usize) -> Self {
        Self(sieve_length)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Bound> for usize {
    fn from(bound: Bound) -> Self {
        bound.0
    }
}

macro_rules! lossless_from {
    ($($t:ty),*) => {$(
        impl From<$t> for Bound {
            fn from(value: $t) -> Self {
                Bound(usize::from(value))
            }
        }
    )*};
}

macro_rules! checked_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Bound {
            type Error = SieveError;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                usize::try_from(value).map(Bound).map_err(|_| {
                    SieveError::invalid_argument(format!(
                        "bound {value} is not addressable on this platform"
                    ))
                })
            }
        }
    )*};
}

macro_rules! checked_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Bound {
            type Error = SieveError;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                if value < 0 {
                    return Err(SieveError::invalid_argument(format!(
                        "bound must be non-negative, got {value}"
                    )));
                }
                usize::try_from(value).map(Bound).map_err(|_| {
                    SieveError::invalid_argument(format!(
                        "bound {value} is not addressable on this platform"
                    ))
                })
            }
        }
    )*};
}

lossless_from!(usize, u16, u8);
checked_unsigned!(u32, u64, u128);
checked_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Bound {
    type Error = SieveError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(SieveError::invalid_argument(format!(
                "bound must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(SieveError::invalid_argument(format!(
                "bound must be non-negative, got {value}"
            )));
        }
        if value.fract() != 0.0 {
            return Err(SieveError::invalid_argument(format!(
                "bound must be a whole number, got {value}"
            )));
        }
        // usize::MAX as f64 rounds up to 2^BITS, which is itself out of range
        if value >= usize::MAX as f64 {
            return Err(SieveError::invalid_argument(format!(
                "bound {value} is not addressable on this platform"
            )));
        }
        Ok(Bound(value as usize))
    }
}

impl TryFrom<f32> for Bound {
    type Error = SieveError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Bound::try_from(f64::from(value))
    }
}
