//! Currency amounts in the smallest unit (grosz).

use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_object::ValueObject;

/// Amount of money in grosze (1/100 PLN).
///
/// Arithmetic saturates instead of overflowing: aggregation must never panic
/// on absurd inputs. On the wire the amount travels as a decimal number in
/// złoty (`12.5`), which is what the stores and the browser exchange.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Convert a decimal złoty amount, rounding to the nearest grosz.
    ///
    /// Non-finite input (NaN, infinities) becomes zero.
    pub fn from_major(major: f64) -> Self {
        if !major.is_finite() {
            return Self::ZERO;
        }
        // `as` saturates for out-of-range floats.
        Self((major * 100.0).round() as i64)
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Unit amount multiplied by a quantity.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Divide into `parts` equal shares, rounding half away from zero.
    ///
    /// Returns zero when `parts == 0`.
    pub fn split(self, parts: usize) -> Self {
        let Ok(parts) = i64::try_from(parts) else {
            return Self::ZERO;
        };
        if parts == 0 {
            return Self::ZERO;
        }
        let quotient = self.0 / parts;
        let remainder = self.0 % parts;
        let adjust = if remainder.unsigned_abs() * 2 >= parts.unsigned_abs() {
            self.0.signum()
        } else {
            0
        };
        Self(quotient + adjust)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Formats as `1234.50 zł`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02} zł", abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        Ok(Money::from_major(major))
    }
}
