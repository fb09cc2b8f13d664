//! Unit types used by the simulation.
use serde::{Deserialize, Serialize};
use std::iter::Sum;

/// An amount of money, e.g. a room rate or accumulated earnings.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Display,
)]
#[display("{_0:.1}")]
pub struct Money(pub f64);

impl Money {
    /// Returns the value as an `f64`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The amount left after applying a percentage discount.
    ///
    /// # Arguments
    ///
    /// * `discount_percent` - Discount in percent (0-100)
    pub fn discounted(self, discount_percent: u32) -> Money {
        Money(self.0 * (1.0 - f64::from(discount_percent) / 100.0))
    }
}

impl From<u32> for Money {
    fn from(value: u32) -> Self {
        Money(f64::from(value))
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::default(), |acc, x| acc + x)
    }
}
