//! Money value object over an exact decimal amount.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Minimum number of fractional digits shown by `Display`.
const DISPLAY_SCALE: u32 = 2;

/// Monetary amount.
///
/// Backed by [`Decimal`] so that summed subtotals compare *exactly* against a
/// declared total. Arithmetic never rounds. Equality is numeric:
/// `10.0 == 10.00`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money {
        amount: Decimal::ZERO,
    };

    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_greater_than_zero(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.amount > other.amount
    }

    pub fn add(&self, other: &Money) -> Money {
        Money::new(self.amount + other.amount)
    }

    pub fn subtract(&self, other: &Money) -> Money {
        Money::new(self.amount - other.amount)
    }

    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(self.amount * Decimal::from(quantity))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc.add(&m))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("invalid money amount {s:?}: {e}")))?;
        Ok(Money::new(amount))
    }
}

/// Pads to two decimal places; finer amounts are shown in full.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.scale() < DISPLAY_SCALE {
            write!(f, "{:.2}", self.amount)
        } else {
            write!(f, "{}", self.amount)
        }
    }
}
