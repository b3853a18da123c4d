//! Types that can be used in other crates

use std::fmt::Display;

use error_stack::report;
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, ParsingError};

/// This Unit struct represents MinorUnit in which core amount works
#[derive(Default, Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Rounds a major unit amount to exactly two decimal places (half away from
    /// zero) and scales it by 100.
    pub fn from_major_unit(amount: Decimal) -> CustomResult<Self, ParsingError> {
        let rounded = round_major_unit(amount);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.to_i64())
            .map(Self)
            .ok_or_else(|| report!(ParsingError::AmountOverflow))
    }

    /// Major unit amount with a scale of two, e.g. `1050` becomes `10.50`.
    pub fn to_major_unit(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MinorUnit {
    type Err = error_stack::Report<ParsingError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| report!(ParsingError::IntegerParseFailure))
    }
}

/// Round to two decimal places the way monetary amounts are entered.
pub fn round_major_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
