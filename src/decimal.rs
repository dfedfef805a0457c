use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// rounds to currency precision, half-up
fn to_paisa(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Money type with 2 decimal places for rupee/paisa accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const PAISA: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// create from decimal, rounded half-up to paisa
    pub fn from_decimal(d: Decimal) -> Self {
        Money(to_paisa(d))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(to_paisa(Decimal::from_str(s)?)))
    }

    /// create from whole rupees
    pub fn from_rupees(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from paise (1/100 rupee)
    pub fn from_paise(amount: i64) -> Self {
        Money(Decimal::from(amount) / Decimal::from(100))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(to_paisa(self.0 + other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = to_paisa(self.0 + other.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(to_paisa(self.0 - other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = to_paisa(self.0 - other.0);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(to_paisa(self.0 * other))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(to_paisa(self.0 / other))
    }
}

/// annual interest rate expressed in percent (18 = 18% p.a.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from percent (e.g. 18 for 18% p.a.)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p)
    }

    /// create from fraction (e.g. 0.18 for 18% p.a.)
    pub fn from_fraction(d: Decimal) -> Self {
        Rate(d * Decimal::from(100))
    }

    /// get as percent
    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// get as fraction
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::from(100)
    }

    /// monthly percent from annual percent
    pub fn monthly_percent(&self) -> Decimal {
        self.0 / Decimal::from(12)
    }

    /// round to currency display precision, half-up
    pub fn round_display(&self) -> Self {
        Rate(to_paisa(self.0))
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_percent(d)
    }
}
