use std::fmt;
use std::ops::AddAssign;

use num_bigint::BigUint;
use num_traits::{Num, Zero};

/// A running total of unbounded magnitude.
///
/// Only non-negative words are ever added, so the value never drops below zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BigAccumulator {
    total: BigUint,
}

impl BigAccumulator {
    /// Creates an accumulator holding exactly zero.
    pub fn new() -> Self {
        BigAccumulator {
            total: BigUint::zero(),
        }
    }

    /// Adds a native word to the total in place.
    #[inline]
    pub fn add_word(&mut self, word: u64) {
        self.total += word;
    }

    /// Base-10 form of the current total, without sign or leading zeros.
    pub fn to_decimal_string(&self) -> String {
        self.total.to_str_radix(10)
    }

    /// Rebuilds an accumulator from its decimal form.
    /// Returns `None` for anything that isn't a plain run of decimal digits.
    pub fn parse_decimal(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let total = BigUint::from_str_radix(s, 10).ok()?;
        Some(BigAccumulator { total })
    }

    pub fn value(&self) -> &BigUint {
        &self.total
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}

impl AddAssign<u64> for BigAccumulator {
    fn add_assign(&mut self, word: u64) {
        self.add_word(word);
    }
}

impl fmt::Display for BigAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // BigUint's Display is already plain base-10.
        fmt::Display::fmt(&self.total, f)
    }
}

impl From<BigAccumulator> for BigUint {
    fn from(acc: BigAccumulator) -> Self {
        acc.total
    }
}
