use std::ops::RangeInclusive;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::accumulator::BigAccumulator;

/// An inclusive run of consecutive words to be summed.
/// `begin > end` describes an empty run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumRange {
    pub begin: u64,
    pub end: u64,
}

impl SumRange {
    pub const fn new(begin: u64, end: u64) -> Self {
        SumRange { begin, end }
    }

    pub fn is_empty(&self) -> bool {
        self.begin > self.end
    }

    /// Number of terms. Wider than u64 because `0..=u64::MAX` has 2^64 of them.
    pub fn term_count(&self) -> u128 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.begin) as u128 + 1
        }
    }

    pub fn terms(&self) -> RangeInclusive<u64> {
        self.begin..=self.end
    }

    /// Adds every term of the range to `acc`, in order.
    pub fn sum_into(&self, acc: &mut BigAccumulator) {
        for i in self.terms() {
            acc.add_word(i);
        }
    }

    pub fn sum(&self) -> BigAccumulator {
        let mut acc = BigAccumulator::new();
        self.sum_into(&mut acc);
        acc
    }

    /// Arithmetic-series total `(begin + end) * count / 2`, without iterating.
    pub fn closed_form(&self) -> BigUint {
        if self.is_empty() {
            return BigUint::zero();
        }
        let first_plus_last = BigUint::from(self.begin) + BigUint::from(self.end);
        // One of (first + last) and count is always even, so the division is exact.
        first_plus_last * BigUint::from(self.term_count()) / 2u32
    }
}
