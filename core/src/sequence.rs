use std::mem;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

/// The canonical Fibonacci sequence `0, 1, 1, 2, 3, 5, ...`.
///
/// Unbounded: every call to [`Iterator::next`] yields a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciSequence {
    prev: BigInt,
    curr: BigInt,
}

impl FibonacciSequence {
    pub fn new() -> Self {
        Self {
            prev: BigInt::zero(),
            curr: BigInt::one(),
        }
    }

    fn step(&mut self) {
        let next: BigInt = &self.prev + &self.curr;
        self.prev = mem::replace(&mut self.curr, next);
    }

    /// Advances from the current pair until the leading term exceeds `bound`
    /// and returns that term.
    pub fn first_above(mut self, bound: &BigInt) -> BigInt {
        let mut steps: u64 = 0;
        while self.curr <= *bound {
            self.step();
            steps += 1;
        }

        debug!(steps, "walked the sequence past {bound}");
        self.curr
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciSequence {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let term = self.prev.clone();
        self.step();
        Some(term)
    }
}
