use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::sequence::FibonacciSequence;

/// Smallest Fibonacci number strictly greater than `n`.
///
/// Negative input has no successor and yields the sentinel `0`; zero yields `1`.
pub fn next_fibonacci(n: &BigInt) -> BigInt {
    if n.is_negative() {
        return BigInt::zero();
    }
    if n.is_zero() {
        return BigInt::one();
    }

    FibonacciSequence::new().first_above(n)
}
