use num_bigint::BigInt;

use crate::square::is_perfect_square;

/// Tests membership in the Fibonacci sequence.
///
/// `n` is a Fibonacci number exactly when `5n^2 + 4` or `5n^2 - 4` is a
/// perfect square. Membership is boolean: 1 counts once even though it
/// appears twice in the sequence.
pub fn is_fibonacci(n: &BigInt) -> bool {
    let base: BigInt = BigInt::from(5u8) * n * n;
    let four = BigInt::from(4u8);

    is_perfect_square(&(&base + &four)) || is_perfect_square(&(&base - &four))
}
