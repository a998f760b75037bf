#![cfg(test)]
use std::collections::BTreeSet;

use fibnext_core::{FibonacciSequence, is_fibonacci, is_perfect_square, next_fibonacci};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

/// Terms of the canonical sequence up to and including the first one above `limit`.
fn terms_through(limit: u64) -> BTreeSet<BigInt> {
    let bound = BigInt::from(limit);
    let mut terms = BTreeSet::new();
    for term in FibonacciSequence::new() {
        let past = term > bound;
        terms.insert(term);
        if past {
            break;
        }
    }
    terms
}

/// Membership agrees with the sequence itself for every value in a dense range.
#[test]
fn membership_matches_sequence_exhaustively() {
    let terms = terms_through(50_000);
    for n in 0..=50_000u64 {
        let n = BigInt::from(n);
        assert_eq!(is_fibonacci(&n), terms.contains(&n), "mismatch at {n}");
    }
}

/// For random n, the successor is a term, greater than n, with no term in between.
#[test]
fn successor_is_the_smallest_term_above_input() {
    let mut rng = StdRng::seed_from_u64(0xF1B0);
    let terms = terms_through(u64::MAX);

    for _ in 0..SAMPLES {
        let n = BigInt::from(rng.random_range(0..u64::MAX));
        let next = next_fibonacci(&n);

        assert!(next > n, "next_fibonacci({n}) = {next} is not greater");
        assert!(terms.contains(&next), "{next} is not a Fibonacci number");
        assert!(
            terms.range(&n..&next).all(|term| *term == n),
            "a term lies strictly between {n} and {next}"
        );
    }
}

/// Sparse sampling across the full u64 range, where float roots get unreliable.
#[test]
fn membership_matches_sequence_for_wide_samples() {
    let mut rng = StdRng::seed_from_u64(42);
    let terms = terms_through(u64::MAX);

    for _ in 0..SAMPLES {
        let n = BigInt::from(rng.random_range(0..u64::MAX));
        assert_eq!(is_fibonacci(&n), terms.contains(&n), "mismatch at {n}");
    }
    for term in &terms {
        assert!(is_fibonacci(term), "{term} should be a member");
    }
}

#[test]
fn squares_of_random_roots_are_recognised() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let root = BigInt::from(rng.random_range(0..u64::MAX));
        let square = &root * &root;
        assert!(is_perfect_square(&square), "{square} = {root}^2");
        if root > BigInt::from(0) {
            assert!(!is_perfect_square(&(&square + BigInt::from(1))));
        }
    }
}

#[test]
fn repeated_calls_agree() {
    let n = BigInt::from(12345);
    let first = (is_fibonacci(&n), next_fibonacci(&n));
    for _ in 0..10 {
        assert_eq!((is_fibonacci(&n), next_fibonacci(&n)), first);
    }
}

#[test]
fn sentinel_values() {
    assert_eq!(next_fibonacci(&BigInt::from(-5)), BigInt::from(0));
    assert_eq!(next_fibonacci(&BigInt::from(0)), BigInt::from(1));
}
