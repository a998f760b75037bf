use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use tracing::trace;

/// Returns `true` when some non-negative `r` satisfies `r * r == x`.
///
/// Negative values are never squares. The root is only an approximation until
/// it has been checked by exact multiplication.
pub fn is_perfect_square(x: &BigInt) -> bool {
    if x.sign() == Sign::Minus {
        return false;
    }

    let root: BigInt = approximate_root(x);
    &root * &root == *x
}

fn approximate_root(x: &BigInt) -> BigInt {
    match x.to_u64() {
        Some(small) => BigInt::from(float_root(small)),
        None => x.sqrt(),
    }
}

/// Floor square root through `f64`.
///
/// Above 2^52 the float root can land one off in either direction, so it is
/// nudged until `root^2 <= x < (root + 1)^2`.
fn float_root(x: u64) -> u64 {
    let estimate = (x as f64).sqrt() as u64;
    let mut root = estimate;

    while root.checked_mul(root).is_none_or(|sq| sq > x) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= x) {
        root += 1;
    }

    if root != estimate {
        trace!(x, estimate, root, "corrected floating-point root");
    }
    root
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
