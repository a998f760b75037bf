//! Numeric core of `fibnext`.
//!
//! Every routine here is a total function over arbitrary-precision integers:
//! there is no global state and nothing can fail.

pub mod membership;
pub mod sequence;
pub mod square;
pub mod successor;

pub use membership::is_fibonacci;
pub use sequence::FibonacciSequence;
pub use square::is_perfect_square;
pub use successor::next_fibonacci;
