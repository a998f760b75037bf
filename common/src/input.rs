//! # Input Model
//!
//! The single value `fibnext` operates on: a non-negative integer of any size,
//! parsed from one command-line argument.
//!
//! Parsing accepts the usual integer literal forms:
//! * Surrounding whitespace is ignored (`" 42 "`).
//! * An explicit sign is allowed (`"+42"`, `"-0"`).
//! * Digit groups may be separated by single underscores (`"1_000"`), but
//!   never doubled or trailing (`"1__0"`, `"1_"`).

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::InputError;

/// A validated, immutable non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNumber(BigInt);

impl InputNumber {
    pub fn value(&self) -> &BigInt {
        &self.0
    }
}

impl FromStr for InputNumber {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidInteger { raw: s.to_string() };
        let literal: &str = s.trim();

        // BigInt skips every underscore; only single separators between digits are valid
        if literal.ends_with('_') || literal.contains("__") {
            return Err(invalid());
        }

        let value: BigInt = literal.parse().map_err(|_| invalid())?;

        if value.is_negative() {
            return Err(InputError::Negative);
        }

        Ok(Self(value))
    }
}

impl fmt::Display for InputNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
