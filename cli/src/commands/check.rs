use std::io::Write;

use anyhow::anyhow;
use fibnext_common::input::InputNumber;
use fibnext_core::{is_fibonacci, next_fibonacci};
use num_bigint::BigInt;
use tracing::debug;

use crate::terminal::print;

/// Outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub input: BigInt,
    pub is_fibonacci: bool,
    pub next_fibonacci: BigInt,
}

pub fn evaluate(input: &InputNumber) -> Report {
    let n: &BigInt = input.value();

    let report = Report {
        input: n.clone(),
        is_fibonacci: is_fibonacci(n),
        next_fibonacci: next_fibonacci(n),
    };

    debug!(
        is_fibonacci = report.is_fibonacci,
        "next Fibonacci number is {}", report.next_fibonacci
    );
    report
}

pub fn check<W: Write>(input: &InputNumber, out: &mut W) -> anyhow::Result<()> {
    let report = evaluate(input);
    print::report(out, &report).map_err(|err| anyhow!("Error: {err}"))
}
