#![cfg(test)]
use fibnext_common::error::InputError;
use fibnext_common::input::InputNumber;
use fibnext_core::{is_fibonacci, next_fibonacci};
use num_bigint::BigInt;

/// Parsed input flows straight into the numeric core.
#[test]
fn parsed_input_feeds_the_core() {
    let input: InputNumber = "12345".parse().unwrap();
    assert!(!is_fibonacci(input.value()));
    assert_eq!(next_fibonacci(input.value()), BigInt::from(17711));

    let input: InputNumber = "13".parse().unwrap();
    assert!(is_fibonacci(input.value()));
    assert_eq!(next_fibonacci(input.value()), BigInt::from(21));
}

#[test]
fn validated_input_is_never_negative() {
    for raw in ["0", "+0", "-0", "7", " 21 "] {
        let input: InputNumber = raw.parse().unwrap();
        assert!(input.value() >= &BigInt::from(0), "{raw} parsed negative");
    }
    assert_eq!("-5".parse::<InputNumber>(), Err(InputError::Negative));
}
