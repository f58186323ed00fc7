//! The twelve built-in operators.
//!
//! Eleven of them (`plus` through `length`) are ordinary operators: the
//! evaluator evaluates their children eagerly, in source order, then applies
//! them to the resulting value vector (see `crate::eval`). The twelfth,
//! `time`, is dispatched alongside the `ite` special form instead, because
//! its argument-evaluation policy (evaluate once, discard, time it) differs
//! from the eager-vector-apply policy the other eleven share.

pub mod arithmetic;
pub mod comparison;
pub mod lists;

use crate::error::EvalError;
use crate::value::Value;

/// Names reserved at startup: the twelve built-ins plus the `ite` special
/// form. `time` is included in this list (it is one of the twelve) even
/// though it is dispatched as a special form.
pub const RESERVED_NAMES: &[&str] = &[
    "plus", "minus", "mult", "divide", "equals", "lesser", "greater", "hd", "tl", "cons", "length",
    "time", "ite",
];

/// The eleven ordinary operators dispatched through `call`.
const ORDINARY_BUILTINS: &[&str] = &[
    "plus", "minus", "mult", "divide", "equals", "lesser", "greater", "hd", "tl", "cons", "length",
];

pub fn is_ordinary_builtin(name: &str) -> bool {
    ORDINARY_BUILTINS.contains(&name)
}

/// Applies an ordinary built-in to an already-evaluated argument vector.
/// Callers must check `is_ordinary_builtin` first; `time` and `ite` are
/// special forms handled directly in `crate::eval`.
pub fn call(name: &str, args: &[Value]) -> Result<Value, EvalError> {
    match name {
        "plus" => arithmetic::plus(args),
        "minus" => arithmetic::minus(args),
        "mult" => arithmetic::mult(args),
        "divide" => arithmetic::divide(args),
        "equals" => comparison::equals(args),
        "lesser" => comparison::lesser(args),
        "greater" => comparison::greater(args),
        "hd" => lists::hd(args),
        "tl" => lists::tl(args),
        "cons" => lists::cons(args),
        "length" => lists::length(args),
        other => unreachable!("call() invoked for non-builtin name {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_cover_every_ordinary_builtin() {
        for name in ORDINARY_BUILTINS {
            assert!(RESERVED_NAMES.contains(name));
        }
    }

    #[test]
    fn time_and_ite_are_reserved_but_not_ordinary() {
        assert!(RESERVED_NAMES.contains(&"time"));
        assert!(RESERVED_NAMES.contains(&"ite"));
        assert!(!is_ordinary_builtin("time"));
        assert!(!is_ordinary_builtin("ite"));
    }
}
