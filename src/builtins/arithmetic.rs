//! Integer arithmetic: `plus`, `minus`, `mult`, `divide`.
//!
//! All four take exactly two `Int` arguments. Arithmetic is
//! modular at machine width; overflow is not detected. Division truncates
//! toward zero, matching Rust's `/` on signed integers.

use crate::error::EvalError;
use crate::value::Value;

pub fn plus(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = two_ints("plus", args)?;
    Ok(Value::Int(a.wrapping_add(b)))
}

pub fn minus(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = two_ints("minus", args)?;
    Ok(Value::Int(a.wrapping_sub(b)))
}

pub fn mult(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = two_ints("mult", args)?;
    Ok(Value::Int(a.wrapping_mul(b)))
}

pub fn divide(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = two_ints("divide", args)?;
    if b == 0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Int(a.wrapping_div(b)))
}

fn two_ints(function: &str, args: &[Value]) -> Result<(i64, i64), EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error(function, "2", args.len()));
    }
    Ok((args[0].as_int(function, 0)?, args[1].as_int(function, 1)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_is_commutative() {
        assert!(matches!(plus(&[Value::Int(2), Value::Int(3)]), Ok(Value::Int(5))));
        assert!(matches!(plus(&[Value::Int(3), Value::Int(2)]), Ok(Value::Int(5))));
    }

    #[test]
    fn minus_of_self_is_zero() {
        assert!(matches!(minus(&[Value::Int(7), Value::Int(7)]), Ok(Value::Int(0))));
    }

    #[test]
    fn mult_by_zero_is_zero() {
        assert!(matches!(mult(&[Value::Int(41), Value::Int(0)]), Ok(Value::Int(0))));
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert!(matches!(divide(&[Value::Int(-7), Value::Int(2)]), Ok(Value::Int(-3))));
    }

    #[test]
    fn divide_by_zero_fails() {
        assert!(matches!(divide(&[Value::Int(1), Value::Int(0)]), Err(EvalError::DivisionByZero)));
    }

    #[test]
    fn wrong_arity_is_an_error() {
        assert!(plus(&[Value::Int(1)]).is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(plus(&[Value::Int(1), Value::List(crate::value::List::empty())]).is_err());
    }
}
