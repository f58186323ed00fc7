//! `equals`, `lesser`, `greater`: comparisons across `Int` and `List`.
//!
//! Mixed-type comparisons return `Int(0)` rather than erroring.

use crate::error::EvalError;
use crate::value::Value;

pub fn equals(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("equals", "2", args.len()));
    }
    Ok(Value::Int(args[0].structural_eq(&args[1]) as i64))
}

pub fn lesser(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("lesser", "2", args.len()));
    }
    Ok(Value::Int(is_lesser(&args[0], &args[1]) as i64))
}

pub fn greater(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("greater", "2", args.len()));
    }
    Ok(Value::Int(is_lesser(&args[1], &args[0]) as i64))
}

fn is_lesser(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x < y,
        (Value::List(x), Value::List(y)) => x.len() < y.len(),
        _ => false,
    }
}
