//! `hd`, `tl`, `cons`, `length`: list construction and access.

use crate::error::EvalError;
use crate::value::{List, Value};

pub fn hd(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("hd", "1", args.len()));
    }
    let list = args[0].as_list("hd", 0)?;
    list.head().cloned().ok_or_else(|| EvalError::EmptyList("hd".to_string()))
}

pub fn tl(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("tl", "1", args.len()));
    }
    let list = args[0].as_list("tl", 0)?;
    list.tail()
        .map(Value::List)
        .ok_or_else(|| EvalError::EmptyList("tl".to_string()))
}

pub fn cons(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("cons", "2", args.len()));
    }
    let tail = args[1].as_list("cons", 1)?;
    Ok(Value::List(List::cons(args[0].clone(), tail.clone())))
}

pub fn length(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("length", "1", args.len()));
    }
    let list = args[0].as_list("length", 0)?;
    Ok(Value::Int(list.len() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[i64]) -> Value {
        Value::List(List::from_vec(items.iter().map(|n| Value::Int(*n)).collect()))
    }

    #[test]
    fn hd_of_empty_list_is_an_error() {
        assert!(matches!(hd(&[list(&[])]), Err(EvalError::EmptyList(_))));
    }

    #[test]
    fn tl_of_empty_list_is_an_error() {
        assert!(matches!(tl(&[list(&[])]), Err(EvalError::EmptyList(_))));
    }

    #[test]
    fn cons_hd_tl_round_trip() {
        let xs = list(&[2, 3]);
        let consed = cons(&[Value::Int(1), xs.clone()]).unwrap();
        assert!(matches!(hd(&[consed.clone()]), Ok(Value::Int(1))));
        let tail = tl(&[consed]).unwrap();
        assert!(matches!(tail, Value::List(ref l) if *l == List::from_vec(vec![Value::Int(2), Value::Int(3)])));
    }

    #[test]
    fn length_of_cons_is_one_more_than_tail() {
        let xs = list(&[1, 2, 3]);
        assert!(matches!(length(&[xs.clone()]), Ok(Value::Int(3))));
        let consed = cons(&[Value::Int(0), xs]).unwrap();
        assert!(matches!(length(&[consed]), Ok(Value::Int(4))));
    }

    #[test]
    fn hd_on_non_list_is_a_type_error() {
        assert!(matches!(hd(&[Value::Int(1)]), Err(EvalError::TypeMismatch { .. })));
    }
}
