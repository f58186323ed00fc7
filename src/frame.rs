// ABOUTME: Per-call parameter bindings for one function activation

use crate::value::Value;
use std::collections::HashMap;

/// A finite mapping from parameter name to value, valid only for the
/// duration of one function activation. The language is first-order and has
/// no closures, so frames never nest across calls: a callee gets a
/// frame containing exactly its own declared parameters, nothing inherited
/// from the caller's frame.
#[derive(Debug, Default)]
pub struct Frame {
    bindings: HashMap<String, Value>,
}

impl Frame {
    pub fn empty() -> Self {
        Frame { bindings: HashMap::new() }
    }

    pub fn bind(params: &[String], args: Vec<Value>) -> Self {
        let bindings = params
            .iter()
            .cloned()
            .zip(args)
            .collect::<HashMap<_, _>>();
        Frame { bindings }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_params_to_args_by_position() {
        let frame = Frame::bind(
            &["a".to_string(), "b".to_string()],
            vec![Value::Int(1), Value::Int(2)],
        );
        assert!(matches!(frame.get("a"), Some(Value::Int(1))));
        assert!(matches!(frame.get("b"), Some(Value::Int(2))));
        assert!(frame.get("c").is_none());
    }

    #[test]
    fn empty_frame_has_no_bindings() {
        assert!(Frame::empty().get("x").is_none());
    }
}
