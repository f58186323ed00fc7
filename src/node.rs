// ABOUTME: Parse-tree node shape delivered by the parser to the evaluator

use crate::value::Value;
use std::sync::Arc;

/// A node in a parse tree: `(tag, children)`.
///
/// `tag` is a `Value` (`Int`, `List`, or `SymRef`); `children` is empty for
/// leaves. Only a `SymRef` tag may have non-empty children - a `SymRef` with
/// children is an operator/function application, arguments in source order;
/// a `SymRef` with no children is a variable reference.
///
/// Nodes are `Arc`-wrapped throughout so one parsed body can be handed to
/// fork/join worker threads (see `crate::scheduler`) without cloning the
/// tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub tag: Value,
    pub children: Vec<Arc<Node>>,
}

impl Node {
    pub fn leaf(tag: Value) -> Arc<Node> {
        Arc::new(Node { tag, children: Vec::new() })
    }

    pub fn apply(name: impl Into<String>, children: Vec<Arc<Node>>) -> Arc<Node> {
        Arc::new(Node { tag: Value::SymRef(name.into()), children })
    }

    /// A node is itself a function application - the shape that makes an
    /// argument slot eligible for fork/join - when its tag is a `SymRef`
    /// and it has at least one child.
    pub fn is_application(&self) -> bool {
        matches!(self.tag, Value::SymRef(_)) && !self.children.is_empty()
    }

    pub fn symbol_name(&self) -> Option<&str> {
        match &self.tag {
            Value::SymRef(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// One complete top-level form, as delivered by the parser.
#[derive(Debug, Clone)]
pub enum TopLevelForm {
    /// `(define (name params...) body)` - a function definition.
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Arc<Node>,
    },
    /// `(define name body)` - a constant definition; `body` is evaluated
    /// once at definition time.
    ConstantDef { name: String, body: Arc<Node> },
    /// A bare expression, evaluated and printed.
    Expression(Arc<Node>),
    /// End of input.
    Eof,
}
