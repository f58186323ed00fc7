// ABOUTME: Value types representing evaluated results and list-cell storage

use crate::error::EvalError;
use std::fmt;
use std::sync::Arc;

/// A single cell of an immutable, `Arc`-linked list.
///
/// Cells are never mutated after construction; `cons` allocates a new head
/// that shares the existing tail, so structural sharing is safe to read from
/// multiple worker threads at once.
#[derive(Debug)]
struct ConsCell {
    head: Value,
    tail: List,
}

/// An ordered, possibly empty, singly-linked sequence of `Value`s.
#[derive(Debug, Clone, Default)]
pub struct List(Option<Arc<ConsCell>>);

impl List {
    pub fn empty() -> Self {
        List(None)
    }

    pub fn cons(head: Value, tail: List) -> Self {
        List(Some(Arc::new(ConsCell { head, tail })))
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        let mut list = List::empty();
        for item in items.into_iter().rev() {
            list = List::cons(item, list);
        }
        list
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn head(&self) -> Option<&Value> {
        self.0.as_ref().map(|cell| &cell.head)
    }

    pub fn tail(&self) -> Option<List> {
        self.0.as_ref().map(|cell| cell.tail.clone())
    }

    /// O(n) walk.
    pub fn len(&self) -> usize {
        let mut n = 0;
        let mut node = self.0.as_ref();
        while let Some(cell) = node {
            n += 1;
            node = cell.tail.0.as_ref();
        }
        n
    }

    fn iter(&self) -> ListIter<'_> {
        ListIter { node: self.0.as_deref() }
    }
}

struct ListIter<'a> {
    node: Option<&'a ConsCell>,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.node?;
        self.node = cell.tail.0.as_deref();
        Some(&cell.head)
    }
}

/// Element-wise equality at every position, same length.
impl PartialEq for List {
    fn eq(&self, other: &List) -> bool {
        self.iter().eq(other.iter())
    }
}

/// A tagged union of values flowing through the evaluator.
///
/// `SymRef` is a tree-internal tag: it only appears inside unevaluated parse
/// trees (see `crate::node::Node`) and must never be the result of `eval`.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    List(List),
    SymRef(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::List(_) => "List",
            Value::SymRef(_) => "SymRef",
        }
    }

    pub fn as_int(&self, function: &str, position: usize) -> Result<i64, EvalError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(EvalError::type_error(function, "Int", other, position)),
        }
    }

    pub fn as_list(&self, function: &str, position: usize) -> Result<&List, EvalError> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(EvalError::type_error(function, "List", other, position)),
        }
    }

    /// Structural equality used by the `equals` builtin: same tag, and for
    /// lists, element-wise equality of `Int` payloads at every position.
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::SymRef(name) => write!(f, "{}", name),
        }
    }
}
