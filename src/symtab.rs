// ABOUTME: Process-wide symbol table mapping names to user definitions

use crate::error::EvalError;
use crate::node::Node;
use crate::value::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A stored top-level definition.
///
/// A `Constant` was evaluated once at definition time; its body is a single
/// leaf node holding the already-computed value. A `Function` stores its
/// body verbatim and is re-evaluated on every call.
#[derive(Debug, Clone)]
pub enum Definition {
    Constant(Value),
    Function {
        params: Vec<String>,
        body: Arc<Node>,
    },
}

#[derive(Debug, Clone)]
enum Entry {
    Reserved,
    Defined(Definition),
}

/// Populated by the driver; read-only during evaluation. A `RwLock` guards
/// the map because worker threads spawned by the fork/join scheduler read it
/// concurrently with the driver thread, which only ever writes between
/// top-level forms.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: RwLock<HashMap<String, Entry>>,
}

impl SymbolTable {
    pub fn new() -> Arc<Self> {
        Arc::new(SymbolTable { entries: RwLock::new(HashMap::new()) })
    }

    /// Reserves `name` at startup so it can never be `define`d over.
    pub fn reserve(&self, name: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(name.to_string(), Entry::Reserved);
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        matches!(
            self.entries.read().unwrap().get(name),
            Some(Entry::Reserved)
        )
    }

    /// Fails with `Redefinition` if `name` is reserved or already defined.
    pub fn define(&self, name: &str, def: Definition) -> Result<(), EvalError> {
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(name) {
            return Err(EvalError::Redefinition(name.to_string()));
        }
        entries.insert(name.to_string(), Entry::Defined(def));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<Definition> {
        match self.entries.read().unwrap().get(name) {
            Some(Entry::Defined(def)) => Some(def.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_function() -> Definition {
        Definition::Function {
            params: vec!["x".to_string()],
            body: Node::leaf(Value::SymRef("x".to_string())),
        }
    }

    #[test]
    fn reserved_names_reject_definition() {
        let table = SymbolTable::new();
        table.reserve("plus");
        assert!(matches!(
            table.define("plus", sample_function()),
            Err(EvalError::Redefinition(name)) if name == "plus"
        ));
    }

    #[test]
    fn define_then_lookup_round_trips() {
        let table = SymbolTable::new();
        table.define("f", sample_function()).unwrap();
        assert!(matches!(table.lookup("f"), Some(Definition::Function { .. })));
    }

    #[test]
    fn redefining_a_user_symbol_fails_and_leaves_it_untouched() {
        let table = SymbolTable::new();
        table.define("x", Definition::Constant(Value::Int(1))).unwrap();
        let result = table.define("x", Definition::Constant(Value::Int(2)));
        assert!(result.is_err());
        assert!(matches!(table.lookup("x"), Some(Definition::Constant(Value::Int(1)))));
    }

    #[test]
    fn unknown_name_looks_up_to_none() {
        let table = SymbolTable::new();
        assert!(table.lookup("nope").is_none());
    }
}
