// ABOUTME: The shared, explicit interpreter context threaded through eval calls

use crate::debug::DebugSink;
use crate::scheduler::Scheduler;
use crate::symtab::SymbolTable;
use std::sync::Arc;

/// Bundles the interpreter's global mutable state so it can be passed
/// explicitly to `eval` and into fork/join worker closures, rather than
/// reached for through hidden singletons.
#[derive(Clone)]
pub struct Context {
    pub symtab: Arc<SymbolTable>,
    pub scheduler: Arc<Scheduler>,
    pub debug: Arc<DebugSink>,
}

impl Context {
    pub fn new(symtab: Arc<SymbolTable>, scheduler: Arc<Scheduler>, debug: Arc<DebugSink>) -> Self {
        Context { symtab, scheduler, debug }
    }
}
