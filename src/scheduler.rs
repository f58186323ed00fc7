// ABOUTME: Bounded fork/join scheduler for speculatively-parallel argument evaluation

use crate::context::Context;
use crate::error::EvalError;
use crate::frame::Frame;
use crate::node::Node;
use crate::value::Value;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Tracks the global number of worker threads currently in flight and
/// decides, per argument slot, whether to spawn a worker or evaluate inline.
#[derive(Debug)]
pub struct Scheduler {
    max_workers: usize,
    active_workers: Mutex<usize>,
}

impl Scheduler {
    pub fn new(max_workers: usize) -> Arc<Self> {
        Arc::new(Scheduler { max_workers, active_workers: Mutex::new(0) })
    }

    fn try_acquire(&self) -> bool {
        if self.max_workers == 0 {
            return false;
        }
        let mut active = self.active_workers.lock().unwrap();
        if *active < self.max_workers {
            *active += 1;
            true
        } else {
            false
        }
    }

    fn release(&self) {
        *self.active_workers.lock().unwrap() -= 1;
    }
}

enum Slot {
    /// Evaluated inline on the dispatching thread once all slots are decided.
    Inline(Arc<Node>),
    /// Handed to a worker thread; joined in positional order after all
    /// inline slots have run.
    Spawned(JoinHandle<Result<Value, EvalError>>),
}

/// Evaluates the argument list of an eligible (user-function) application,
/// speculatively parallelizing independent argument sub-expressions.
///
/// Policy: iterate arguments in source order. For each argument
/// whose root node is itself an application, spawn a worker iff capacity is
/// available - except the *first* such argument, which is always reserved
/// for inline execution regardless of capacity, guaranteeing forward
/// progress even at the cap. Every other argument (constant leaf or bare
/// variable reference) is always evaluated inline. Results are collected
/// positionally, so the observable result never depends on which arguments
/// happened to run in parallel.
pub fn eval_args(
    children: &[Arc<Node>],
    frame: &Arc<Frame>,
    ctx: &Context,
) -> Result<Vec<Value>, EvalError> {
    let mut slots: Vec<Slot> = Vec::with_capacity(children.len());
    let mut reserved_first_application = false;

    for child in children {
        if child.is_application() {
            if !reserved_first_application {
                reserved_first_application = true;
                slots.push(Slot::Inline(child.clone()));
            } else if ctx.scheduler.try_acquire() {
                let child = child.clone();
                let frame = frame.clone();
                let ctx = ctx.clone();
                let handle = std::thread::spawn(move || {
                    let result = crate::eval::eval(&child, &frame, &ctx);
                    ctx.scheduler.release();
                    result
                });
                slots.push(Slot::Spawned(handle));
            } else {
                slots.push(Slot::Inline(child.clone()));
            }
        } else {
            slots.push(Slot::Inline(child.clone()));
        }
    }

    // Evaluate every inline slot first, then join spawned workers in order,
    // so a slow early worker never blocks an inline slot that could have
    // already run.
    let mut results: Vec<Option<Result<Value, EvalError>>> = Vec::with_capacity(slots.len());
    for slot in &slots {
        match slot {
            Slot::Inline(node) => results.push(Some(crate::eval::eval(node, frame, ctx))),
            Slot::Spawned(_) => results.push(None),
        }
    }
    for (slot, result) in slots.into_iter().zip(results.iter_mut()) {
        if let Slot::Spawned(handle) = slot {
            let joined = handle
                .join()
                .unwrap_or_else(|_| Err(EvalError::ArityError {
                    function: "<worker>".to_string(),
                    expected: "a value".to_string(),
                    actual: 0,
                }));
            *result = Some(joined);
        }
    }

    // Surface the first error encountered in positional order; every worker
    // has already been joined above, so none are leaked.
    let mut values = Vec::with_capacity(results.len());
    for result in results {
        values.push(result.expect("every slot was filled above")?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_mode_never_acquires_a_worker() {
        let scheduler = Scheduler::new(0);
        assert!(!scheduler.try_acquire());
    }

    #[test]
    fn acquire_respects_the_cap() {
        let scheduler = Scheduler::new(1);
        assert!(scheduler.try_acquire());
        assert!(!scheduler.try_acquire());
        scheduler.release();
        assert!(scheduler.try_acquire());
    }
}
