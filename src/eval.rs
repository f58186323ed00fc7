// ABOUTME: The recursive tree-walking evaluator

use crate::builtins;
use crate::context::Context;
use crate::error::EvalError;
use crate::frame::Frame;
use crate::node::Node;
use crate::scheduler;
use crate::symtab::Definition;
use crate::value::Value;
use std::sync::Arc;
use std::time::Instant;

/// Evaluates one parse-tree node under `frame`, dispatching on the tag of
/// `node.tag`.
pub fn eval(node: &Arc<Node>, frame: &Arc<Frame>, ctx: &Context) -> Result<Value, EvalError> {
    match &node.tag {
        // Self-evaluating constants.
        Value::Int(_) | Value::List(_) if node.children.is_empty() => {
            ctx.debug.trace(format_args!("evaluated constant {}", node.tag));
            Ok(node.tag.clone())
        }

        // Variable reference: SymRef with no children.
        Value::SymRef(name) if node.children.is_empty() => eval_variable(name, frame, ctx),

        // Application: SymRef with children.
        Value::SymRef(name) => eval_application(name, &node.children, frame, ctx),

        // An Int/List tag should never carry children (parser contract).
        _ => unreachable!("Int/List tags never carry children"),
    }
}

fn eval_variable(name: &str, frame: &Arc<Frame>, ctx: &Context) -> Result<Value, EvalError> {
    if let Some(value) = frame.get(name) {
        ctx.debug.trace(format_args!("resolved {name} from the local frame"));
        return Ok(value.clone());
    }
    match ctx.symtab.lookup(name) {
        Some(Definition::Constant(value)) => Ok(value),
        _ => Err(EvalError::UnboundName(name.to_string())),
    }
}

fn eval_application(
    name: &str,
    children: &[Arc<Node>],
    frame: &Arc<Frame>,
    ctx: &Context,
) -> Result<Value, EvalError> {
    match name {
        "ite" => eval_ite(children, frame, ctx),
        "time" => eval_time(children, frame, ctx),
        _ if builtins::is_ordinary_builtin(name) => {
            ctx.debug.trace(format_args!("executing builtin {name}"));
            let args = eval_args_sequential(children, frame, ctx)?;
            builtins::call(name, &args)
        }
        _ => eval_user_function(name, children, frame, ctx),
    }
}

/// `ite(cond, then, else)`: the non-taken branch is never evaluated.
fn eval_ite(children: &[Arc<Node>], frame: &Arc<Frame>, ctx: &Context) -> Result<Value, EvalError> {
    if children.len() != 3 {
        return Err(EvalError::arity_error("ite", "3", children.len()));
    }
    ctx.debug.trace("evaluating an ite condition");
    let condition = eval(&children[0], frame, ctx)?;
    let is_true = condition.as_int("ite", 0)? != 0;
    if is_true {
        eval(&children[1], frame, ctx)
    } else {
        eval(&children[2], frame, ctx)
    }
}

/// `time(expr)`: evaluate the single argument, discard its value, and return
/// the elapsed monotonic wall time in whole seconds.
fn eval_time(children: &[Arc<Node>], frame: &Arc<Frame>, ctx: &Context) -> Result<Value, EvalError> {
    if children.len() != 1 {
        return Err(EvalError::arity_error("time", "1", children.len()));
    }
    let start = Instant::now();
    eval(&children[0], frame, ctx)?;
    let elapsed = start.elapsed().as_secs_f64();
    Ok(Value::Int(elapsed as i64))
}

/// Ordinary built-ins evaluate all children eagerly, in source order, before
/// applying - no speculative parallelism: they're too cheap to amortize a
/// thread spawn.
fn eval_args_sequential(
    children: &[Arc<Node>],
    frame: &Arc<Frame>,
    ctx: &Context,
) -> Result<Vec<Value>, EvalError> {
    children.iter().map(|child| eval(child, frame, ctx)).collect()
}

fn eval_user_function(
    name: &str,
    children: &[Arc<Node>],
    frame: &Arc<Frame>,
    ctx: &Context,
) -> Result<Value, EvalError> {
    match ctx.symtab.lookup(name) {
        Some(Definition::Function { params, body }) => {
            if params.len() != children.len() {
                return Err(EvalError::arity_error(name, params.len().to_string(), children.len()));
            }
            ctx.debug.trace(format_args!("dispatching user function {name}"));
            let args = scheduler::eval_args(children, frame, ctx)?;
            let callee_frame = Arc::new(Frame::bind(&params, args));
            eval(&body, &callee_frame, ctx)
        }
        // A stored constant (or nothing at all) is not a callable function.
        _ => Err(EvalError::UnboundName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugSink;
    use crate::node::Node;
    use crate::scheduler::Scheduler;
    use crate::symtab::SymbolTable;
    use crate::value::List;

    fn ctx(max_workers: usize) -> Context {
        let symtab = SymbolTable::new();
        for name in builtins::RESERVED_NAMES {
            symtab.reserve(name);
        }
        Context::new(symtab, Scheduler::new(max_workers), Arc::new(DebugSink::disabled()))
    }

    fn run(node: &Arc<Node>, ctx: &Context) -> Result<Value, EvalError> {
        eval(node, &Arc::new(Frame::empty()), ctx)
    }

    #[test]
    fn constants_are_self_evaluating() {
        let node = Node::leaf(Value::Int(42));
        assert!(matches!(run(&node, &ctx(4)), Ok(Value::Int(42))));
    }

    #[test]
    fn plus_applies_a_builtin() {
        let node = Node::apply("plus", vec![Node::leaf(Value::Int(2)), Node::leaf(Value::Int(3))]);
        assert!(matches!(run(&node, &ctx(4)), Ok(Value::Int(5))));
    }

    #[test]
    fn ite_never_evaluates_the_untaken_branch() {
        let cond = Node::apply("equals", vec![Node::leaf(Value::Int(1)), Node::leaf(Value::Int(1))]);
        let then_branch = Node::leaf(Value::Int(42));
        let else_branch = Node::apply("divide", vec![Node::leaf(Value::Int(1)), Node::leaf(Value::Int(0))]);
        let node = Node::apply("ite", vec![cond, then_branch, else_branch]);
        assert!(matches!(run(&node, &ctx(4)), Ok(Value::Int(42))));
    }

    #[test]
    fn unbound_name_is_an_error() {
        let node = Node::leaf(Value::SymRef("nope".to_string()));
        assert!(matches!(run(&node, &ctx(4)), Err(EvalError::UnboundName(name)) if name == "nope"));
    }

    #[test]
    fn user_defined_recursive_function_runs_with_and_without_parallelism() {
        // sumlist(x) = ite(equals(length(x), 0), 0, plus(hd(x), sumlist(tl(x))))
        let body = Node::apply(
            "ite",
            vec![
                Node::apply(
                    "equals",
                    vec![
                        Node::apply("length", vec![Node::leaf(Value::SymRef("x".to_string()))]),
                        Node::leaf(Value::Int(0)),
                    ],
                ),
                Node::leaf(Value::Int(0)),
                Node::apply(
                    "plus",
                    vec![
                        Node::apply("hd", vec![Node::leaf(Value::SymRef("x".to_string()))]),
                        Node::apply(
                            "sumlist",
                            vec![Node::apply("tl", vec![Node::leaf(Value::SymRef("x".to_string()))])],
                        ),
                    ],
                ),
            ],
        );

        for max_workers in [0, 4] {
            let ctx = ctx(max_workers);
            ctx.symtab
                .define(
                    "sumlist",
                    Definition::Function { params: vec!["x".to_string()], body: body.clone() },
                )
                .unwrap();

            let list = List::from_vec(vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]);
            let call = Node::apply("sumlist", vec![Node::leaf(Value::List(list))]);
            assert!(matches!(run(&call, &ctx), Ok(Value::Int(10))));
        }
    }

    #[test]
    fn arity_mismatch_on_user_function_is_an_error() {
        let ctx = ctx(4);
        ctx.symtab
            .define(
                "id",
                Definition::Function { params: vec!["x".to_string()], body: Node::leaf(Value::SymRef("x".to_string())) },
            )
            .unwrap();
        let call = Node::apply("id", vec![Node::leaf(Value::Int(1)), Node::leaf(Value::Int(2))]);
        assert!(matches!(run(&call, &ctx), Err(EvalError::ArityError { .. })));
    }
}
