// ABOUTME: The pure "evaluate one top-level form" entry point the REPL/CLI loop drives

use crate::context::Context;
use crate::error::EvalError;
use crate::eval::eval;
use crate::frame::Frame;
use crate::node::TopLevelForm;
use crate::symtab::Definition;
use crate::value::Value;
use std::sync::Arc;

/// What running one top-level form produced, for the loop to print.
#[derive(Debug)]
pub enum Outcome {
    DefinedConstant { name: String, value: Value },
    DefinedFunction { name: String },
    Value(Value),
}

/// Runs one top-level form to completion.
///
/// On any error - including an attempted redefinition of a reserved or
/// already-defined name - the symbol table is left exactly as it was before
/// this call: `define` never partially applies, and a definition's
/// body is only evaluated (for constants) or installed (for functions)
/// after any earlier step has already succeeded.
pub fn run_form(form: &TopLevelForm, ctx: &Context) -> Result<Outcome, EvalError> {
    let empty_frame = Arc::new(Frame::empty());
    match form {
        TopLevelForm::FunctionDef { name, params, body } => {
            ctx.symtab.define(
                name,
                Definition::Function { params: params.clone(), body: body.clone() },
            )?;
            Ok(Outcome::DefinedFunction { name: name.clone() })
        }
        TopLevelForm::ConstantDef { name, body } => {
            let value = eval(body, &empty_frame, ctx)?;
            ctx.symtab.define(name, Definition::Constant(value.clone()))?;
            Ok(Outcome::DefinedConstant { name: name.clone(), value })
        }
        TopLevelForm::Expression(body) => Ok(Outcome::Value(eval(body, &empty_frame, ctx)?)),
        TopLevelForm::Eof => unreachable!("callers must handle TopLevelForm::Eof before calling run_form"),
    }
}
