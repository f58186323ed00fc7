// ABOUTME: nom-based reader turning source text into parse trees for the evaluator

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace1, satisfy},
    combinator::{opt, recognize},
    multi::{many0, separated_list0},
    sequence::pair,
    IResult, Parser,
};

use crate::builtins::RESERVED_NAMES;
use crate::error::ParseError;
use crate::node::{Node, TopLevelForm};
use crate::value::{List, Value};
use std::sync::Arc;

type NomErr<'a> = nom::error::Error<&'a str>;

fn line_comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = nom::bytes::complete::take_while(|c: char| c != '\n')(input)?;
    Ok((input, ()))
}

/// Skips whitespace and `;`-to-end-of-line comments between tokens.
fn ws_and_comments(input: &str) -> IResult<&str, ()> {
    let (input, _) =
        many0(alt((nom::combinator::value((), multispace1), line_comment))).parse(input)?;
    Ok((input, ()))
}

fn identifier(input: &str) -> IResult<&str, String> {
    let (input, first) = satisfy(|c: char| c.is_ascii_alphabetic() || c == '_')(input)?;
    let (input, rest) = nom::bytes::complete::take_while(|c: char| {
        c.is_ascii_alphanumeric() || c == '_'
    })(input)?;
    let mut name = String::new();
    name.push(first);
    name.push_str(rest);
    Ok((input, name))
}

fn integer(input: &str) -> IResult<&str, i64> {
    let (input, text) = recognize(pair(opt(char('-')), digit1)).parse(input)?;
    match text.parse::<i64>() {
        Ok(n) => Ok((input, n)),
        Err(_) => Err(nom::Err::Error(NomErr::new(input, nom::error::ErrorKind::Digit))),
    }
}

fn list_literal(input: &str) -> IResult<&str, Arc<Node>> {
    let (input, _) = char('[')(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, items) = separated_list0(
        |i| {
            let (i, _) = ws_and_comments(i)?;
            let (i, _) = char(',')(i)?;
            ws_and_comments(i)
        },
        expr,
    )
    .parse(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, _) = char(']')(input)?;

    // A list literal is constant only if every element is itself a leaf
    // constant; otherwise it desugars to nested `cons` applications so
    // variable references and sub-expressions inside `[...]` still evaluate
    // at call time.
    if items.iter().all(is_constant_leaf) {
        let values: Vec<Value> = items.iter().map(|n| n.tag.clone()).collect();
        Ok((input, Node::leaf(Value::List(List::from_vec(values)))))
    } else {
        let mut tail = Node::leaf(Value::List(List::empty()));
        for item in items.into_iter().rev() {
            tail = Node::apply("cons", vec![item, tail]);
        }
        Ok((input, tail))
    }
}

fn is_constant_leaf(node: &Arc<Node>) -> bool {
    node.children.is_empty() && matches!(node.tag, Value::Int(_) | Value::List(_))
}

fn application(input: &str) -> IResult<&str, Arc<Node>> {
    let (input, name) = identifier(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, args) = separated_list0(
        |i| {
            let (i, _) = ws_and_comments(i)?;
            let (i, _) = char(',')(i)?;
            ws_and_comments(i)
        },
        expr,
    )
    .parse(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Node::apply(name, args)))
}

fn variable(input: &str) -> IResult<&str, Arc<Node>> {
    let (input, name) = identifier(input)?;
    Ok((input, Node::leaf(Value::SymRef(name))))
}

/// One expression: an integer, a list literal, an application, or a bare
/// variable reference.
fn expr(input: &str) -> IResult<&str, Arc<Node>> {
    let (input, _) = ws_and_comments(input)?;
    alt((
        |i| integer(i).map(|(i, n)| (i, Node::leaf(Value::Int(n)))),
        list_literal,
        application,
        variable,
    ))
    .parse(input)
}

fn param_list(input: &str) -> IResult<&str, Vec<String>> {
    let (input, _) = char('(')(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, params) = separated_list0(
        |i| {
            let (i, _) = ws_and_comments(i)?;
            let (i, _) = char(',')(i)?;
            ws_and_comments(i)
        },
        identifier,
    )
    .parse(input)?;
    let (input, _) = ws_and_comments(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, params))
}

/// Reads one top-level form: a named function definition
/// (`name(params) = body`), a named constant definition (`name = body`), a
/// bare expression, or end of input. Returns the remaining unconsumed input
/// so callers can loop over a multi-form source text.
pub fn parse_form(input: &str) -> Result<(TopLevelForm, &str), ParseError> {
    let (rest, _) = ws_and_comments(input).unwrap_or((input, ()));
    if rest.is_empty() {
        return Ok((TopLevelForm::Eof, rest));
    }

    if let Ok((after_name, name)) = identifier(rest) {
        // `name(params) = body` - a function definition.
        if let Ok((after_params, params)) = param_list(after_name) {
            if let Ok((after_eq, _)) = equals_sign(after_params) {
                reject_if_reserved(&name)?;
                let (after_body, body) =
                    expr(after_eq).map_err(|_| ParseError::Syntax(snippet(after_eq)))?;
                return Ok((TopLevelForm::FunctionDef { name, params, body }, after_body));
            }
        }
        // `name = body` - a constant definition.
        if let Ok((after_eq, _)) = equals_sign(after_name) {
            reject_if_reserved(&name)?;
            let (after_body, body) =
                expr(after_eq).map_err(|_| ParseError::Syntax(snippet(after_eq)))?;
            return Ok((TopLevelForm::ConstantDef { name, body }, after_body));
        }
    }

    // Otherwise, a bare expression.
    match expr(rest) {
        Ok((after_body, body)) => Ok((TopLevelForm::Expression(body), after_body)),
        Err(_) => Err(ParseError::Syntax(snippet(rest))),
    }
}

fn equals_sign(input: &str) -> IResult<&str, ()> {
    let (input, _) = ws_and_comments(input)?;
    let (input, _) = tag("=")(input)?;
    // Don't swallow `==`-shaped input (not part of this grammar, but keeps
    // `equals(...)` applications from ever being misparsed as `=`).
    let (input, _) = nom::combinator::not(char('=')).parse(input)?;
    ws_and_comments(input)
}

fn reject_if_reserved(name: &str) -> Result<(), ParseError> {
    if RESERVED_NAMES.contains(&name) {
        Err(ParseError::ReservedName(name.to_string()))
    } else {
        Ok(())
    }
}

fn snippet(input: &str) -> String {
    input.chars().take(40).collect()
}
