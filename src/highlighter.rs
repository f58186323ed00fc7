// ABOUTME: Syntax highlighter for the REPL, colorizing parens/brackets, special
// forms, builtins, and numeric literals while preserving display width

use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;

use crate::builtins::RESERVED_NAMES;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_PARENS: &str = "\x1b[1;34m"; // bold blue
const COLOR_SPECIAL_FORM: &str = "\x1b[1;35m"; // bold magenta
const COLOR_BUILTIN: &str = "\x1b[36m"; // cyan
const COLOR_NUMBER: &str = "\x1b[33m"; // yellow

/// Helper installed into `rustyline::Editor` for interactive syntax coloring.
/// Implements only `Highlighter`; completion, hinting, and validation are
/// left at their no-op defaults (this grammar has no multi-line forms that
/// need validation to decide whether Enter submits the line).
pub struct LispHelper;

impl LispHelper {
    pub fn new() -> Self {
        LispHelper
    }
}

impl Default for LispHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for LispHelper {}
impl Completer for LispHelper {
    type Candidate = String;
}
impl Hinter for LispHelper {
    type Hint = String;
}
impl Validator for LispHelper {}

impl Highlighter for LispHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line);
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

fn highlight_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '(' | ')' | '[' | ']' | ',' | '=' => {
                result.push_str(COLOR_PARENS);
                result.push(chars[i]);
                result.push_str(COLOR_RESET);
                i += 1;
            }
            '0'..='9' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                result.push_str(COLOR_NUMBER);
                result.extend(&chars[start..i]);
                result.push_str(COLOR_RESET);
            }
            '-' if i + 1 < chars.len() && chars[i + 1].is_ascii_digit() => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                result.push_str(COLOR_NUMBER);
                result.extend(&chars[start..i]);
                result.push_str(COLOR_RESET);
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if word == "ite" || word == "time" {
                    result.push_str(COLOR_SPECIAL_FORM);
                    result.push_str(&word);
                    result.push_str(COLOR_RESET);
                } else if RESERVED_NAMES.contains(&word.as_str()) {
                    result.push_str(COLOR_BUILTIN);
                    result.push_str(&word);
                    result.push_str(COLOR_RESET);
                } else {
                    result.push_str(&word);
                }
            }
            c => {
                result.push(c);
                i += 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_colorized() {
        let out = highlight_line("plus(1,2)");
        assert!(out.contains(COLOR_BUILTIN));
    }

    #[test]
    fn special_forms_get_their_own_color() {
        let out = highlight_line("ite(1,2,3)");
        assert!(out.contains(COLOR_SPECIAL_FORM));
    }

    #[test]
    fn user_names_are_left_uncolored() {
        let out = highlight_line("sumlist(x)");
        let expected = format!(
            "sumlist{COLOR_PARENS}({COLOR_RESET}x{COLOR_PARENS}){COLOR_RESET}"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn plain_line_without_specials_still_highlights_parens() {
        let out = highlight_line("x");
        assert_eq!(out, "x");
    }
}
