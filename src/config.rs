// ABOUTME: Version info, welcome banner, and startup defaults

/// Default cap on simultaneously in-flight fork/join workers.
pub const DEFAULT_MAX_WORKERS: usize = 10;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WELCOME_MESSAGE: &str = "forklisp - a speculatively-parallel Lisp evaluator";

pub const WELCOME_SUBTITLE: &str =
    "Define with `name(params) = body` or `name = body`; (quit) or Ctrl-D to exit.";
