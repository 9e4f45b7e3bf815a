//! A calculator over quoted strings.
//!
//! Each input line holds one binary operation: `"text" + "text"` concatenates,
//! `"text" - "text"` removes every occurrence of the right string, `"text" * n`
//! repeats and `"text" / n` keeps the first `len / n` characters.

pub mod calc_engine;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod operation;
pub mod parser;
pub mod repl;

#[cfg(feature = "line")]
pub mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
pub mod tui_mode;

pub use calc_engine::{calculate, calculate_traced};
pub use error::{Error, EvalError, ParseError, Result};
pub use evaluator::{compute, evaluate, EvaluationTrace};
pub use operation::{Operation, Operator};
pub use parser::parse;
