use std::fmt;

use crate::config::{MAX_NUMBER, MAX_OPERAND_LEN, MIN_NUMBER};
use crate::operation::Operator;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Input that does not form a valid expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    Malformed(&'static str),
    UnknownOperator(char),
    OperandLength { side: Side, found: usize },
    RequiresText(Operator),
    RequiresNumber(Operator),
    InvalidNumber(String),
    NumberOutOfRange(usize),
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input"),
            ParseError::Malformed(detail) => {
                write!(f, "expected \"text\" op operand: {}", detail)
            }
            ParseError::UnknownOperator(c) => write!(f, "unsupported operator '{}'", c),
            ParseError::OperandLength { side, found } => write!(
                f,
                "{} operand must be 1 to {} characters, got {}",
                side, MAX_OPERAND_LEN, found
            ),
            ParseError::RequiresText(op) => {
                write!(f, "operation '{}' requires a string operand", op)
            }
            ParseError::RequiresNumber(op) => {
                write!(f, "operation '{}' requires a numeric operand", op)
            }
            ParseError::InvalidNumber(s) => write!(f, "invalid number '{}'", s),
            ParseError::NumberOutOfRange(n) => write!(
                f,
                "number {} is out of range {}..={}",
                n, MIN_NUMBER, MAX_NUMBER
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    DivisionByZero,
}

impl std::error::Error for EvalError {}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Eval(EvalError),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}
