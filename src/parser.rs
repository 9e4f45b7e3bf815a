use tracing::{debug, warn};

use crate::config::{MAX_NUMBER, MAX_OPERAND_LEN, MIN_NUMBER};
use crate::error::{ParseError, Side};
use crate::operation::{Operation, Operator};

/// Parses one input line of the form `"text" op "text"` or `"text" op number`.
///
/// Surrounding whitespace is ignored. Tokens are separated by exactly one
/// whitespace character and nothing may follow the right operand.
pub fn parse(raw: &str) -> Result<Operation, ParseError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let result = Parser::new(input).operation();
    match &result {
        Ok(operation) => debug!(%operation, "parsed"),
        Err(e) => warn!(input, error = %e, "rejected input"),
    }
    result
}

enum RightSide {
    Text(String),
    Digits(String),
}

struct Parser {
    chars: Vec<char>,
    current: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Parser {
            chars: input.chars().collect(),
            current: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        Some(c)
    }

    fn operation(&mut self) -> Result<Operation, ParseError> {
        let left = self.quoted(Side::Left)?;
        self.separator()?;
        let operator = self.operator()?;
        self.separator()?;
        let right = self.right_side()?;

        if self.current < self.chars.len() {
            return Err(ParseError::Malformed("unexpected input after the right operand"));
        }

        match right {
            RightSide::Text(right) if operator.takes_text() => Ok(match operator {
                Operator::Concat => Operation::Concat { left, right },
                _ => Operation::Remove { left, right },
            }),
            RightSide::Digits(_) if operator.takes_text() => {
                Err(ParseError::RequiresText(operator))
            }
            RightSide::Text(_) => Err(ParseError::RequiresNumber(operator)),
            RightSide::Digits(digits) => {
                let n = number(&digits)?;
                Ok(match operator {
                    Operator::Repeat => Operation::Repeat { left, times: n },
                    _ => Operation::Truncate { left, divisor: n },
                })
            }
        }
    }

    fn quoted(&mut self, side: Side) -> Result<String, ParseError> {
        if self.bump() != Some('"') {
            return Err(ParseError::Malformed("operand must start with a double quote"));
        }

        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some(c) => text.push(c),
                None => return Err(ParseError::Malformed("missing closing double quote")),
            }
        }

        let found = text.chars().count();
        if found == 0 || found > MAX_OPERAND_LEN {
            return Err(ParseError::OperandLength { side, found });
        }
        Ok(text)
    }

    fn separator(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(c) if c.is_whitespace() => Ok(()),
            Some(_) => Err(ParseError::Malformed("tokens must be separated by a space")),
            None => Err(ParseError::Malformed("incomplete expression")),
        }
    }

    fn operator(&mut self) -> Result<Operator, ParseError> {
        match self.bump() {
            Some(c) if c.is_whitespace() => {
                Err(ParseError::Malformed("tokens must be separated by a single space"))
            }
            Some(c) => Operator::from_symbol(c).ok_or(ParseError::UnknownOperator(c)),
            None => Err(ParseError::Malformed("missing operator")),
        }
    }

    fn right_side(&mut self) -> Result<RightSide, ParseError> {
        match self.peek() {
            Some('"') => self.quoted(Side::Right).map(RightSide::Text),
            Some(c) if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(c) = self.peek().filter(char::is_ascii_digit) {
                    digits.push(c);
                    self.current += 1;
                }
                Ok(RightSide::Digits(digits))
            }
            Some(c) if c.is_whitespace() => {
                Err(ParseError::Malformed("tokens must be separated by a single space"))
            }
            _ => Err(ParseError::Malformed(
                "right operand must be a quoted string or a number",
            )),
        }
    }
}

fn number(digits: &str) -> Result<usize, ParseError> {
    let n = digits
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber(digits.to_string()))?;
    if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
        return Err(ParseError::NumberOutOfRange(n));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(left: &str, op: char, right: &str) -> Operation {
        let (left, right) = (left.to_string(), right.to_string());
        match op {
            '+' => Operation::Concat { left, right },
            _ => Operation::Remove { left, right },
        }
    }

    #[test]
    fn parses_string_operations() {
        assert_eq!(parse("\"hello\" + \"world\""), Ok(text("hello", '+', "world")));
        assert_eq!(parse("  \"hello\" - \"l\"\n"), Ok(text("hello", '-', "l")));
    }

    #[test]
    fn parses_numeric_operations() {
        assert_eq!(
            parse("\"ab\" * 3"),
            Ok(Operation::Repeat {
                left: "ab".into(),
                times: 3
            })
        );
        assert_eq!(
            parse("\"hello\" / 10"),
            Ok(Operation::Truncate {
                left: "hello".into(),
                divisor: 10
            })
        );
        assert_eq!(
            parse("\"x\" * 007"),
            Ok(Operation::Repeat {
                left: "x".into(),
                times: 7
            })
        );
    }

    #[test]
    fn operands_may_contain_spaces_and_symbols() {
        assert_eq!(parse("\"a + b\" + \" * 2\""), Ok(text("a + b", '+', " * 2")));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parse(" \t "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn operand_lengths() {
        assert_eq!(
            parse("\"\" + \"x\""),
            Err(ParseError::OperandLength {
                side: Side::Left,
                found: 0
            })
        );
        assert_eq!(
            parse("\"x\" + \"\""),
            Err(ParseError::OperandLength {
                side: Side::Right,
                found: 0
            })
        );
        assert_eq!(
            parse("\"abcdefghijk\" * 2"),
            Err(ParseError::OperandLength {
                side: Side::Left,
                found: 11
            })
        );
        assert!(parse("\"abcdefghij\" + \"abcdefghij\"").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(parse("\"приветмир!\" * 2").is_ok());
        assert_eq!(
            parse("\"приветмир!!\" * 2"),
            Err(ParseError::OperandLength {
                side: Side::Left,
                found: 11
            })
        );
    }

    #[test]
    fn operand_kind_must_match_operator() {
        assert_eq!(
            parse("\"hello\" * \"world\""),
            Err(ParseError::RequiresNumber(Operator::Repeat))
        );
        assert_eq!(
            parse("\"hello\" / \"world\""),
            Err(ParseError::RequiresNumber(Operator::Truncate))
        );
        assert_eq!(
            parse("\"hello\" + 3"),
            Err(ParseError::RequiresText(Operator::Concat))
        );
        assert_eq!(
            parse("\"hello\" - 3"),
            Err(ParseError::RequiresText(Operator::Remove))
        );
    }

    #[test]
    fn number_range() {
        assert_eq!(parse("\"a\" * 0"), Err(ParseError::NumberOutOfRange(0)));
        assert_eq!(parse("\"a\" / 11"), Err(ParseError::NumberOutOfRange(11)));
        assert_eq!(
            parse("\"a\" * 99999999999999999999999"),
            Err(ParseError::InvalidNumber("99999999999999999999999".into()))
        );
    }

    #[test]
    fn rejects_malformed_shapes() {
        for input in [
            "hello + \"x\"",
            "\"hello + \"x\"",
            "\"a\"+\"b\"",
            "\"a\"  + \"b\"",
            "\"a\" +  \"b\"",
            "\"a\" +",
            "\"a\"",
            "\"a\" + b",
            "\"a\" * -3",
            "\"a\" * 3x",
            "\"a\" * 3 4",
            "\"a\" + \"b\" extra",
            "\"a\" + \"b\"c\"",
            "\"a\" + \"b",
        ] {
            assert!(
                matches!(parse(input), Err(ParseError::Malformed(_))),
                "{} should be malformed, got {:?}",
                input,
                parse(input)
            );
        }
    }

    #[test]
    fn unknown_operator() {
        assert_eq!(parse("\"a\" % 2"), Err(ParseError::UnknownOperator('%')));
        assert_eq!(parse("\"a\" ^ \"b\""), Err(ParseError::UnknownOperator('^')));
    }

    #[test]
    fn display_form_parses_back() {
        for input in ["\"ab\" * 3", "\"a b\" + \"c\"", "\"xyz\" - \"y\"", "\"hello\" / 2"] {
            let operation = parse(input).unwrap();
            assert_eq!(operation.to_string(), input);
            assert_eq!(parse(&operation.to_string()), Ok(operation));
        }
    }
}
