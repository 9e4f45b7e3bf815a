use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Concat,
    Remove,
    Repeat,
    Truncate,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Concat),
            '-' => Some(Operator::Remove),
            '*' => Some(Operator::Repeat),
            '/' => Some(Operator::Truncate),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Concat => '+',
            Operator::Remove => '-',
            Operator::Repeat => '*',
            Operator::Truncate => '/',
        }
    }

    /// `+` and `-` take a quoted string on the right, `*` and `/` a number.
    pub fn takes_text(self) -> bool {
        matches!(self, Operator::Concat | Operator::Remove)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Concat => "concat",
            Operator::Remove => "remove",
            Operator::Repeat => "repeat",
            Operator::Truncate => "truncate",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One validated request. The variant decides which kind of right operand exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Concat { left: String, right: String },
    Remove { left: String, right: String },
    Repeat { left: String, times: usize },
    Truncate { left: String, divisor: usize },
}

impl Operation {
    pub fn left(&self) -> &str {
        match self {
            Operation::Concat { left, .. }
            | Operation::Remove { left, .. }
            | Operation::Repeat { left, .. }
            | Operation::Truncate { left, .. } => left,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Operation::Concat { .. } => Operator::Concat,
            Operation::Remove { .. } => Operator::Remove,
            Operation::Repeat { .. } => Operator::Repeat,
            Operation::Truncate { .. } => Operator::Truncate,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = self.operator();
        match self {
            Operation::Concat { left, right } | Operation::Remove { left, right } => {
                write!(f, "\"{}\" {} \"{}\"", left, op, right)
            }
            Operation::Repeat { left, times: n } | Operation::Truncate { left, divisor: n } => {
                write!(f, "\"{}\" {} {}", left, op, n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for c in ['+', '-', '*', '/'] {
            let op = Operator::from_symbol(c).unwrap();
            assert_eq!(op.symbol(), c);
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn operand_kind_follows_operator() {
        assert!(Operator::Concat.takes_text());
        assert!(Operator::Remove.takes_text());
        assert!(!Operator::Repeat.takes_text());
        assert!(!Operator::Truncate.takes_text());
    }

    #[test]
    fn display_uses_quoted_form() {
        let op = Operation::Remove {
            left: "hello".into(),
            right: "l".into(),
        };
        assert_eq!(op.to_string(), "\"hello\" - \"l\"");

        let op = Operation::Truncate {
            left: "hello".into(),
            divisor: 2,
        };
        assert_eq!(op.to_string(), "\"hello\" / 2");
        assert_eq!(op.left(), "hello");
        assert_eq!(op.operator(), Operator::Truncate);
    }
}
