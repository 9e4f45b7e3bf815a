use tracing::debug;

use crate::error::EvalError;
use crate::format::format;
use crate::operation::Operation;

pub struct Step {
    pub operation: String,
    pub result: String,
}

/// Intermediate values of one calculation, collected only when `detailed_mode` is on.
pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    pub fn add_step(&mut self, operation: impl Into<String>, result: impl Into<String>) {
        if self.detailed_mode {
            self.steps.push(Step {
                operation: operation.into(),
                result: result.into(),
            });
        }
    }
}

/// Computes the raw result of `op`, before any display formatting.
pub fn compute(op: &Operation) -> Result<String, EvalError> {
    let result = match op {
        Operation::Concat { left, right } => format!("{}{}", left, right),
        Operation::Remove { left, right } => left.replace(right.as_str(), ""),
        Operation::Repeat { left, times } => left.repeat(*times),
        Operation::Truncate { left, divisor } => {
            if *divisor == 0 {
                return Err(EvalError::DivisionByZero);
            }
            let part_length = left.chars().count() / divisor;
            left.chars().take(part_length).collect()
        }
    };
    debug!(operator = op.operator().name(), len = result.chars().count(), "computed");
    Ok(result)
}

/// Computes `op` and formats the result for display.
pub fn evaluate(op: &Operation) -> Result<String, EvalError> {
    compute(op).map(|raw| format(&raw))
}

pub fn evaluate_traced(op: &Operation, trace: &mut EvaluationTrace) -> Result<String, EvalError> {
    let raw = compute(op)?;
    trace.add_step(op.operator().name(), raw.as_str());
    let shown = format(&raw);
    if shown != raw {
        trace.add_step("format", shown.as_str());
    }
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(left: &str, right: &str) -> (String, String) {
        (left.to_string(), right.to_string())
    }

    #[test]
    fn concat_keeps_order() {
        let (left, right) = text("hello", "world");
        assert_eq!(
            evaluate(&Operation::Concat { left, right }),
            Ok("helloworld".into())
        );
    }

    #[test]
    fn remove_deletes_every_occurrence() {
        let (left, right) = text("hello", "l");
        assert_eq!(compute(&Operation::Remove { left, right }), Ok("heo".into()));

        let (left, right) = text("abc", "x");
        assert_eq!(compute(&Operation::Remove { left, right }), Ok("abc".into()));
    }

    #[test]
    fn remove_matches_do_not_overlap() {
        let (left, right) = text("aaa", "aa");
        assert_eq!(compute(&Operation::Remove { left, right }), Ok("a".into()));

        // the pair joined by a removal is not rescanned
        let (left, right) = text("aabbab", "ab");
        assert_eq!(compute(&Operation::Remove { left, right }), Ok("ab".into()));
    }

    #[test]
    fn repeat() {
        let op = Operation::Repeat {
            left: "ab".into(),
            times: 3,
        };
        assert_eq!(evaluate(&op), Ok("ababab".into()));
    }

    #[test]
    fn truncate_takes_proportional_prefix() {
        let op = Operation::Truncate {
            left: "hello".into(),
            divisor: 2,
        };
        assert_eq!(evaluate(&op), Ok("he".into()));

        let op = Operation::Truncate {
            left: "привет".into(),
            divisor: 3,
        };
        assert_eq!(evaluate(&op), Ok("пр".into()));
    }

    #[test]
    fn truncate_to_nothing_is_not_an_error() {
        let op = Operation::Truncate {
            left: "abc".into(),
            divisor: 4,
        };
        assert_eq!(evaluate(&op), Ok(String::new()));
    }

    #[test]
    fn truncate_guards_zero() {
        let op = Operation::Truncate {
            left: "abc".into(),
            divisor: 0,
        };
        assert_eq!(evaluate(&op), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn long_results_are_formatted_once() {
        let op = Operation::Repeat {
            left: "abcdefghij".into(),
            times: 10,
        };
        assert_eq!(compute(&op).unwrap().len(), 100);
        assert_eq!(
            evaluate(&op),
            Ok(format!("{}...", "abcdefghij".repeat(4)))
        );
    }

    #[test]
    fn trace_records_only_in_detailed_mode() {
        let op = Operation::Repeat {
            left: "abcdefghij".into(),
            times: 5,
        };

        let mut quiet = EvaluationTrace::new(false);
        evaluate_traced(&op, &mut quiet).unwrap();
        assert!(quiet.steps.is_empty());

        let mut detailed = EvaluationTrace::new(true);
        evaluate_traced(&op, &mut detailed).unwrap();
        let names: Vec<_> = detailed.steps.iter().map(|s| s.operation.as_str()).collect();
        assert_eq!(names, ["repeat", "format"]);
        assert_eq!(detailed.steps[0].result.len(), 50);
    }
}
