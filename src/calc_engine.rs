use crate::config::DETAILS_PREFIX;
use crate::error::Result;
use crate::evaluator::{evaluate, evaluate_traced, EvaluationTrace};
use crate::parser::parse;

/// Splits an optional leading `details` request off an interactive input line.
pub fn split_details(input: &str) -> (bool, &str) {
    let input = input.trim();
    match input.get(..DETAILS_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(DETAILS_PREFIX) => {
            (true, input[DETAILS_PREFIX.len()..].trim())
        }
        _ => (false, input),
    }
}

/// Parses, evaluates and formats one input line.
pub fn calculate(line: &str) -> Result<String> {
    let operation = parse(line)?;
    Ok(evaluate(&operation)?)
}

pub fn calculate_traced(line: &str, trace: &mut EvaluationTrace) -> Result<String> {
    let operation = parse(line)?;
    trace.add_step("parse", operation.to_string());
    Ok(evaluate_traced(&operation, trace)?)
}
