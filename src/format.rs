use crate::config::{DISPLAY_BUDGET, OVERFLOW_MARKER};

/// Cuts a result to the display budget, marking the cut with `...`.
pub fn format(result: &str) -> String {
    match result.char_indices().nth(DISPLAY_BUDGET) {
        Some((end, _)) => format!("{}{}", &result[..end], OVERFLOW_MARKER),
        None => result.to_string(),
    }
}
