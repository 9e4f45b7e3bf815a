//! Fixed limits and protocol strings.

/// Longest quoted operand, in characters.
pub const MAX_OPERAND_LEN: usize = 10;

/// Inclusive range accepted for the numeric operand of `*` and `/`.
pub const MIN_NUMBER: usize = 1;
pub const MAX_NUMBER: usize = 10;

/// Results longer than this many characters are cut for display.
pub const DISPLAY_BUDGET: usize = 40;
pub const OVERFLOW_MARKER: &str = "...";

pub const BANNER_TITLE: &str = "String Calculator";
pub const BANNER_SEPARATOR: &str = "---------------------";
pub const PROMPT: &str = "-> ";
pub const EXIT_COMMAND: &str = "exit";

pub const RESULT_LABEL: &str = "Результат:";
pub const ERROR_LABEL: &str = "Ошибка:";

/// Prefix that asks the interactive front-ends for a step-by-step trace.
pub const DETAILS_PREFIX: &str = "details ";
