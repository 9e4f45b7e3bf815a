use crate::calc_engine::{calculate_traced, split_details};
use crate::config::{BANNER_SEPARATOR, BANNER_TITLE, ERROR_LABEL, EXIT_COMMAND, PROMPT, RESULT_LABEL};
use crate::evaluator::EvaluationTrace;
use anyhow::Result;
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

// Позиция курсора хранится в графемах, строка в байтах
fn grapheme_index_to_byte_index(s: &str, index: usize) -> usize {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or_else(|| s.len())
}

#[derive(Default)]
struct LineEditor {
    expression: String,
    cursor_pos: usize,
}

impl LineEditor {
    fn len(&self) -> usize {
        self.expression.graphemes(true).count()
    }

    fn set(&mut self, expression: &str) {
        self.expression = expression.to_string();
        self.cursor_pos = self.len();
    }

    fn clear(&mut self) {
        self.expression.clear();
        self.cursor_pos = 0;
    }

    fn insert(&mut self, c: char) {
        let byte_idx = grapheme_index_to_byte_index(&self.expression, self.cursor_pos);
        let before = self.len();
        self.expression.insert(byte_idx, c);
        // a combining mark joins the previous grapheme instead of adding one
        if self.len() > before {
            self.cursor_pos += 1;
        }
    }

    fn remove_at_cursor(&mut self) {
        let start = grapheme_index_to_byte_index(&self.expression, self.cursor_pos);
        let end = grapheme_index_to_byte_index(&self.expression, self.cursor_pos + 1);
        self.expression.drain(start..end);
    }

    fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            self.remove_at_cursor();
        }
    }

    fn delete(&mut self) {
        if self.cursor_pos < self.len() {
            self.remove_at_cursor();
        }
    }

    fn left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    fn right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.len());
    }

    /// Display columns taken by the text before the cursor.
    fn cursor_column(&self) -> usize {
        let byte_idx = grapheme_index_to_byte_index(&self.expression, self.cursor_pos);
        self.expression[..byte_idx].width()
    }
}

pub fn run_line() -> Result<()> {
    println!("{}", BANNER_TITLE);
    println!("{}", BANNER_SEPARATOR);
    println!("Operations: \"a\" + \"b\", \"a\" - \"b\", \"a\" * n, \"a\" / n (n from 1 to 10)");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'exit' to quit, 'clear' to reset history");
    println!("Add 'details' before an expression for step-by-step evaluation\n");

    let mut stdout = stdout().into_raw_mode()?;
    let stdin = stdin();
    let mut keys = stdin.keys();
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    loop {
        write!(stdout, "{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut editor = LineEditor::default();
        let (_, initial_y) = stdout.cursor_pos()?;

        loop {
            write!(stdout, "{}{}{}{}", Goto(1, initial_y), ClearLine, PROMPT, editor.expression)?;
            let column = 1 + PROMPT.width() + editor.cursor_column();
            write!(stdout, "{}", Goto(column as u16, initial_y))?;
            stdout.flush()?;

            let key = match keys.next() {
                Some(key) => key?,
                None => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
            };

            match key {
                Key::Char('\n') => break,
                Key::Ctrl('d') if editor.expression.is_empty() => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Ctrl('u') => editor.clear(),
                Key::Char(c) => editor.insert(c),
                Key::Backspace => editor.backspace(),
                Key::Delete => editor.delete(),
                Key::Left => editor.left(),
                Key::Right => editor.right(),
                Key::Home => editor.cursor_pos = 0,
                Key::End => editor.cursor_pos = editor.len(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        editor.set(&history[history_index]);
                    }
                }
                Key::Down => {
                    if history_index + 1 < history.len() {
                        history_index += 1;
                        editor.set(&history[history_index]);
                    } else {
                        history_index = history.len();
                        editor.clear();
                    }
                }
                _ => {}
            }
        }

        let input = editor.expression.trim();
        if input.is_empty() {
            write!(stdout, "\r\n")?;
            continue;
        }

        match input {
            "quit" | EXIT_COMMAND => {
                write!(stdout, "\r\n")?;
                return Ok(());
            }
            "clear" => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n")?;
                continue;
            }
            _ => {}
        }

        history.push(input.to_string());
        history_index = history.len();

        let (detailed_mode, processed_input) = split_details(input);
        let mut trace = EvaluationTrace::new(detailed_mode);
        debug!(input = processed_input, detailed_mode, "line mode request");

        match calculate_traced(processed_input, &mut trace) {
            Ok(result) => {
                write!(stdout, "\r\n{} {}\r\n", RESULT_LABEL, result)?;
                if detailed_mode {
                    for (i, step) in trace.steps.iter().enumerate() {
                        write!(stdout, "  Step {}: {} = {}\r\n", i + 1, step.operation, step.result)?;
                    }
                }
            }
            Err(e) => write!(stdout, "\r\n{} {}\r\n", ERROR_LABEL, e)?,
        }
    }
}
