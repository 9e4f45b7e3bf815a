use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wraps `text` to `width` display columns, breaking at graphemes.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for g in text.graphemes(true) {
        let w = g.width();
        if current_width + w > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }
        current_line.push_str(g);
        current_width += w;
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Shows a result so that an empty string is still visible.
pub fn format_result(result: &str) -> String {
    format!("\"{}\"", result)
}

/// Colours quoted operands, operators and numbers of an expression line.
pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let string_style = Style::default().fg(Color::LightGreen);

    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_string = false;

    for c in expr.chars() {
        if in_string {
            current.push(c);
            if c == '"' {
                spans.push(Span::styled(std::mem::take(&mut current), string_style));
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                current.push(c);
            }
            '+' | '-' | '*' | '/' => {
                spans.push(Span::styled(c.to_string(), operator_style));
            }
            '0'..='9' => {
                spans.push(Span::styled(c.to_string(), number_style));
            }
            ' ' => spans.push(Span::raw(" ")),
            _ => spans.push(Span::styled(c.to_string(), base_style)),
        }
    }

    // unterminated quote
    if !current.is_empty() {
        spans.push(Span::styled(current, base_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_by_display_width() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("", 4), vec![""]);
        assert_eq!(wrap_text("界界界", 4), vec!["界界", "界"]);
    }

    #[test]
    fn quoted_operands_stay_in_one_span() {
        let spans = highlight_expression("\"a * b\" * 3", Style::default());
        let texts: Vec<_> = spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(texts, ["\"a * b\"", " ", "*", " ", "3"]);
    }
}
