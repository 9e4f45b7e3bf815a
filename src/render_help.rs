use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::{DISPLAY_BUDGET, MAX_NUMBER, MAX_OPERAND_LEN, MIN_NUMBER};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, scroll: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" String Calculator Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "String Calculator - arithmetic on quoted text",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Operations:"),
        Line::from("  + : Concatenate   (e.g., \"hello\" + \"world\" = helloworld)"),
        Line::from("  - : Remove        (e.g., \"hello\" - \"l\" = heo)"),
        Line::from("  * : Repeat        (e.g., \"ab\" * 3 = ababab)"),
        Line::from("  / : Keep len / n  (e.g., \"hello\" / 2 = he)"),
        Line::from(""),
        heading("Rules:"),
        Line::from(format!(
            "  Quoted operands hold 1 to {} characters without '\"'",
            MAX_OPERAND_LEN
        )),
        Line::from(format!("  Numbers for * and / range from {} to {}", MIN_NUMBER, MAX_NUMBER)),
        Line::from("  Separate tokens with a single space"),
        Line::from(format!(
            "  Results longer than {} characters end with ...",
            DISPLAY_BUDGET
        )),
        Line::from(""),
        heading("Commands:"),
        Line::from("  details <expression> : Show step-by-step evaluation with time"),
        Line::from("  clear : Clear calculation history"),
        Line::from("  help : Show this help screen"),
        Line::from("  exit, quit : Leave the calculator"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Navigate calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Mouse wheel : Scroll through history"),
        Line::from("  Esc : Close this help"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
