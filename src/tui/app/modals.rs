//! Modal overlays: help, text prompts and blocking notices.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::{current_theme, Theme};
use crate::tui::ui::centered_rect;

/// Key bindings listed in the help overlay.
const HELP_KEYS: &[(&str, &str)] = &[
    ("g", "Generate a new random array"),
    ("Enter / r", "Run all three sorts"),
    ("s", "Stop the running sorts"),
    ("+ / -", "Longer / shorter step delay"),
    ("n", "Set the array size"),
    ("a", "Enter an array by hand"),
    ("?", "This help"),
    ("q / Esc", "Quit"),
];

pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = centered_rect(52, HELP_KEYS.len() as u16 + 6, area);
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(HELP_KEYS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_style()),
            Span::raw(*desc),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}

/// Single-line text prompt with a trailing cursor.
pub fn render_prompt_modal(frame: &mut Frame, area: Rect, title: &str, hint: &str, input: &str) {
    let theme = current_theme();
    let modal_area = centered_rect(60, 6, area);
    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(Span::styled(hint.to_string(), theme.text_secondary_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme.accent_style()),
            Span::styled(format!("{}_", input), theme.text_style()),
        ]),
    ];
    let prompt = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(format!(" {} ", title)),
    );
    frame.render_widget(prompt, modal_area);
}

/// Blocking message, dismissed with Enter or Esc.
pub fn render_notice_modal(frame: &mut Frame, area: Rect, message: &str) {
    let theme = current_theme();
    let modal_area = centered_rect(56, 7, area);
    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(Span::styled(message.to_string(), theme.text_style())),
        Line::from(""),
        Line::from(Span::styled("Enter/Esc: dismiss", theme.text_secondary_style())),
    ];
    let notice = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_style())
                .title(" Notice "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, modal_area);
}
