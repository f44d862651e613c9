use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.view.title().to_uppercase()),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let text_style = match state.status.as_ref().map(|m| m.kind) {
        Some(StatusKind::Warning) => Theme::status_warning(),
        Some(StatusKind::Error) => Theme::status_error(),
        Some(StatusKind::Info) | None => Theme::status_bar(),
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), text_style));

    let position = match state.focus() {
        Some(idx) => format!(" {}/{} ", idx + 1, state.card_count()),
        None => String::new(),
    };
    let right = format!("{} {} ? help ", position, state.clock);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        right,
        Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// One-line key reference shown under the cards.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let keys = [
        ("1-3", "view"),
        ("←↑↓→/Tab", "focus"),
        ("+/-", "step"),
        ("r", "reset"),
        ("⏎", "profile"),
        ("w", "write config"),
        ("F5", "reload"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, what) in keys {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{}  ", what), Theme::muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
