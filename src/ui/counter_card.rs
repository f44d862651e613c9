use crate::component::BoundedCounter;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows a counter card needs to show everything, borders included.
pub const CARD_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, counter: &BoundedCounter, focused: bool) {
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(card_lines(counter, inner.width)).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn card_lines(counter: &BoundedCounter, width: u16) -> Vec<Line<'static>> {
    let cfg = counter.config();
    let value = counter.value();
    let mut lines = Vec::with_capacity(10);

    lines.push(Line::from(Span::styled(
        format!("🧮 {}", cfg.title),
        Theme::title(),
    )));
    lines.push(Line::from(Span::styled(
        format!("step: {} | start: {}", cfg.step, cfg.initial_value),
        Theme::muted(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        value.to_string(),
        Theme::value(counter.tone()),
    )));

    let mut bounds: Vec<Span> = Vec::new();
    if let Some(min) = cfg.min {
        bounds.push(Span::styled(format!("min: {}", min), Theme::muted()));
    }
    if let Some(max) = cfg.max {
        if !bounds.is_empty() {
            bounds.push(Span::raw("  "));
        }
        bounds.push(Span::styled(format!("max: {}", max), Theme::muted()));
    }
    lines.push(Line::from(bounds));
    lines.push(Line::default());

    let dec_style = if counter.can_decrement() {
        Theme::button_decrement()
    } else {
        Theme::button_disabled()
    };
    let inc_style = if counter.can_increment() {
        Theme::button_increment()
    } else {
        Theme::button_disabled()
    };
    lines.push(Line::from(vec![
        Span::styled(" - ", dec_style),
        Span::raw("  "),
        Span::styled(" reset ", Theme::button_neutral()),
        Span::raw("  "),
        Span::styled(" + ", inc_style),
    ]));

    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(width)),
        Style::default().fg(Theme::BORDER_DIM),
    )));
    lines.push(Line::from(Span::styled(
        format!("current: {}", value),
        Theme::secondary(),
    )));
    if let Some(delta) = counter.delta_label() {
        lines.push(Line::from(Span::styled(
            format!("from start: {}", delta),
            Theme::secondary(),
        )));
    }
    lines
}
