use crate::app::state::AppState;
use crate::component::Avatar;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(card) = state.detail.and_then(|idx| state.profiles.get(idx)) else {
        return;
    };

    let popup_area = layout::centered(frame.area(), 56, 10);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} | Esc to close ", card.name))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let avatar = match &card.avatar {
        Avatar::Image(url) => url.clone(),
        Avatar::Initial(initial) => format!("initial \"{}\"", initial),
    };
    let rows = [
        ("Name", card.name.clone()),
        ("Role", card.role.clone()),
        ("Email", card.email.clone()),
        ("Status", card.status_label().to_string()),
        ("Avatar", avatar),
    ];

    let mut lines = vec![
        Line::from(Span::styled(format!(" {}", card.greeting()), Theme::title())),
        Line::default(),
    ];
    lines.extend(rows.into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!(" {:<8}", label), Theme::muted()),
            Span::styled(value, Style::default().fg(Theme::TEXT_PRIMARY)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
