use crate::component::{Avatar, ProfileCard};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const CARD_HEIGHT: u16 = 11;

const AVATAR_WIDTH: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, card: &ProfileCard, focused: bool) {
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

    let paragraph = Paragraph::new(card_lines(card, inner.width, focused));
    frame.render_widget(paragraph, inner);
}

/// Avatar glyph padded to a fixed cell width; wide initials take two cells.
/// Image avatars get an ASCII marker so every terminal agrees on its width.
pub fn avatar_label(avatar: &Avatar) -> String {
    let glyph = match avatar {
        Avatar::Image(_) => "[img]",
        Avatar::Initial(initial) => initial.as_str(),
    };
    let width = glyph.width();
    let left = AVATAR_WIDTH.saturating_sub(width) / 2;
    let right = AVATAR_WIDTH.saturating_sub(width + left);
    format!("{}{}{}", " ".repeat(left), glyph, " ".repeat(right))
}

fn card_lines(card: &ProfileCard, width: u16, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(9);

    lines.push(Line::from(vec![
        Span::styled(avatar_label(&card.avatar), Theme::avatar()),
        Span::raw("  "),
        Span::styled(card.name.clone(), Theme::title()),
    ]));

    // Online dot sits under the avatar's corner
    let dot = if card.is_online {
        Span::styled(format!("{:>width$}", "●", width = AVATAR_WIDTH), Style::default().fg(Theme::ACCENT_GREEN))
    } else {
        Span::raw(" ".repeat(AVATAR_WIDTH))
    };
    lines.push(Line::from(vec![
        dot,
        Span::raw("  "),
        Span::styled(card.role.clone(), Theme::muted()),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(card.email.clone(), Theme::secondary())));
    lines.push(Line::from(vec![
        Span::styled("Hello! Welcome, ", Theme::secondary()),
        Span::styled(
            card.name.clone(),
            Style::default()
                .fg(Theme::ACCENT_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(".", Theme::secondary()),
    ]));
    lines.push(Line::default());

    let badge_style = if card.is_online {
        Theme::badge_online()
    } else {
        Theme::badge_offline()
    };
    lines.push(Line::from(Span::styled(
        format!(" {} ", card.status_label()),
        badge_style,
    )));

    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(width)),
        Style::default().fg(Theme::BORDER_DIM),
    )));

    let button_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    } else {
        Theme::button_neutral()
    };
    lines.push(
        Line::from(Span::styled(" View profile ⏎ ", button_style)).centered(),
    );
    lines
}
