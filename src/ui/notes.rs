use crate::config::NoteSection;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, notes: &[NoteSection]) {
    let block = Block::default()
        .title(" 🎓 Concepts covered ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if notes.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(" -", Theme::muted())),
            inner,
        );
        return;
    }

    let tallest = notes.iter().map(|n| n.items.len()).max().unwrap_or(0) as u16;
    let cells = layout::grid_cells(inner, notes.len(), 2, tallest + 2);
    for (section, cell) in notes.iter().zip(cells) {
        let mut lines = vec![Line::from(Span::styled(
            section.heading.clone(),
            Theme::title(),
        ))];
        lines.extend(section.items.iter().map(|item| {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(item.clone(), Theme::secondary()),
            ])
        }));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, cell.inner(Margin::new(1, 0)));
    }
}
