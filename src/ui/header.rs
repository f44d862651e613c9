use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg_style = Style::default().bg(Theme::BG_ELEVATED);

    let title = Line::from(Span::styled(
        state.config.ui.title.as_str(),
        Theme::title().bg(Theme::BG_ELEVATED),
    ))
    .centered();

    let subtitle = Line::from(Span::styled(
        state.config.ui.subtitle.as_str(),
        Theme::secondary()
            .bg(Theme::BG_ELEVATED)
            .add_modifier(Modifier::ITALIC),
    ))
    .centered();

    let mut tabs: Vec<Span> = Vec::new();
    for (i, view) in View::ALL.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM)));
        }
        let label = format!("{} {}", i + 1, view.title());
        let style = if *view == state.view {
            Theme::tab_active()
        } else {
            Theme::muted()
        };
        tabs.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(vec![title, subtitle, Line::from(tabs).centered()])
        .style(bg_style);
    frame.render_widget(paragraph, area);
}
