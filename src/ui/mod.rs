mod counter_card;
mod header;
mod layout;
mod notes;
mod profile_card;
mod profile_detail;
mod status_bar;
mod theme;

use crate::app::state::{first_visible_row, AppState, View};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::panel_bg()), area);

    let app_layout = layout::compute_layout(area, state.show_help);

    header::render(frame, app_layout.header, state);
    match state.view {
        View::Counters => render_counters(frame, app_layout.body, state),
        View::Profiles => render_profiles(frame, app_layout.body, state),
        View::Notes => notes::render(frame, app_layout.body, &state.config.notes),
    }
    if let Some(help) = app_layout.help {
        status_bar::render_help(frame, help);
    }
    status_bar::render(frame, app_layout.status_bar, state);

    profile_detail::render(frame, state);
}

fn render_counters(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.counters.is_empty() {
        render_empty(frame, area, "No counters configured");
        return;
    }
    let focus = state.focus();
    render_grid(frame, area, state, counter_card::CARD_HEIGHT, |frame, cell, i| {
        counter_card::render(frame, cell, &state.counters[i], focus == Some(i));
    });
}

fn render_profiles(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.profiles.is_empty() {
        render_empty(frame, area, "No profiles configured");
        return;
    }
    let focus = state.focus();
    render_grid(frame, area, state, profile_card::CARD_HEIGHT, |frame, cell, i| {
        profile_card::render(frame, cell, &state.profiles[i], focus == Some(i));
    });
}

/// Lay out the cards of the current view from its scroll row down, keeping
/// the focused card on screen, with a scrollbar when rows are hidden.
fn render_grid(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    card_height: u16,
    mut draw_card: impl FnMut(&mut Frame, Rect, usize),
) {
    let count = state.card_count();
    let columns = state.columns().min(count);
    let total_rows = state.total_rows();
    let visible = layout::rows_that_fit(area.height, card_height);
    let first = first_visible_row(
        state.scroll_row(),
        state.focus_row().unwrap_or(0),
        visible,
        total_rows,
    );
    let start = first * columns;
    let end = ((first + visible) * columns).min(count);

    let overflow = total_rows > visible;
    let grid_area = if overflow {
        Rect { width: area.width.saturating_sub(1), ..area }
    } else {
        area
    };

    // Ask for whole rows so a short last row keeps the column width
    let slots = (end - start).div_ceil(columns) * columns;
    let cells = layout::grid_cells(grid_area, slots, columns, card_height);
    for (i, cell) in (start..end).zip(cells) {
        draw_card(frame, cell, i);
    }

    // Scrollbar
    if overflow {
        let scrollbar_area = Rect::new(
            area.x + area.width.saturating_sub(1),
            area.y,
            1,
            area.height,
        );
        let mut scrollbar_state =
            ScrollbarState::new(total_rows.saturating_sub(visible)).position(first);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

/// Record how many grid rows the current view can show in `area`.
pub fn sync_viewport(state: &mut AppState, area: Rect) {
    let body = layout::compute_layout(area, state.show_help).body;
    let card_height = match state.view {
        View::Profiles => profile_card::CARD_HEIGHT,
        View::Counters | View::Notes => counter_card::CARD_HEIGHT,
    };
    state.set_grid_rows(layout::rows_that_fit(body.height, card_height));
}

fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    let paragraph = Paragraph::new(Span::styled(text, Theme::muted())).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
