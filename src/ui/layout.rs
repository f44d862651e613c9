use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub help: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_help: bool) -> AppLayout {
    // Main vertical split: header | body | help | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Title, subtitle, tabs
            Constraint::Min(5),                             // Cards
            Constraint::Length(if show_help { 1 } else { 0 }), // Key help
            Constraint::Length(1),                          // Status bar
        ])
        .split(area);

    AppLayout {
        header: main_chunks[0],
        body: main_chunks[1],
        help: show_help.then_some(main_chunks[2]),
        status_bar: main_chunks[3],
    }
}

/// Split `area` into `count` cells laid out `columns` wide.
///
/// Rows share the height evenly but never shrink below `min_height`; rows
/// that no longer fit are dropped, so fewer than `count` cells may come back.
pub fn grid_cells(area: Rect, count: usize, columns: usize, min_height: u16) -> Vec<Rect> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let columns = columns.clamp(1, count);
    let rows = count.div_ceil(columns);
    let row_height = (area.height / u16::try_from(rows).unwrap_or(u16::MAX)).max(min_height);

    let mut cells = Vec::with_capacity(count);
    for row in 0..rows {
        let y = area.y.saturating_add((row as u16).saturating_mul(row_height));
        if y.saturating_add(row_height) > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, row_height);
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);
        let in_row = (count - row * columns).min(columns);
        cells.extend(col_areas.iter().take(in_row).copied());
    }
    cells
}

/// Number of `card_height` rows that fit in `height`, at least one.
pub fn rows_that_fit(height: u16, card_height: u16) -> usize {
    usize::from(height / card_height.max(1)).max(1)
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
