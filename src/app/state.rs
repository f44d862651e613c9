use crate::component::{BoundedCounter, ProfileCard};
use crate::config::AppConfig;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Counters,
    Profiles,
    Notes,
}

impl View {
    pub const ALL: [View; 3] = [View::Counters, View::Profiles, View::Notes];

    pub fn title(self) -> &'static str {
        match self {
            View::Counters => "Counters",
            View::Profiles => "Profiles",
            View::Notes => "Notes",
        }
    }

    pub fn index(self) -> usize {
        match self {
            View::Counters => 0,
            View::Profiles => 1,
            View::Notes => 2,
        }
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub set_at: Instant,
}

/// First row of a `visible`-row window that keeps `focus_row` on screen,
/// moving as little as possible from `scroll`.
pub fn first_visible_row(scroll: usize, focus_row: usize, visible: usize, total: usize) -> usize {
    let visible = visible.max(1);
    let first = if focus_row < scroll {
        focus_row
    } else if focus_row >= scroll + visible {
        focus_row + 1 - visible
    } else {
        scroll
    };
    first.min(total.saturating_sub(visible))
}

pub struct AppState {
    pub config: AppConfig,
    pub counters: Vec<BoundedCounter>,
    pub profiles: Vec<ProfileCard>,
    pub view: View,
    pub counter_focus: usize,
    pub profile_focus: usize,
    /// First grid row drawn in each view.
    pub counter_scroll: usize,
    pub profile_scroll: usize,
    /// Grid rows that fit on screen, refreshed before every draw.
    pub grid_rows: usize,
    /// Index of the profile whose detail overlay is open.
    pub detail: Option<usize>,
    pub show_help: bool,
    pub should_quit: bool,
    pub dirty: bool,
    pub status: Option<StatusMessage>,
    pub clock: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut state = Self {
            config: AppConfig::default(),
            counters: Vec::new(),
            profiles: Vec::new(),
            view: View::Counters,
            counter_focus: 0,
            profile_focus: 0,
            counter_scroll: 0,
            profile_scroll: 0,
            grid_rows: 1,
            detail: None,
            show_help: false,
            should_quit: false,
            dirty: true,
            status: None,
            clock: String::new(),
        };
        state.apply_config(config);
        state
    }

    /// Rebuild every component from `config`. Counter values start over.
    pub fn apply_config(&mut self, config: AppConfig) {
        self.counters = config
            .counters
            .iter()
            .cloned()
            .map(BoundedCounter::new)
            .collect();
        self.profiles = config.profiles.iter().map(ProfileCard::new).collect();
        self.config = config;
        self.counter_focus = 0;
        self.profile_focus = 0;
        self.counter_scroll = 0;
        self.profile_scroll = 0;
        self.detail = None;
        self.dirty = true;
    }

    pub fn columns(&self) -> usize {
        usize::from(self.config.ui.columns.max(1))
    }

    pub fn card_count(&self) -> usize {
        match self.view {
            View::Counters => self.counters.len(),
            View::Profiles => self.profiles.len(),
            View::Notes => 0,
        }
    }

    pub fn focus(&self) -> Option<usize> {
        let idx = match self.view {
            View::Counters => self.counter_focus,
            View::Profiles => self.profile_focus,
            View::Notes => return None,
        };
        (idx < self.card_count()).then_some(idx)
    }

    fn set_focus(&mut self, idx: usize) {
        match self.view {
            View::Counters => self.counter_focus = idx,
            View::Profiles => self.profile_focus = idx,
            View::Notes => {}
        }
        self.scroll_to_focus();
        self.dirty = true;
    }

    pub fn focus_row(&self) -> Option<usize> {
        self.focus().map(|idx| idx / self.columns())
    }

    pub fn total_rows(&self) -> usize {
        self.card_count().div_ceil(self.columns())
    }

    pub fn scroll_row(&self) -> usize {
        match self.view {
            View::Counters => self.counter_scroll,
            View::Profiles => self.profile_scroll,
            View::Notes => 0,
        }
    }

    pub fn set_grid_rows(&mut self, rows: usize) {
        self.grid_rows = rows.max(1);
        self.scroll_to_focus();
    }

    /// Shift the current view's scroll row so the focused card is drawn.
    fn scroll_to_focus(&mut self) {
        let Some(row) = self.focus_row() else { return };
        let first = first_visible_row(self.scroll_row(), row, self.grid_rows, self.total_rows());
        match self.view {
            View::Counters => self.counter_scroll = first,
            View::Profiles => self.profile_scroll = first,
            View::Notes => {}
        }
    }

    pub fn focused_counter_mut(&mut self) -> Option<&mut BoundedCounter> {
        if self.view != View::Counters {
            return None;
        }
        self.counters.get_mut(self.counter_focus)
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.detail = None;
        self.dirty = true;
    }

    /// Move focus by `delta` cards in reading order, wrapping at both ends.
    pub fn move_focus(&mut self, delta: isize) {
        let count = self.card_count();
        let Some(idx) = self.focus() else { return };
        let next = (idx as isize + delta).rem_euclid(count as isize) as usize;
        self.set_focus(next);
    }

    /// Move focus one grid row down, wrapping to the top of the column.
    pub fn move_focus_down(&mut self) {
        let (count, cols) = (self.card_count(), self.columns());
        let Some(idx) = self.focus() else { return };
        let next = if idx + cols < count { idx + cols } else { idx % cols };
        self.set_focus(next);
    }

    /// Move focus one grid row up, wrapping to the bottom of the column.
    pub fn move_focus_up(&mut self) {
        let (count, cols) = (self.card_count(), self.columns());
        let Some(idx) = self.focus() else { return };
        let next = if idx >= cols {
            idx - cols
        } else {
            let mut last = idx;
            while last + cols < count {
                last += cols;
            }
            last
        };
        self.set_focus(next);
    }

    pub fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusMessage {
            text,
            kind,
            set_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the status message once it is older than `timeout`.
    pub fn expire_status(&mut self, now: Instant, timeout: Duration) {
        if let Some(ref msg) = self.status {
            if now.duration_since(msg.set_at) >= timeout {
                self.status = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status {
            return msg.text.clone();
        }
        match self.view {
            View::Counters => {
                let changed = self
                    .counters
                    .iter()
                    .filter(|c| c.delta() != 0)
                    .count();
                format!("Counters: {} | Changed: {}", self.counters.len(), changed)
            }
            View::Profiles => {
                let online = self.profiles.iter().filter(|p| p.is_online).count();
                format!("Profiles: {} | Online: {}", self.profiles.len(), online)
            }
            View::Notes => format!("Sections: {}", self.config.notes.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::CounterConfig;

    fn state_with_counters(n: usize, columns: u16) -> AppState {
        let mut cfg = AppConfig::default();
        cfg.counters = (0..n).map(|i| CounterConfig::new(format!("c{}", i))).collect();
        cfg.ui.columns = columns;
        AppState::new(cfg)
    }

    #[test]
    fn test_new_builds_components() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.counters.len(), 6);
        assert_eq!(state.profiles.len(), 3);
        assert_eq!(state.counters[2].value(), 50);
        assert_eq!(state.focus(), Some(0));
    }

    #[test]
    fn test_move_focus_wraps() {
        let mut state = state_with_counters(5, 3);
        state.move_focus(-1);
        assert_eq!(state.focus(), Some(4));
        state.move_focus(1);
        assert_eq!(state.focus(), Some(0));
        state.move_focus(7);
        assert_eq!(state.focus(), Some(2));
    }

    #[test]
    fn test_row_movement_handles_partial_last_row() {
        // 0 1 2
        // 3 4
        let mut state = state_with_counters(5, 3);
        state.move_focus_down();
        assert_eq!(state.focus(), Some(3));
        state.move_focus_down();
        assert_eq!(state.focus(), Some(0));
        state.move_focus_up();
        assert_eq!(state.focus(), Some(3));

        state.counter_focus = 2;
        state.move_focus_down();
        assert_eq!(state.focus(), Some(2));
        state.move_focus_up();
        assert_eq!(state.focus(), Some(2));
    }

    #[test]
    fn test_focus_is_per_view() {
        let mut state = AppState::new(AppConfig::default());
        state.move_focus(2);
        state.set_view(View::Profiles);
        assert_eq!(state.focus(), Some(0));
        state.move_focus(1);
        state.set_view(View::Counters);
        assert_eq!(state.focus(), Some(2));
        state.set_view(View::Notes);
        assert_eq!(state.focus(), None);
        assert!(state.focused_counter_mut().is_none());
    }

    #[test]
    fn test_empty_view_has_no_focus() {
        let mut state = state_with_counters(0, 3);
        assert_eq!(state.focus(), None);
        state.move_focus(1);
        state.move_focus_down();
        state.move_focus_up();
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn test_apply_config_discards_values() {
        let mut state = AppState::new(AppConfig::default());
        state.move_focus(2);
        state.focused_counter_mut().unwrap().increment();
        assert_eq!(state.counters[2].value(), 60);
        state.apply_config(AppConfig::default());
        assert_eq!(state.counters[2].value(), 50);
        assert_eq!(state.focus(), Some(0));
    }

    #[test]
    fn test_status_expiry() {
        let mut state = AppState::new(AppConfig::default());
        state.set_status(StatusKind::Info, "hello".into());
        assert_eq!(state.status_line(), "hello");
        let set_at = state.status.as_ref().unwrap().set_at;
        state.expire_status(set_at + Duration::from_secs(1), Duration::from_secs(4));
        assert!(state.status.is_some());
        state.expire_status(set_at + Duration::from_secs(4), Duration::from_secs(4));
        assert!(state.status.is_none());
        assert_eq!(state.status_line(), "Counters: 6 | Changed: 0");
    }

    #[test]
    fn test_first_visible_row() {
        // already visible
        assert_eq!(first_visible_row(0, 0, 1, 2), 0);
        assert_eq!(first_visible_row(2, 3, 2, 6), 2);
        // below the window
        assert_eq!(first_visible_row(0, 1, 1, 2), 1);
        assert_eq!(first_visible_row(0, 5, 2, 6), 4);
        // above the window
        assert_eq!(first_visible_row(4, 1, 2, 6), 1);
        // a window taller than the grid never leaves blank rows
        assert_eq!(first_visible_row(3, 3, 10, 4), 0);
        assert_eq!(first_visible_row(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_focus_moves_scroll_the_grid() {
        // 6 cards, 3 columns, one row on screen
        let mut state = state_with_counters(6, 3);
        state.set_grid_rows(1);
        assert_eq!(state.scroll_row(), 0);
        state.move_focus(3);
        assert_eq!(state.focus(), Some(3));
        assert_eq!(state.scroll_row(), 1);
        state.move_focus(1);
        assert_eq!(state.scroll_row(), 1);
        state.move_focus_up();
        assert_eq!(state.focus(), Some(1));
        assert_eq!(state.scroll_row(), 0);
        // wrapping backwards lands on the last row
        state.counter_focus = 0;
        state.move_focus(-1);
        assert_eq!(state.scroll_row(), 1);
    }

    #[test]
    fn test_scroll_is_per_view_and_reset_by_config() {
        let mut state = state_with_counters(9, 3);
        state.set_grid_rows(2);
        state.move_focus(8);
        assert_eq!(state.scroll_row(), 1);
        state.set_view(View::Profiles);
        assert_eq!(state.scroll_row(), 0);
        state.set_view(View::Counters);
        assert_eq!(state.scroll_row(), 1);

        // a taller screen pulls the window back up
        state.set_grid_rows(3);
        assert_eq!(state.scroll_row(), 0);

        state.set_grid_rows(1);
        assert_eq!(state.scroll_row(), 2);
        state.apply_config(state.config.clone());
        assert_eq!(state.scroll_row(), 0);
    }

    #[test]
    fn test_view_cycle() {
        assert_eq!(View::Counters.next(), View::Profiles);
        assert_eq!(View::Notes.next(), View::Counters);
        assert_eq!(View::Counters.prev(), View::Notes);
    }
}
