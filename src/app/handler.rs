use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::component::Step;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt::Write;
use std::time::{Duration, Instant};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    let timeout = Duration::from_secs(state.config.ui.status_timeout_secs);
    state.expire_status(Instant::now(), timeout);

    let now = chrono::Local::now();
    let mut clock = String::new();
    // A bad format string surfaces as a fmt error rather than a panic
    if write!(clock, "{}", now.format(&state.config.ui.clock_format)).is_err() {
        clock = now.format("%H:%M").to_string();
    }
    if clock != state.clock {
        state.clock = clock;
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        // Windows reports releases too
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(..) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Detail overlay captures all input when visible
    if state.detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            state.detail = None;
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
            return vec![];
        }
        KeyCode::F(5) => return vec![Action::ReloadConfig],
        KeyCode::Char('w') => return vec![Action::WriteConfig],
        KeyCode::Char('1') | KeyCode::F(1) => {
            state.set_view(View::Counters);
            return vec![];
        }
        KeyCode::Char('2') | KeyCode::F(2) => {
            state.set_view(View::Profiles);
            return vec![];
        }
        KeyCode::Char('3') | KeyCode::F(3) => {
            state.set_view(View::Notes);
            return vec![];
        }
        KeyCode::Char(']') => {
            state.set_view(state.view.next());
            return vec![];
        }
        KeyCode::Char('[') => {
            state.set_view(state.view.prev());
            return vec![];
        }
        KeyCode::Tab => {
            state.move_focus(1);
            return vec![];
        }
        KeyCode::BackTab => {
            state.move_focus(-1);
            return vec![];
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_focus(-1);
            return vec![];
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_focus(1);
            return vec![];
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_focus_up();
            return vec![];
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_focus_down();
            return vec![];
        }
        _ => {}
    }

    match state.view {
        View::Counters => handle_counter_key(state, key),
        View::Profiles => handle_profile_key(state, key),
        View::Notes => vec![],
    }
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let bell = state.config.behavior.bell_on_limit;
    let Some(counter) = state.focused_counter_mut() else {
        return vec![];
    };
    let title = counter.config().title.clone();

    let (step, bound) = match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => (counter.increment(), "maximum"),
        KeyCode::Char('-') | KeyCode::Char('_') => (counter.decrement(), "minimum"),
        KeyCode::Char('r') | KeyCode::Char('0') => {
            counter.reset();
            let value = counter.value();
            tracing::debug!(counter = %title, value, "reset");
            state.set_status(StatusKind::Info, format!("{} reset to {}", title, value));
            return vec![];
        }
        _ => return vec![],
    };
    let value = counter.value();

    match step {
        Step::Moved => {
            tracing::debug!(counter = %title, value, "step");
            vec![]
        }
        Step::Clamped => {
            tracing::debug!(counter = %title, value, "step clamped");
            state.set_status(
                StatusKind::Info,
                format!("{} clamped to its {} {}", title, bound, value),
            );
            vec![]
        }
        Step::Blocked => {
            state.set_status(
                StatusKind::Warning,
                format!("{} is already at its {} ({})", title, bound, value),
            );
            if bell {
                vec![Action::Bell]
            } else {
                vec![]
            }
        }
    }
}

fn handle_profile_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter {
        if let Some(idx) = state.focus() {
            state.detail = Some(idx);
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn focus_counter(state: &mut AppState, title: &str) {
        let idx = state
            .counters
            .iter()
            .position(|c| c.config().title == title)
            .unwrap();
        state.counter_focus = idx;
    }

    #[test]
    fn test_keys_drive_focused_counter() {
        let mut state = AppState::new(AppConfig::default());
        focus_counter(&mut state, "Percent Counter");
        for _ in 0..5 {
            press(&mut state, KeyCode::Char('+'));
        }
        assert_eq!(state.counters[2].value(), 100);
        // other counters untouched
        assert_eq!(state.counters[0].value(), 0);

        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.counters[2].value(), 100);
        assert_eq!(state.status.as_ref().unwrap().kind, StatusKind::Warning);

        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.counters[2].value(), 50);
    }

    #[test]
    fn test_thermometer_stops_at_min() {
        let mut state = AppState::new(AppConfig::default());
        focus_counter(&mut state, "Thermometer");
        for _ in 0..16 {
            press(&mut state, KeyCode::Char('-'));
        }
        assert_eq!(state.counters[3].value(), -10);
    }

    #[test]
    fn test_blocked_step_rings_bell_when_enabled() {
        let mut cfg = AppConfig::default();
        cfg.behavior.bell_on_limit = true;
        let mut state = AppState::new(cfg);
        focus_counter(&mut state, "Fine Tuning");
        for _ in 0..20 {
            assert!(press(&mut state, KeyCode::Char('+')).is_empty());
        }
        assert_eq!(press(&mut state, KeyCode::Char('+')), vec![Action::Bell]);
    }

    #[test]
    fn test_counter_keys_ignored_outside_counter_view() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.view, View::Profiles);
        press(&mut state, KeyCode::Char('+'));
        assert!(state.counters.iter().all(|c| c.delta() == 0));
    }

    #[test]
    fn test_profile_detail_opens_and_closes() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.detail, Some(1));
        // overlay swallows navigation
        press(&mut state, KeyCode::Right);
        assert_eq!(state.profile_focus, 1);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.detail, None);
    }

    #[test]
    fn test_global_actions() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(press(&mut state, KeyCode::F(5)), vec![Action::ReloadConfig]);
        assert_eq!(press(&mut state, KeyCode::Char('w')), vec![Action::WriteConfig]);
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_view_switching() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char(']'));
        assert_eq!(state.view, View::Profiles);
        press(&mut state, KeyCode::Char('['));
        press(&mut state, KeyCode::Char('['));
        assert_eq!(state.view, View::Notes);
        press(&mut state, KeyCode::F(1));
        assert_eq!(state.view, View::Counters);
    }

    #[test]
    fn test_tick_sets_clock() {
        let mut state = AppState::new(AppConfig::default());
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.clock.is_empty());
        assert!(state.dirty);
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut state = AppState::new(AppConfig::default());
        state.dirty = false;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(80, 24)));
        assert!(state.dirty);
    }

    #[test]
    fn test_down_key_scrolls_to_next_row() {
        let mut state = AppState::new(AppConfig::default());
        state.set_grid_rows(1);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.focus(), Some(3));
        assert_eq!(state.scroll_row(), 1);
        press(&mut state, KeyCode::Char('k'));
        assert_eq!(state.scroll_row(), 0);
    }
}
