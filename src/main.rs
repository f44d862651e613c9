mod app;
mod component;
mod config;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let log_guard = logging::init(&cfg.logging)?;
    tracing::info!("tallycard starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        drop(log_guard);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("tallycard stopped");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Log advisory configuration problems and show the first in the status bar.
fn report_config_problems(state: &mut AppState) {
    let problems = state.config.validate();
    for problem in &problems {
        tracing::warn!("{}", problem);
    }
    if let Some(first) = problems.first() {
        let more = match problems.len() {
            1 => String::new(),
            n => format!(" (+{} more, see log)", n - 1),
        };
        state.set_status(StatusKind::Warning, format!("{}{}", first, more));
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    report_config_problems(&mut state);
    tracing::info!(
        counters = state.counters.len(),
        profiles = state.profiles.len(),
        "components built"
    );

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task (4 per second)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| {
        ui::sync_viewport(&mut state, f.area());
        ui::render(f, &state);
    })?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::Quit => {
                    state.should_quit = true;
                }
                Action::ReloadConfig => match config::load_config() {
                    Ok(cfg) => {
                        state.apply_config(cfg);
                        tracing::info!("configuration reloaded");
                        state.set_status(StatusKind::Info, "Configuration reloaded".to_string());
                        report_config_problems(&mut state);
                    }
                    Err(e) => {
                        tracing::error!("reload failed: {:#}", e);
                        state.set_status(StatusKind::Error, format!("Reload failed: {:#}", e));
                    }
                },
                Action::WriteConfig => match config::save_config(&state.config) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "configuration written");
                        state.set_status(
                            StatusKind::Info,
                            format!("Configuration written to {}", path.display()),
                        );
                    }
                    Err(e) => {
                        tracing::error!("write failed: {:#}", e);
                        state.set_status(StatusKind::Error, format!("Write failed: {:#}", e));
                    }
                },
                Action::Bell => {
                    let _ = io::stdout().write_all(b"\x07");
                    let _ = io::stdout().flush();
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| {
                ui::sync_viewport(&mut state, f.area());
                ui::render(f, &state);
            })?;
            state.dirty = false;
        }
    }

    Ok(())
}
