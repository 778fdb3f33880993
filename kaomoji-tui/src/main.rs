//! kaomoji-tui - Terminal UI for Kaomoji Finder
//!
//! Browse the kaomoji catalog by category, search symbols and tags, and
//! copy entries to the system clipboard.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use kaomoji_tui::{
    app::{event::EventHandler, event::TuiEvent, is_search_input, reduce, Action, AppState, Effect},
    error::Result,
    services::ClipboardService,
    terminal::{install_panic_hook, TerminalSession, Tui},
    ui,
};
use libkaomoji::logging::{self, LogTarget};
use libkaomoji::{theme, Config, SystemClipboard, Theme};
use tui_textarea::{CursorMove, TextArea};

fn main() -> anyhow::Result<()> {
    // The terminal belongs to the UI; logs go to a file
    init_logging();

    let config = Config::load_or_default().context("Failed to load configuration")?;
    let dataset = config.load_dataset().context("Failed to load kaomoji catalog")?;
    let issues = dataset.lint().len();

    let theme_path = theme::theme_path()?;
    let theme = theme::load_theme(&theme_path).unwrap_or_else(|e| {
        tracing::warn!("Could not read theme preference: {}", e);
        Theme::default()
    });

    let mut state = AppState::from_config(&config, dataset, theme)?;
    if issues > 0 {
        state = reduce(
            state,
            Action::SetStatus(format!("Catalog has {} issue(s); see the log file", issues)),
        );
    }

    let clipboard = ClipboardService::new(Arc::new(SystemClipboard::new()))?;

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let result = run_app(session.terminal_mut(), state, &clipboard);
    session.restore()?;

    let state = result?;
    if let Err(e) = theme::save_theme(&theme_path, state.theme) {
        tracing::warn!("Could not save theme preference: {}", e);
    }

    Ok(())
}

fn init_logging() {
    let path = match logging::tui_log_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            return;
        }
    };
    if let Err(e) = logging::config_from_env()
        .with_target(LogTarget::File(path))
        .init()
    {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn run_app(terminal: &mut Tui, state: AppState, clipboard: &ClipboardService) -> Result<AppState> {
    let mut state = state;
    let mut search = TextArea::default();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    let size = terminal.size()?;
    state = reduce(state, Action::Resize(size.width, size.height));

    tracing::info!(
        entries = state.dataset.total_entries(),
        theme = %state.theme,
        "Kaomoji browser started"
    );

    loop {
        ui::style_search_box(&mut search, &state);
        terminal.draw(|frame| {
            ui::render(frame, &state, &search);
        })?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) if is_search_input(&state, &key) => {
                search.input(key);
                Action::SearchChanged(search.lines().join(""))
            }
            other => other.into(),
        };
        state = reduce(state, action);

        // Apply finished clipboard writes
        for done in clipboard.completions() {
            state = reduce(
                state,
                Action::CopyFinished {
                    target: done.target,
                    outcome: done.outcome,
                    at: Instant::now(),
                },
            );
        }

        for effect in state.take_effects() {
            match effect {
                Effect::Copy(target) => clipboard.copy(target),
            }
        }

        // Sync search box if the reducer changed the query (Esc clears it)
        if search.lines().join("") != state.view.search_query {
            search = TextArea::new(vec![state.view.search_query.clone()]);
            search.move_cursor(CursorMove::End);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(state)
}
