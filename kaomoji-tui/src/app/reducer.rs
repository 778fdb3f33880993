//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer never touches the clipboard or
//! the terminal; it queues `Effect`s on the state for the main loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libkaomoji::{CategoryFilter, CopyFollowUp, CopyVariant};

use super::actions::{Action, Direction, Effect, Screen};
use super::state::{AppState, StatusBarState};
use crate::ui::grid::columns_for_width;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// Deterministic: time only enters through `Tick` and `CopyFinished`.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),

        Action::Tick(now) => {
            let mut state = state;
            let navigations = state.copies.tick(now);
            for target in navigations {
                if target.generation == state.generation {
                    state = reduce(state, Action::SelectEntry(target.entry));
                }
            }
            state
        }

        Action::Resize(width, _) => AppState {
            grid_columns: columns_for_width(width),
            ..state
        },

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::ToggleTheme => {
            let theme = state.theme.toggled();
            AppState {
                theme,
                status: StatusBarState {
                    message: Some(format!("Theme: {}", theme)),
                },
                ..state
            }
        }

        // === Browsing ===
        Action::SearchChanged(query) => {
            if query == state.view.search_query {
                return state;
            }
            let mut state = state;
            state.view.set_search_query(query);
            state.cursor.listing = 0;
            remount(state)
        }

        Action::ChangeCategory(category) => {
            let mut state = state;
            state.view.change_category(category);
            state.cursor.listing = 0;
            remount(state)
        }

        Action::NextCategory => {
            let category = step_category(&state, 1);
            reduce(state, Action::ChangeCategory(category))
        }

        Action::PreviousCategory => {
            let category = step_category(&state, -1);
            reduce(state, Action::ChangeCategory(category))
        }

        Action::MoveCursor(direction) => move_cursor(state, direction),

        Action::ActivateCard => {
            let Some(target) = state.highlighted_target() else {
                return state;
            };
            let mut state = state;
            if state.copies.request(target.clone(), CopyVariant::Card) {
                state.effects.push(Effect::Copy(target));
            }
            state
        }

        Action::CopyOpenEntry => {
            let Some(target) = state.detail_target() else {
                return state;
            };
            let mut state = state;
            if state.copies.request(target.clone(), CopyVariant::Detail) {
                state.effects.push(Effect::Copy(target));
            }
            state
        }

        Action::SelectEntry(entry) => {
            let mut state = state;
            state.cursor.related = state
                .dataset
                .category_of(&entry)
                .and_then(|category| category.entries.iter().position(|e| e == &entry))
                .unwrap_or(0);
            state.view.select_entry(entry);
            remount(state)
        }

        Action::Back => {
            if state.view.is_listing() {
                return state;
            }
            let mut state = state;
            state.view.back();
            let visible = state.view.visible_entries(&state.dataset).len();
            state.cursor.listing = state.cursor.listing.min(visible.saturating_sub(1));
            remount(state)
        }

        Action::CopyFinished {
            target,
            outcome,
            at,
        } => {
            if target.generation != state.generation {
                tracing::debug!(
                    symbol = %target.entry.symbol,
                    "Dropping copy result for a closed view"
                );
                return state;
            }
            let mut state = state;
            let variant = target.variant();
            let entry = target.entry.clone();
            match state.copies.complete(target, variant, &outcome, at) {
                CopyFollowUp::NavigateNow => reduce(state, Action::SelectEntry(entry)),
                CopyFollowUp::None => state,
            }
        }

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState::default(),
            ..state
        },
    }
}

/// Replace the mounted views; copy controls of the old generation die here
fn remount(state: AppState) -> AppState {
    let mut state = state;
    state.generation += 1;
    let generation = state.generation;
    state.copies.retain(|target| target.generation == generation);
    state.status = StatusBarState::default();
    state
}

fn step_category(state: &AppState, step: isize) -> CategoryFilter {
    let names = state.dataset.category_names();
    let current = names
        .iter()
        .position(|name| *name == state.view.selected_category.name())
        .unwrap_or(0) as isize;
    let len = names.len() as isize;
    let next = (current + step).rem_euclid(len.max(1)) as usize;
    names
        .get(next)
        .map(|name| CategoryFilter::from(*name))
        .unwrap_or_default()
}

fn move_cursor(state: AppState, direction: Direction) -> AppState {
    let len = state.grid_entries().len();
    if len == 0 {
        return state;
    }
    let columns = state.grid_columns.max(1);
    let current = state.grid_cursor().min(len - 1);
    let next = match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(len - 1),
        Direction::Up if current >= columns => current - columns,
        Direction::Down if current + columns < len => current + columns,
        Direction::Up | Direction::Down => current,
    };

    let mut state = state;
    match state.screen() {
        Screen::Listing => state.cursor.listing = next,
        Screen::Detail => state.cursor.related = next,
    }
    state
}

/// Keys the search box consumes instead of the reducer
pub fn is_search_input(state: &AppState, key: &KeyEvent) -> bool {
    if state.screen() != Screen::Listing || state.help_visible {
        return false;
    }
    let modified = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(_) => !modified,
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Home | KeyCode::End => true,
        _ => false,
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::F(2), _) => {
            return reduce(state, Action::ToggleTheme);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.help_visible {
        return state;
    }

    // Grid keybindings (both screens)
    match key.code {
        KeyCode::Tab => return reduce(state, Action::NextCategory),
        KeyCode::BackTab => return reduce(state, Action::PreviousCategory),
        KeyCode::Left => return reduce(state, Action::MoveCursor(Direction::Left)),
        KeyCode::Right => return reduce(state, Action::MoveCursor(Direction::Right)),
        KeyCode::Up => return reduce(state, Action::MoveCursor(Direction::Up)),
        KeyCode::Down => return reduce(state, Action::MoveCursor(Direction::Down)),
        KeyCode::Enter => return reduce(state, Action::ActivateCard),
        _ => {}
    }

    // Screen-specific keybindings
    match state.screen() {
        Screen::Listing => handle_listing_key(state, key),
        Screen::Detail => handle_detail_key(state, key),
    }
}

fn handle_listing_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc if !state.view.search_query.is_empty() => {
            reduce(state, Action::SearchChanged(String::new()))
        }
        _ => state,
    }
}

fn handle_detail_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Backspace, _) => reduce(state, Action::Back),
        (KeyCode::Char('c'), KeyModifiers::NONE) => reduce(state, Action::CopyOpenEntry),
        _ => state,
    }
}
