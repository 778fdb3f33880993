//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer, and which keys the search box takes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kaomoji_tui::app::{is_search_input, reduce, Action, AppState, Effect, Screen};
use libkaomoji::{CategoryFilter, Theme};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

fn open_first(state: AppState) -> AppState {
    let entry = state.grid_entries()[0].clone();
    reduce(state, Action::SelectEntry(entry))
}

#[test]
fn test_ctrl_c_and_ctrl_q_quit() {
    for c in ['c', 'q'] {
        let key = key_event(KeyCode::Char(c), KeyModifiers::CONTROL);
        let state = reduce(AppState::new(), Action::Key(key));
        assert!(state.should_quit);
    }
}

#[test]
fn test_plain_q_does_not_quit() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(!state.should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_hides_help_before_anything_else() {
    let state = open_first(AppState::new());
    let state = press(state, KeyCode::F(1));

    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
    assert_eq!(state.screen(), Screen::Detail);
}

#[test]
fn test_help_overlay_swallows_grid_keys() {
    let state = press(AppState::new(), KeyCode::F(1));
    let state = press(state, KeyCode::Enter);
    assert!(state.effects.is_empty());
}

#[test]
fn test_f2_toggles_theme() {
    let state = AppState::new();
    assert_eq!(state.theme, Theme::Dark);

    let state = press(state, KeyCode::F(2));
    assert_eq!(state.theme, Theme::Light);

    let state = press(state, KeyCode::F(2));
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn test_tab_cycles_categories() {
    let state = press(AppState::new(), KeyCode::Tab);
    assert_eq!(state.view.selected_category.name(), "Joy");

    let state = press(state, KeyCode::BackTab);
    assert_eq!(state.view.selected_category, CategoryFilter::All);
}

#[test]
fn test_tab_from_detail_returns_to_listing() {
    let state = open_first(AppState::new());
    let state = press(state, KeyCode::Tab);
    assert_eq!(state.screen(), Screen::Listing);
}

#[test]
fn test_enter_copies_highlighted_card() {
    let state = press(AppState::new(), KeyCode::Right);
    let state = press(state, KeyCode::Enter);

    assert_eq!(state.effects.len(), 1);
    let Effect::Copy(target) = &state.effects[0];
    assert_eq!(target.index, 1);
}

#[test]
fn test_c_copies_in_detail_only() {
    let state = press(AppState::new(), KeyCode::Char('c'));
    assert!(state.effects.is_empty());

    let state = open_first(state);
    let state = press(state, KeyCode::Char('c'));
    assert_eq!(state.effects.len(), 1);
}

#[test]
fn test_esc_clears_search_on_listing() {
    let state = reduce(AppState::new(), Action::SearchChanged("cat".to_string()));
    let state = press(state, KeyCode::Esc);
    assert_eq!(state.view.search_query, "");
}

#[test]
fn test_search_box_takes_typing_on_listing() {
    let state = AppState::new();
    let typed = key_event(KeyCode::Char('a'), KeyModifiers::NONE);
    let shifted = key_event(KeyCode::Char('A'), KeyModifiers::SHIFT);
    let erase = key_event(KeyCode::Backspace, KeyModifiers::NONE);

    assert!(is_search_input(&state, &typed));
    assert!(is_search_input(&state, &shifted));
    assert!(is_search_input(&state, &erase));
}

#[test]
fn test_search_box_skips_commands() {
    let state = AppState::new();
    for key in [
        key_event(KeyCode::Char('c'), KeyModifiers::CONTROL),
        key_event(KeyCode::Tab, KeyModifiers::NONE),
        key_event(KeyCode::Enter, KeyModifiers::NONE),
        key_event(KeyCode::Up, KeyModifiers::NONE),
        key_event(KeyCode::F(1), KeyModifiers::NONE),
        key_event(KeyCode::Esc, KeyModifiers::NONE),
    ] {
        assert!(!is_search_input(&state, &key), "{:?}", key);
    }
}

#[test]
fn test_search_box_inactive_in_detail_and_help() {
    let typed = key_event(KeyCode::Char('x'), KeyModifiers::NONE);

    let detail = open_first(AppState::new());
    assert!(!is_search_input(&detail, &typed));

    let help = reduce(AppState::new(), Action::ShowHelp);
    assert!(!is_search_input(&help, &typed));
}
