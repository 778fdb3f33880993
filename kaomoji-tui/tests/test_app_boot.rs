//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults
//! based on config and environment variables.

use kaomoji_tui::app::{AppState, Screen};
use libkaomoji::{Config, Dataset, Theme};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_app_initializes_to_listing() {
    let state = AppState::new();

    assert_eq!(state.screen(), Screen::Listing);
    assert!(!state.should_quit);
    assert!(!state.help_visible);
}

#[test]
fn test_listing_starts_with_everything() {
    let state = AppState::new();

    assert_eq!(state.view.search_query, "");
    assert_eq!(state.view.selected_category.name(), "All");
    assert_eq!(state.grid_entries().len(), state.dataset.total_entries());
    assert_eq!(state.cursor.listing, 0);
}

#[test]
fn test_dark_theme_by_default() {
    assert_eq!(AppState::new().theme, Theme::Dark);
}

#[test]
fn test_no_copies_on_boot() {
    let state = AppState::new();
    assert!(state.effects.is_empty());
    assert_eq!(state.copies.pending_timers(), 0);
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_kaomoji_no_color_env() {
    std::env::set_var("KAOMOJI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("KAOMOJI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("KAOMOJI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("KAOMOJI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_invalid_tick_rate_falls_back_to_config() {
    std::env::set_var("KAOMOJI_TICK_MS", "fast");
    let state = AppState::new();
    std::env::remove_var("KAOMOJI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 100);
}

#[test]
#[serial]
fn test_boot_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[copy]
reset_delay = "1s"
navigate_delay = "250ms"

[ui]
tick_rate_ms = 40
default_category = "Animals"
"#
    )
    .unwrap();

    let config = Config::load_from_path(file.path()).unwrap();
    let state = AppState::from_config(&config, Dataset::builtin(), Theme::Light).unwrap();

    assert_eq!(state.view.selected_category.name(), "Animals");
    assert_eq!(state.config.tick_rate_ms, 40);
    assert_eq!(state.theme, Theme::Light);
    assert!(state
        .grid_entries()
        .iter()
        .all(|entry| state.dataset.category_of(entry).map(|c| c.name.as_str()) == Some("Animals")));
}
