//! Copy-then-open flow through the reducer
//!
//! Drives copy effects by hand with explicit instants so timer behavior
//! is deterministic.

use std::sync::Arc;
use std::time::{Duration, Instant};

use kaomoji_tui::app::{reduce, Action, AppState, CopyTarget, Effect, Screen, Surface};
use kaomoji_tui::services::ClipboardService;
use libkaomoji::error::ClipboardError;
use libkaomoji::{CopyOutcome, MemoryClipboard};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Run the queued copy effect with a fixed outcome
fn finish_copy(state: AppState, outcome: CopyOutcome, at: Instant) -> (AppState, CopyTarget) {
    let mut state = state;
    let mut effects = state.take_effects();
    assert_eq!(effects.len(), 1, "expected exactly one copy effect");
    let Effect::Copy(target) = effects.remove(0);
    let state = reduce(
        state,
        Action::CopyFinished {
            target: target.clone(),
            outcome,
            at,
        },
    );
    (state, target)
}

#[test]
fn test_card_copy_confirms_then_opens() {
    let t0 = Instant::now();
    let state = reduce(AppState::new(), Action::ActivateCard);
    let (state, target) = finish_copy(state, CopyOutcome::Copied, t0);

    assert!(state.copies.is_copied(&target));
    assert_eq!(state.screen(), Screen::Listing);

    let state = reduce(state, Action::Tick(t0 + ms(499)));
    assert_eq!(state.screen(), Screen::Listing);

    let state = reduce(state, Action::Tick(t0 + ms(500)));
    assert_eq!(state.view.open_entry(), Some(&target.entry));
    assert!(!state.copies.is_copied(&target));
    assert_eq!(state.copies.pending_timers(), 0);
}

#[test]
fn test_card_copy_failure_opens_immediately() {
    let state = reduce(AppState::new(), Action::ActivateCard);
    let (state, target) = finish_copy(
        state,
        CopyOutcome::Failed("clipboard unavailable".to_string()),
        Instant::now(),
    );

    assert_eq!(state.view.open_entry(), Some(&target.entry));
    assert!(state.status.message.is_none());
}

#[test]
fn test_detail_copy_resets_after_delay() {
    let t0 = Instant::now();
    let state = AppState::new();
    let entry = state.grid_entries()[0].clone();
    let state = reduce(state, Action::SelectEntry(entry));

    let state = reduce(state, Action::CopyOpenEntry);
    let (state, _) = finish_copy(state, CopyOutcome::Copied, t0);
    assert!(state.is_detail_copied());

    let state = reduce(state, Action::Tick(t0 + ms(1999)));
    assert!(state.is_detail_copied());

    let state = reduce(state, Action::Tick(t0 + ms(2000)));
    assert!(!state.is_detail_copied());
    assert_eq!(state.screen(), Screen::Detail);
}

#[test]
fn test_detail_recopy_restarts_reset() {
    let t0 = Instant::now();
    let state = AppState::new();
    let entry = state.grid_entries()[0].clone();
    let state = reduce(state, Action::SelectEntry(entry));

    let state = reduce(state, Action::CopyOpenEntry);
    let (state, _) = finish_copy(state, CopyOutcome::Copied, t0);

    let state = reduce(state, Action::CopyOpenEntry);
    let (state, _) = finish_copy(state, CopyOutcome::Copied, t0 + ms(1500));

    let state = reduce(state, Action::Tick(t0 + ms(2000)));
    assert!(state.is_detail_copied());

    let state = reduce(state, Action::Tick(t0 + ms(3500)));
    assert!(!state.is_detail_copied());
}

#[test]
fn test_detail_copy_failure_is_silent() {
    let state = AppState::new();
    let entry = state.grid_entries()[0].clone();
    let state = reduce(state, Action::SelectEntry(entry.clone()));

    let state = reduce(state, Action::CopyOpenEntry);
    let (state, _) = finish_copy(state, CopyOutcome::Failed("denied".to_string()), Instant::now());

    assert!(!state.is_detail_copied());
    assert_eq!(state.view.open_entry(), Some(&entry));
    assert!(state.status.message.is_none());
}

#[test]
fn test_leaving_listing_cancels_pending_navigation() {
    let t0 = Instant::now();
    let state = reduce(AppState::new(), Action::ActivateCard);
    let (state, _) = finish_copy(state, CopyOutcome::Copied, t0);

    let state = reduce(state, Action::NextCategory);
    assert_eq!(state.copies.pending_timers(), 0);

    let state = reduce(state, Action::Tick(t0 + ms(600)));
    assert_eq!(state.screen(), Screen::Listing);
}

#[test]
fn test_related_card_copy_hops_to_entry() {
    let t0 = Instant::now();
    let state = AppState::new();
    let entry = state.grid_entries()[0].clone();
    let state = reduce(state, Action::SelectEntry(entry.clone()));

    let state = reduce(state, Action::MoveCursor(kaomoji_tui::app::Direction::Right));
    let state = reduce(state, Action::ActivateCard);
    let (state, target) = finish_copy(state, CopyOutcome::Copied, t0);
    assert_eq!(target.surface, Surface::Related);
    assert_ne!(target.entry, entry);

    let state = reduce(state, Action::Tick(t0 + ms(500)));
    assert_eq!(state.view.open_entry(), Some(&target.entry));
    assert_eq!(state.grid_entries()[state.cursor.related], &target.entry);
}

#[test]
fn test_clipboard_service_round_trip() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let service = ClipboardService::new(clipboard.clone()).unwrap();

    let mut state = reduce(AppState::new(), Action::ActivateCard);
    for effect in state.take_effects() {
        let Effect::Copy(target) = effect;
        service.copy(target);
    }

    let done = service.wait_completion(Duration::from_secs(5)).unwrap();
    let expected = done.target.entry.symbol.clone();
    let state = reduce(
        state,
        Action::CopyFinished {
            target: done.target.clone(),
            outcome: done.outcome,
            at: Instant::now(),
        },
    );

    assert_eq!(clipboard.contents(), Some(expected));
    assert!(state.copies.is_copied(&done.target));
}

#[test]
fn test_clipboard_service_failure_still_opens_card() {
    let clipboard = Arc::new(MemoryClipboard::failing(ClipboardError::Unavailable(
        "headless".to_string(),
    )));
    let service = ClipboardService::new(clipboard).unwrap();

    let mut state = reduce(AppState::new(), Action::ActivateCard);
    for effect in state.take_effects() {
        let Effect::Copy(target) = effect;
        service.copy(target);
    }

    let done = service.wait_completion(Duration::from_secs(5)).unwrap();
    let entry = done.target.entry.clone();
    let state = reduce(
        state,
        Action::CopyFinished {
            target: done.target,
            outcome: done.outcome,
            at: Instant::now(),
        },
    );

    assert_eq!(state.view.open_entry(), Some(&entry));
}
