//! Clipboard bridge
//!
//! The platform clipboard may be missing (headless box) or refuse access.
//! It sits behind the async [`Clipboard`] trait, and [`copy_text`] reduces
//! every attempt to a [`CopyOutcome`].
//!
//! # Example
//!
//! ```no_run
//! use libkaomoji::clipboard::{copy_text, CopyOutcome, SystemClipboard};
//!
//! # async fn example() {
//! let clipboard = SystemClipboard::new();
//! match copy_text(&clipboard, "(^_^)").await {
//!     CopyOutcome::Copied => println!("Copied!"),
//!     CopyOutcome::Failed(reason) => eprintln!("copy failed: {}", reason),
//! }
//! # }
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ClipboardError;

/// Result of a copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Something text can be copied to
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Backend name for logs ("system", "memory")
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// `ClipboardError::Unavailable` when no clipboard can be opened,
    /// `ClipboardError::Write` when the platform rejects the write.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text`, logging and folding any failure into the outcome
pub async fn copy_text(clipboard: &dyn Clipboard, text: &str) -> CopyOutcome {
    match clipboard.write_text(text).await {
        Ok(()) => {
            tracing::debug!(
                backend = clipboard.name(),
                chars = text.chars().count(),
                "Copied to clipboard"
            );
            CopyOutcome::Copied
        }
        Err(e) => {
            tracing::warn!(backend = clipboard.name(), error = %e, "Failed to copy to clipboard");
            CopyOutcome::Failed(e.to_string())
        }
    }
}

/// System clipboard using arboard
///
/// The handle is opened lazily and kept for the life of the value: on X11
/// and Wayland the copied text is served by this process, so dropping the
/// handle right after a write would lose it.
///
/// A short-lived process can ask for a hold with [`SystemClipboard::holding`]:
/// on X11 and Wayland each write then blocks until another program takes
/// the selection over (a clipboard manager, or the user pasting a new copy)
/// or the hold runs out. Other platforms keep the text after exit and ignore
/// the hold.
#[derive(Default, Clone)]
pub struct SystemClipboard {
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes keep serving the text for up to `hold`
    pub fn holding(hold: Duration) -> Self {
        Self {
            hold: Some(hold),
            ..Self::default()
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    fn write_blocking(
        inner: &Mutex<Option<arboard::Clipboard>>,
        text: String,
        hold: Option<Duration>,
    ) -> Result<(), ClipboardError> {
        let mut guard = inner
            .lock()
            .map_err(|_| ClipboardError::Task("clipboard lock poisoned".to_string()))?;
        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => {
                set_text(clipboard, text, hold).map_err(|e| ClipboardError::Write(e.to_string()))
            }
            None => Err(ClipboardError::Unavailable("clipboard not initialized".to_string())),
        }
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    match hold {
        Some(hold) => {
            tracing::debug!(hold = ?hold, "Serving clipboard until taken over");
            clipboard
                .set()
                .wait_until(std::time::Instant::now() + hold)
                .text(text)
        }
        None => clipboard.set_text(text),
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        let hold = self.hold;
        tokio::task::spawn_blocking(move || Self::write_blocking(&inner, text, hold))
            .await
            .map_err(|e| ClipboardError::Task(e.to_string()))?
    }
}

/// In-memory clipboard for tests and headless runs
///
/// Records every successful write; can be switched to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `error`
    pub fn failing(error: ClipboardError) -> Self {
        let clipboard = Self::default();
        clipboard.set_failure(Some(error));
        clipboard
    }

    pub fn set_failure(&self, error: Option<ClipboardError>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = error;
        }
    }

    /// Every text written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Most recent successful write
    pub fn contents(&self) -> Option<String> {
        self.writes().last().cloned()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let failure = self
            .failure
            .lock()
            .map_err(|_| ClipboardError::Task("clipboard lock poisoned".to_string()))?
            .clone();
        if let Some(error) = failure {
            return Err(error);
        }
        self.writes
            .lock()
            .map_err(|_| ClipboardError::Task("clipboard lock poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_text_success() {
        let clipboard = MemoryClipboard::new();
        let outcome = copy_text(&clipboard, "(^_^)").await;
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.contents(), Some("(^_^)".to_string()));
    }

    #[tokio::test]
    async fn test_copy_text_failure_is_folded() {
        let clipboard = MemoryClipboard::failing(ClipboardError::Write("denied".to_string()));
        let outcome = copy_text(&clipboard, "(^_^)").await;
        assert_eq!(
            outcome,
            CopyOutcome::Failed("Clipboard write failed: denied".to_string())
        );
        assert!(clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn test_failure_can_be_cleared() {
        let clipboard = MemoryClipboard::failing(ClipboardError::Unavailable("headless".to_string()));
        assert!(!copy_text(&clipboard, "a").await.is_copied());

        clipboard.set_failure(None);
        assert!(copy_text(&clipboard, "b").await.is_copied());
        assert_eq!(clipboard.writes(), vec!["b".to_string()]);
    }

    #[test]
    fn test_system_clipboard_hold() {
        assert_eq!(SystemClipboard::new().hold(), None);
        let clipboard = SystemClipboard::holding(Duration::from_secs(5));
        assert_eq!(clipboard.hold(), Some(Duration::from_secs(5)));
        assert_eq!(clipboard.clone().hold(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_clones_share_history() {
        let clipboard = MemoryClipboard::new();
        let observer = clipboard.clone();
        copy_text(&clipboard, "ʕ •ᴥ•ʔ").await;
        assert_eq!(observer.contents(), Some("ʕ •ᴥ•ʔ".to_string()));
    }
}
