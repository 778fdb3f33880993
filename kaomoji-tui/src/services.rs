//! Clipboard service for the TUI
//!
//! Bridges the async clipboard bridge to the synchronous event loop:
//! copies run on an owned tokio runtime and their outcomes come back over
//! a crossbeam channel that the main loop drains each iteration.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kaomoji_tui::services::ClipboardService;
//! use libkaomoji::SystemClipboard;
//!
//! # fn example() -> kaomoji_tui::error::Result<()> {
//! let service = ClipboardService::new(Arc::new(SystemClipboard::new()))?;
//! // service.copy(target);
//! for done in service.completions() {
//!     println!("{} -> {:?}", done.target.entry.symbol, done.outcome);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libkaomoji::{copy_text, Clipboard, CopyOutcome};

use crate::app::CopyTarget;
use crate::error::{Result, TuiError};

/// A finished clipboard write
#[derive(Debug, Clone)]
pub struct CopyCompleted {
    pub target: CopyTarget,
    pub outcome: CopyOutcome,
}

/// Runs clipboard writes off the UI thread
pub struct ClipboardService {
    clipboard: Arc<dyn Clipboard>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<CopyCompleted>,
    rx: Receiver<CopyCompleted>,
}

impl ClipboardService {
    /// Create a service with its own runtime
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| TuiError::Runtime(e.to_string()))?;

        let (tx, rx) = unbounded();
        tracing::debug!(clipboard = clipboard.name(), "Clipboard service started");

        Ok(Self {
            clipboard,
            runtime,
            tx,
            rx,
        })
    }

    /// Start writing the target's symbol; the outcome arrives via `completions`
    pub fn copy(&self, target: CopyTarget) {
        let clipboard = Arc::clone(&self.clipboard);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = copy_text(clipboard.as_ref(), &target.entry.symbol).await;
            if tx.send(CopyCompleted { target, outcome }).is_err() {
                tracing::debug!("Copy finished after the UI shut down");
            }
        });
    }

    /// Drain finished copies without blocking
    pub fn completions(&self) -> Vec<CopyCompleted> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next finished copy
    pub fn wait_completion(&self, timeout: Duration) -> Option<CopyCompleted> {
        self.rx.recv_timeout(timeout).ok()
    }
}
