//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=linefield::editable=trace` - viewport recomputes and history pushes
//!
//! # Log Files
//!
//! Logs are written to `~/.config/linefield/logs/linefield.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::EditEngine;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "linefield.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of field state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTrace {
    pub len: usize,
    pub cursor: usize,
    pub anchor: usize,
    pub scroll_offset: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl FieldTrace {
    pub fn from_engine(engine: &EditEngine) -> Self {
        Self {
            len: engine.len(),
            cursor: engine.cursor(),
            anchor: engine.anchor(),
            scroll_offset: engine.scroll_offset(),
            undo_depth: engine.history().undo_count(),
            redo_depth: engine.history().redo_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldTrace) -> Option<String> {
        let mut changes = Vec::new();

        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.cursor != other.cursor || self.anchor != other.anchor {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.anchor, self.cursor, other.anchor, other.cursor
            ));
        }
        if self.scroll_offset != other.scroll_offset {
            changes.push(format!(
                "scroll: {} → {}",
                self.scroll_offset, other.scroll_offset
            ));
        }
        if self.undo_depth != other.undo_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_depth, self.redo_depth, other.undo_depth, other.redo_depth
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
