//! Tracing setup and state snapshots for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,store=debug` - scoped filtering
//! - `RUST_LOG=statement_grid::csv=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/statement-grid/logs/statement-grid.log`
//! with daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::TableStore;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); `quiet` raises the
/// default to `error`. File logging always runs at debug level.
pub fn init(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
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

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of store state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub selected_rows: usize,
    pub selected_columns: usize,
    pub history_index: usize,
    pub history_len: usize,
    pub sort: Option<(usize, &'static str)>,
}

impl StoreSnapshot {
    pub fn from_store(store: &TableStore) -> Self {
        Self {
            rows: store.row_count(),
            columns: store.column_count(),
            selected_rows: store.selected_rows().len(),
            selected_columns: store.selected_columns().len(),
            history_index: store.history().index(),
            history_len: store.history().len(),
            sort: store
                .sort_config()
                .map(|s| (s.column, s.direction.as_str())),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StoreSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.rows, self.columns) != (other.rows, other.columns) {
            changes.push(format!(
                "shape: {}x{} → {}x{}",
                self.rows, self.columns, other.rows, other.columns
            ));
        }
        if (self.selected_rows, self.selected_columns)
            != (other.selected_rows, other.selected_columns)
        {
            changes.push(format!(
                "selection: {}r/{}c → {}r/{}c",
                self.selected_rows,
                self.selected_columns,
                other.selected_rows,
                other.selected_columns
            ));
        }
        if (self.history_index, self.history_len) != (other.history_index, other.history_len) {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.history_index, self.history_len, other.history_index, other.history_len
            ));
        }
        if self.sort != other.sort {
            changes.push(format!("sort: {:?} → {:?}", self.sort, other.sort));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
