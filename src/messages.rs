//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::csv::IngestError;
use crate::notify::NotificationId;

/// Grid interaction messages
///
/// Row indices are display positions (after the view sort); the update layer
/// maps them to stored rows.
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Row header clicked
    ToggleRow {
        index: usize,
        multi: bool,
        range: bool,
    },
    /// Column header checkbox clicked
    ToggleColumn {
        index: usize,
        multi: bool,
        range: bool,
    },
    SelectAllRows,
    SelectAllColumns,
    ClearSelection,
    /// Column header clicked: sort, or flip direction on the same column
    SortBy(usize),
    ClearSort,
    DeleteSelectedRows,
    DeleteSelectedColumns,
    Undo,
    Redo,
    /// Absolute scroll offsets in pixels
    Scroll { top: f32, left: f32 },
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Validate and start reading a statement file
    LoadFile(PathBuf),
    /// File read completed (async result)
    FileLoaded {
        request: u64,
        path: PathBuf,
        size: u64,
        result: Result<String, IngestError>,
    },
    /// Export the current table; `None` writes `<stem>_processed.csv` next to the source
    Export { path: Option<PathBuf> },
    /// Export write completed (async result)
    ExportCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Drop the current document
    Reset,
    /// Grid container resized
    Resize { width: f32, height: f32 },
    Quit,
}

/// Notification housekeeping
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    DismissNotification(NotificationId),
    /// Periodic tick; expires notifications
    Tick,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Grid(GridMsg),
    App(AppMsg),
    Ui(UiMsg),
}
