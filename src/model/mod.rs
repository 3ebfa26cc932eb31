//! Application model - the complete state of the grid
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod history;
pub mod selection;
pub mod sort;
pub mod store;

pub use history::{History, HistoryAction, HistoryEntry};
pub use selection::{Selection, SelectionSet};
pub use sort::{SortConfig, SortDirection};
pub use store::TableStore;

use std::path::PathBuf;

use crate::config::GridConfig;
use crate::csv::{column_widths, GridWindow, ProcessedTable, Viewport, Warning};
use crate::notify::NotificationBus;

/// A successfully ingested statement
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    /// Display name (file name without directories)
    pub file_name: String,
    pub file_size: u64,
    /// Header row as it appeared in the file
    pub original_headers: Vec<String>,
    /// Notices produced while processing, in order
    pub warnings: Vec<Warning>,
    pub store: TableStore,
}

impl LoadedFile {
    pub fn new(
        path: PathBuf,
        file_name: String,
        file_size: u64,
        processed: ProcessedTable,
        max_history: usize,
    ) -> Self {
        Self {
            path,
            file_name,
            file_size,
            original_headers: processed.original_headers,
            warnings: processed.warnings,
            store: TableStore::with_total_column(
                processed.table,
                Some(processed.total_column),
                max_history,
            ),
        }
    }
}

/// Loading state and request bookkeeping
#[derive(Debug, Default)]
pub struct UiState {
    /// A file read is in flight
    pub is_loading: bool,
    /// Request id of the read whose result will be accepted
    pub pending_load: Option<u64>,
    next_request: u64,
    /// Last export destination, if any
    pub last_export: Option<PathBuf>,
    pub should_quit: bool,
}

impl UiState {
    /// Allocate an id for a new read; older reads become stale
    pub fn begin_load(&mut self) -> u64 {
        self.next_request += 1;
        self.pending_load = Some(self.next_request);
        self.is_loading = true;
        self.next_request
    }

    /// Accept a finished read if it is the pending one
    pub fn finish_load(&mut self, request: u64) -> bool {
        if self.pending_load != Some(request) {
            return false;
        }
        self.pending_load = None;
        self.is_loading = false;
        true
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub config: GridConfig,
    /// Currently loaded statement; `None` before the first successful load
    pub document: Option<LoadedFile>,
    pub ui: UiState,
    pub viewport: Viewport,
    pub notifications: NotificationBus,
}

impl AppModel {
    pub fn new(config: GridConfig, width: f32, height: f32) -> Self {
        Self {
            config,
            document: None,
            ui: UiState::default(),
            viewport: Viewport::new(width, height),
            notifications: NotificationBus::new(),
        }
    }

    pub fn store(&self) -> Option<&TableStore> {
        self.document.as_ref().map(|d| &d.store)
    }

    pub fn store_mut(&mut self) -> Option<&mut TableStore> {
        self.document.as_mut().map(|d| &mut d.store)
    }

    /// Per-column widths for the current container
    pub fn column_widths(&self) -> Vec<f32> {
        let columns = self.store().map(|s| s.column_count()).unwrap_or(0);
        column_widths(&self.config.metrics, self.viewport.container_width, columns)
    }

    /// Rows and columns to render at the current scroll position
    pub fn render_window(&self) -> GridWindow {
        let rows = self.store().map(|s| s.row_count()).unwrap_or(0);
        self.viewport
            .window(&self.config.metrics, rows, &self.column_widths())
    }

    /// Keep scroll offsets inside the content after a shape or size change
    pub fn clamp_viewport(&mut self) {
        let rows = self.store().map(|s| s.row_count()).unwrap_or(0);
        let widths = self.column_widths();
        self.viewport
            .clamp_scroll(&self.config.metrics, rows, &widths);
    }
}
