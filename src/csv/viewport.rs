//! Viewport windowing for the grid
//!
//! Given scroll offsets and the container size, decides which rows and
//! columns must be rendered. Rows have a fixed height; columns share one
//! computed width. A buffer of extra rows/columns past the visible edge
//! avoids blank flashes during fast scrolling.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Fixed pixel metrics of the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridMetrics {
    pub row_height: f32,
    pub header_height: f32,
    /// Width of the row-number gutter left of the first column
    pub gutter_width: f32,
    pub min_column_width: f32,
    /// Cap on computed column widths, also the stride for column buffering
    pub default_column_width: f32,
    pub scrollbar_width: f32,
    pub buffer_rows: usize,
    pub buffer_cols: usize,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            row_height: 35.0,
            header_height: 40.0,
            gutter_width: 50.0,
            min_column_width: 80.0,
            default_column_width: 150.0,
            scrollbar_width: 20.0,
            buffer_rows: 5,
            buffer_cols: 3,
        }
    }
}

impl GridMetrics {
    /// Same metrics without any buffering
    pub fn unbuffered(self) -> Self {
        Self {
            buffer_rows: 0,
            buffer_cols: 0,
            ..self
        }
    }
}

/// Compute per-column widths for a container
///
/// The space left after the gutter and scrollbar is split evenly, never
/// narrower than `min_column_width` and never wider than
/// `default_column_width`.
pub fn column_widths(metrics: &GridMetrics, container_width: f32, column_count: usize) -> Vec<f32> {
    if column_count == 0 {
        return Vec::new();
    }
    let available = container_width - metrics.gutter_width - metrics.scrollbar_width;
    let base = (available / column_count as f32).max(metrics.min_column_width);
    vec![base.min(metrics.default_column_width); column_count]
}

/// Visible region of the grid in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_top: f32,
    pub scroll_left: f32,
    pub container_width: f32,
    pub container_height: f32,
}

/// Half-open index ranges to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridWindow {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl GridWindow {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

impl Viewport {
    pub fn new(container_width: f32, container_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_left: 0.0,
            container_width,
            container_height,
        }
    }

    /// Height available for data rows (below the sticky header)
    pub fn body_height(&self, metrics: &GridMetrics) -> f32 {
        (self.container_height - metrics.header_height).max(0.0)
    }

    fn first_row(&self, metrics: &GridMetrics, total_rows: usize) -> usize {
        let top = self.scroll_top.max(0.0);
        ((top / metrics.row_height).floor() as usize).min(total_rows)
    }

    /// Rows whose extent intersects the visible body, without buffering
    pub fn visible_rows(&self, metrics: &GridMetrics, total_rows: usize) -> Range<usize> {
        let start = self.first_row(metrics, total_rows);
        let body = self.body_height(metrics);
        if body <= 0.0 || metrics.row_height <= 0.0 {
            return start..start;
        }
        let bottom = self.scroll_top.max(0.0) + body;
        let end = ((bottom / metrics.row_height).ceil() as usize).min(total_rows);
        start..end.max(start)
    }

    /// Rows to render, including the buffer below the visible edge
    pub fn render_rows(&self, metrics: &GridMetrics, total_rows: usize) -> Range<usize> {
        let visible = self.visible_rows(metrics, total_rows);
        if metrics.row_height <= 0.0 {
            return visible;
        }
        let per_page = (self.body_height(metrics) / metrics.row_height).ceil() as usize;
        let end = (visible.start + per_page + metrics.buffer_rows)
            .min(total_rows)
            .max(visible.end);
        visible.start..end
    }

    /// Columns whose extent intersects the viewport, without buffering
    ///
    /// Column positions start after the gutter; `scroll_left` is measured in
    /// the same coordinate space.
    pub fn visible_cols(&self, metrics: &GridMetrics, widths: &[f32]) -> Range<usize> {
        let left = self.scroll_left.max(0.0);
        let right = left + self.container_width.max(0.0);

        let mut x = metrics.gutter_width;
        let mut start = widths.len();
        let mut end = widths.len();
        for (i, width) in widths.iter().enumerate() {
            let edge = x + width;
            if start == widths.len() && edge > left {
                start = i;
            }
            if x >= right {
                end = i;
                break;
            }
            x = edge;
        }

        if self.container_width <= 0.0 {
            return start..start;
        }
        start..end.max(start)
    }

    /// Columns to render, including the buffer right of the visible edge
    pub fn render_cols(&self, metrics: &GridMetrics, widths: &[f32]) -> Range<usize> {
        let visible = self.visible_cols(metrics, widths);
        if metrics.default_column_width <= 0.0 {
            return visible;
        }
        let per_page =
            (self.container_width.max(0.0) / metrics.default_column_width).ceil() as usize;
        let end = (visible.start + per_page + metrics.buffer_cols)
            .min(widths.len())
            .max(visible.end);
        visible.start..end
    }

    /// Full render window for a table
    pub fn window(&self, metrics: &GridMetrics, total_rows: usize, widths: &[f32]) -> GridWindow {
        GridWindow {
            rows: self.render_rows(metrics, total_rows),
            cols: self.render_cols(metrics, widths),
        }
    }

    /// Clamp scroll offsets so the viewport never starts past the content
    pub fn clamp_scroll(&mut self, metrics: &GridMetrics, total_rows: usize, widths: &[f32]) {
        let content_height = total_rows as f32 * metrics.row_height;
        let max_top = (content_height - self.body_height(metrics)).max(0.0);
        let content_width = metrics.gutter_width + widths.iter().sum::<f32>();
        let max_left = (content_width - self.container_width).max(0.0);

        self.scroll_top = self.scroll_top.clamp(0.0, max_top);
        self.scroll_left = self.scroll_left.clamp(0.0, max_left);
    }
}
