//! Statement CSV ingestion
//!
//! Turns raw bank-statement text into a clean rectangular [`Table`]:
//!
//! ```text
//! text
//! └── tokenize        (RawRow per non-blank line)
//!     └── normalize   (header row at a fixed index, ignored columns dropped)
//!         └── project (sanitized cells, one per header, blank rows dropped)
//!             └── aggregate (optional key sort, Total column appended)
//! ```
//!
//! Also holds the export writer and the viewport windowing used to render
//! the resulting grid.

pub mod aggregate;
mod error;
pub mod export;
mod headers;
mod model;
mod pipeline;
mod rows;
mod sanitize;
mod tokenizer;
pub mod viewport;

pub use aggregate::{group_totals, GroupTotal};
pub use error::{IngestError, Warning};
pub use export::{escape_csv_value, export_csv, processed_file_name};
pub use headers::{normalize_headers, NormalizedHeaders, MAX_HEADER_LEN};
pub use model::{RawRow, Row, ShapeError, Table};
pub use pipeline::{process, read_source, IngestLayout, ProcessedTable};
pub use rows::project_rows;
pub use sanitize::sanitize_cell;
pub use tokenizer::{tokenize, tokenize_line};
pub use viewport::{column_widths, GridMetrics, GridWindow, Viewport};
