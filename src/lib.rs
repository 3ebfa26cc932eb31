//! Statement Grid - bank-statement CSV cleaning and table editing
//!
//! This crate provides the ingestion pipeline and the grid state machine
//! (selection, view sort, undo/redo, viewport windowing) behind an
//! Elm-style `update(model, msg) -> cmd` loop.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod messages;
pub mod model;
pub mod notify;
pub mod report;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
