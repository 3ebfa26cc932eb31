//! Runtime module - host integration for the command-line front end
//!
//! - `app` - model ownership, command execution, worker threads
//! - `script` - line-oriented command scripts mapped to messages

pub mod app;
pub mod script;

pub use app::App;
