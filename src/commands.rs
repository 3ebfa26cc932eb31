//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the grid
    Redraw,
    /// Read a file in the background; the result comes back as
    /// `AppMsg::FileLoaded` tagged with `request`
    LoadFile { request: u64, path: PathBuf },
    /// Write a file in the background; completion comes back as
    /// `AppMsg::ExportCompleted`
    SaveFile { path: PathBuf, content: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Loading flips the spinner on
            Cmd::LoadFile { .. } => true,
            Cmd::SaveFile { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::Quit]).needs_redraw());
    }
}
