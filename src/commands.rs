//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The engine names them; the host performs them.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the grid from the current model
    Redraw,
    /// Read a file fully into memory, then feed the result back as
    /// `ImportMsg::TextLoaded` or `ImportMsg::LoadFailed`
    ReadFile { path: PathBuf },
    /// Deliver an export to the user as a local download
    Export { filename: String, contents: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
