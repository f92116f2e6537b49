//! Error types for paperfmt library.

use std::io;
use thiserror::Error;

/// Result type alias for paperfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the formatter.
///
/// Formatting itself is total and never produces one of these.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The paper request is missing required input.
    #[error("Invalid paper request: {0}")]
    InvalidRequest(String),

    /// A wizard event was sent in a state that does not accept it.
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        /// Name of the current wizard state.
        state: &'static str,
        /// The rejected action.
        action: &'static str,
    },

    /// The backend returned no title candidates.
    #[error("No title candidates were generated")]
    NoTitles,

    /// The selected title index does not exist.
    #[error("Title {0} is out of range ({1} candidates)")]
    TitleOutOfRange(usize, usize),

    /// A section was confirmed without content.
    #[error("Section '{0}' has no content")]
    EmptySection(String),

    /// The remote paper-generation backend failed.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
