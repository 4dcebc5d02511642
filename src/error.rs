//! Error taxonomy for a dump run.
//!
//! Every variant aborts the run. Missing descriptions and unmapped types are
//! not errors: they show up as placeholders in the rendered output.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The XML documentation file for the module does not exist.
    #[error("no XML documentation file exists at {}", .0.display())]
    DocFileNotFound(PathBuf),

    /// A required argument to a top-level entry point was missing or unusable.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("malformed XML documentation: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed metadata manifest: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
