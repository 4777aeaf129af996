//! Error types for skillgen.
//!
//! Every failure in the pipeline falls into one of four kinds (see
//! [`ErrorKind`]). Structural and extraction errors are scoped to a single
//! document: the caller records them and moves on. Configuration errors abort
//! only the catalog phase. I/O errors carry the offending path.

use std::path::{Path, PathBuf};

/// Result type alias for skillgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed document structure (front matter).
    Structural,
    /// A document parsed but could not be turned into a skill.
    Extraction,
    /// Missing or malformed configuration.
    Config,
    /// Read/write failure.
    Io,
}

/// Errors that can occur in skillgen.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Front matter delimiters are present but the block is unusable.
    #[error("Malformed front matter: {reason}")]
    MalformedFrontMatter {
        /// What is wrong with the block
        reason: String,
    },

    /// Front matter block is not a valid YAML mapping.
    #[error("Failed to parse front matter YAML: {0}")]
    FrontMatterYaml(#[from] serde_yaml::Error),

    /// The title produced an empty skill name.
    #[error("Cannot derive skill name from title {title:?}")]
    EmptyName {
        /// Title the name was derived from
        title: String,
    },

    /// No path segment names a known category.
    #[error("Cannot determine category from path: {}", path.display())]
    UnknownCategory {
        /// Document path
        path: PathBuf,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Parse error in a structured input other than front matter.
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },

    /// Rendering a skill document failed.
    #[error("Render error: {message}")]
    Render {
        /// What failed to render
        message: String,
    },

    /// I/O error with the path it occurred on.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a malformed front matter error.
    pub fn malformed_front_matter<S: Into<String>>(reason: S) -> Self {
        Error::MalformedFrontMatter {
            reason: reason.into(),
        }
    }

    /// Creates an empty-name error for the given title.
    pub fn empty_name<S: Into<String>>(title: S) -> Self {
        Error::EmptyName {
            title: title.into(),
        }
    }

    /// Creates an unknown-category error for the given document path.
    pub fn unknown_category(path: impl Into<PathBuf>) -> Self {
        Error::UnknownCategory { path: path.into() }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a render error.
    pub fn render<S: Into<String>>(message: S) -> Self {
        Error::Render {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedFrontMatter { .. } | Error::FrontMatterYaml(_) => {
                ErrorKind::Structural
            }
            Error::EmptyName { .. } | Error::UnknownCategory { .. } => ErrorKind::Extraction,
            Error::Config { .. } | Error::Parse { .. } | Error::Json(_) => ErrorKind::Config,
            Error::Render { .. } | Error::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns whether this error comes from the document's own content
    /// (bad front matter, no usable title, no category) rather than from
    /// the filesystem or configuration.
    pub fn is_per_document(&self) -> bool {
        matches!(self.kind(), ErrorKind::Structural | ErrorKind::Extraction)
    }
}

// ============================================================================
// Tests
// ============================================================================
