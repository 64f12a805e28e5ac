//! Error types for ravelin-access
//!
//! This module defines the error hierarchy used throughout the crate.
//! We use `thiserror` for library-style errors that are part of the API;
//! every error carries the file path or identity needed to locate the
//! offending definition file.

use crate::model::EntityType;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level resolution error
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Inheritance error: {0}")]
    Inherit(#[from] InheritError),

    #[error("Failed to resolve group '{name}': {source}")]
    Group {
        name: String,
        #[source]
        source: Box<AccessError>,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resolution cancelled")]
    Cancelled,
}

impl AccessError {
    /// Wrap an error that occurred while resolving a named group file
    pub fn group(name: impl Into<String>, source: AccessError) -> Self {
        AccessError::Group {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create an IO error carrying the path that failed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AccessError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Entity classification and identity derivation errors
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("unable to determine entity type of file: {path}")]
    UndeterminableType { path: PathBuf },

    #[error("invalid {entity} file name: {path}, expected format: <stem>.yml")]
    InvalidFileName { entity: EntityType, path: PathBuf },

    #[error("identity derivation is not supported for {entity} entities: {path}")]
    UnsupportedEntity { entity: EntityType, path: PathBuf },
}

/// Access definition parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("definition file is empty: {path}")]
    Empty { path: PathBuf },

    #[error("malformed definition file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Inheritance resolution errors
#[derive(Error, Debug)]
pub enum InheritError {
    #[error("inheritance is only available for users, not {entity} '{identity}'")]
    NotSupported { entity: EntityType, identity: String },
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, AccessError>;
