#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the icon build pipeline."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! A missing style directory is deliberately absent from this enum: the
//! scanner reports it as a warning and carries on.

use std::path::{Path, PathBuf};

use crate::style::IconStyle;

/// Unified error type returned by every pipeline stage and the CLI.
///
/// Any variant aborts the current run. Artifacts written before the failure
/// are left on disk.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors raised while reading icons, directories or
    /// configuration files.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location that could not be read.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Returned when an SVG file is not well-formed markup.
    #[error("malformed SVG asset at {path:?}: {message}")]
    MalformedAsset {
        /// Location of the offending asset.
        path:    PathBuf,
        /// Parser diagnostic.
        message: String
    },
    /// Two icon names in one style map to the same generated identifier.
    #[error(
        "icons '{first}' and '{second}' in style {style} both map to identifier '{identifier}'"
    )]
    NameCollision {
        /// Style directory containing both icons.
        style:      IconStyle,
        /// Identifier shared by both icons.
        identifier: String,
        /// Icon name that claimed the identifier first.
        first:      String,
        /// Icon name that collided with it.
        second:     String
    },
    /// Wraps I/O errors raised while writing generated artifacts.
    #[error("failed to write {path:?}: {source}")]
    Write {
        /// Location of the artifact being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors of the build configuration.
    #[error("failed to parse configuration: {source}")]
    Config {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps serialization errors when encoding the metadata index.
    #[error("failed to serialize metadata: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// A concurrent read task panicked or was cancelled.
    #[error("background task failed: {message}")]
    Task {
        /// Description of the join failure.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// Intended for CLI contexts. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Config {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string()
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn read_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Write`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the artifact that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::MalformedAsset`] variant for the given asset.
pub fn malformed_asset<M>(path: &Path, message: M) -> Error
where
    M: Into<String>
{
    Error::MalformedAsset {
        path:    path.to_path_buf(),
        message: message.into()
    }
}
