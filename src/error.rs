//! Error types for cubetag.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CubeTagError`].
pub type Result<T> = std::result::Result<T, CubeTagError>;

/// Errors that can occur during asset generation.
#[derive(Error, Debug)]
pub enum CubeTagError {
    /// The texture pool is smaller than the batch requires.
    ///
    /// Raised before any output file is written, so an undersized pool
    /// never produces a partial batch.
    #[error("texture pool has {found} tag images but {needed} are required")]
    InsufficientTextures {
        /// Number of tag images the batch needs (six per cube).
        needed: usize,
        /// Number of tag images actually found.
        found: usize,
    },

    /// A tag image filename does not end in a numeric index suffix.
    #[error("texture filename {name:?} has no numeric index suffix")]
    BadTextureName {
        /// The offending filename.
        name: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// The external authoring tool failed to convert a mesh.
    #[error("failed to export {path}: {message}")]
    ExportFailed {
        /// The mesh being converted.
        path: PathBuf,
        /// Error message from the tool invocation.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error encoding or decoding an image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
