//! Unified error type for cardgen.

use thiserror::Error;

use crate::layout::LayoutError;

/// Errors that can occur during card generation.
#[derive(Debug, Error)]
pub enum CardError {
    /// Board geometry was rejected at construction.
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The tile pool has fewer entries than the board needs.
    #[error("Input must have at least {needed} values, found {available}. Values are separated by newlines.")]
    InsufficientInput {
        /// Number of tiles on the board.
        needed: usize,
        /// Number of usable lines in the input file.
        available: usize,
    },

    /// No usable font could be resolved or the font data was invalid.
    #[error("Font error: {0}")]
    Font(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
