//! Parameter validation and CLI/config resolution.

use crate::cli::Cli;
use crate::config::Config;
use crate::layout::{Borders, Sizing};

/// Fully resolved generation parameters: CLI flags override config-file
/// defaults, which override the built-in defaults.
#[derive(Debug, Clone)]
pub struct Params {
    /// Cells per side of the square board.
    pub length: u32,
    /// Cell sizing mode for the layout.
    pub sizing: Sizing,
    /// Gridline stroke width.
    pub outline: u32,
    /// Border sizes around the grid.
    pub borders: Borders,
    /// Font size for tile text.
    pub font_size: u32,
    /// Character budget per line of tile text.
    pub wrap: usize,
    /// Output image format.
    pub format: String,
}

impl Params {
    /// Resolve parameters from CLI flags and config defaults.
    #[must_use]
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let defaults = &config.defaults;
        let sizing = match cli.cell_size {
            Some(size) => Sizing::Cell { width: size, height: size },
            None => Sizing::FitTarget { size: cli.resolution.unwrap_or(defaults.resolution) },
        };
        Self {
            length: cli.length.unwrap_or(defaults.length),
            sizing,
            outline: cli.outline.unwrap_or(defaults.outline),
            borders: Borders::uniform(cli.border.unwrap_or(defaults.border)),
            font_size: cli.font_size.unwrap_or(defaults.font_size),
            wrap: cli.wrap.unwrap_or(defaults.wrap),
            format: cli.format.clone().unwrap_or_else(|| defaults.format.clone()),
        }
    }
}

/// Validate the card count.
///
/// # Errors
///
/// Returns an error if the count is zero.
pub fn validate_count(count: usize) -> Result<(), String> {
    if count == 0 {
        return Err("Number of cards must be 1 or more".to_string());
    }
    Ok(())
}

/// Validate the board length, including the free-space constraint.
///
/// # Errors
///
/// Returns an error if the length is zero, or if a free space is requested
/// on a board with no center cell.
pub fn validate_length(length: u32, free: bool) -> Result<(), String> {
    if length == 0 {
        return Err("Board length must be 1 or more".to_string());
    }
    if free && length % 2 == 0 {
        return Err(format!(
            "A free space needs a center cell; board length {length} is even"
        ));
    }
    Ok(())
}

/// Validate the output format parameter.
///
/// # Errors
///
/// Returns an error if the format is not recognized.
pub fn validate_format(format: &str) -> Result<(), String> {
    match format {
        "jpeg" | "png" => Ok(()),
        _ => Err(format!("Unsupported format '{format}'. Valid: jpeg, png")),
    }
}

/// Validate the text parameters.
///
/// # Errors
///
/// Returns an error if the font size or wrap budget is zero.
pub fn validate_text(font_size: u32, wrap: usize) -> Result<(), String> {
    if font_size == 0 {
        return Err("Font size must be 1 or more".to_string());
    }
    if wrap == 0 {
        return Err("Wrap budget must be 1 or more".to_string());
    }
    Ok(())
}

/// Get the file extension for an output format.
#[must_use]
pub fn format_extension(format: &str) -> &'static str {
    match format {
        "png" => "png",
        // jpeg and any unknown format default to jpg
        _ => "jpg",
    }
}
