//! Output path resolution and image saving.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::CardError;
use crate::params::format_extension;

/// Resolve the path for card `index` out of `count`.
///
/// A single card is written to the output path directly; multiple cards
/// land in the output path as a directory of zero-padded numbered files.
#[must_use]
pub fn card_path(output: &str, count: usize, index: usize, format: &str) -> PathBuf {
    if count == 1 {
        PathBuf::from(output)
    } else {
        let ext = format_extension(format);
        Path::new(output).join(format!("board-{:02}.{ext}", index + 1))
    }
}

/// Create the output directory when generating multiple cards.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn prepare_output(output: &str, count: usize) -> Result<(), CardError> {
    if count > 1 {
        std::fs::create_dir_all(output)?;
    }
    Ok(())
}

/// Save a rendered card in the requested format.
///
/// # Errors
///
/// Returns an error if the format is unknown or encoding fails.
pub fn save_card(img: &RgbImage, format: &str, path: &Path) -> Result<(), CardError> {
    let image_format = match format {
        "jpeg" => image::ImageFormat::Jpeg,
        "png" => image::ImageFormat::Png,
        other => {
            return Err(CardError::InvalidArgument(format!("Unsupported format: {other}")));
        }
    };
    img.save_with_format(path, image_format)?;
    Ok(())
}
