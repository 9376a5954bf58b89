//! TrueType font resolution and loading.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use crate::error::CardError;

/// Well-known font locations tried when no font is configured.
const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Discover the font path using the resolution order:
/// 1. Explicit path (from `--font` flag)
/// 2. `CARDGEN_FONT` environment variable
/// 3. Config file default
/// 4. First existing well-known system font
///
/// # Errors
///
/// Returns an error when nothing resolves to an existing file.
pub fn discover_font_path(
    explicit: Option<&str>,
    config_font: Option<&str>,
) -> Result<PathBuf, CardError> {
    if let Some(p) = explicit {
        return Ok(PathBuf::from(p));
    }

    if let Ok(p) = std::env::var("CARDGEN_FONT") {
        return Ok(PathBuf::from(p));
    }

    if let Some(p) = config_font {
        return Ok(PathBuf::from(p));
    }

    CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            CardError::Font(
                "no font configured and no system font found; pass --font or set CARDGEN_FONT"
                    .to_string(),
            )
        })
}

/// Load a TrueType font from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid font.
pub fn load_font(path: &Path) -> Result<FontVec, CardError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CardError::Font(format!("failed to read {}: {e}", path.display())))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| CardError::Font(format!("invalid font {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = discover_font_path(Some("/tmp/my-font.ttf"), Some("/tmp/other.ttf")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/my-font.ttf"));
    }

    #[test]
    fn config_font_used_when_no_flag() {
        std::env::remove_var("CARDGEN_FONT");
        let path = discover_font_path(None, Some("/tmp/config-font.ttf")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config-font.ttf"));
    }

    #[test]
    fn load_missing_font_fails() {
        let err = load_font(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, CardError::Font(_)));
    }

    #[test]
    fn load_garbage_font_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(load_font(&path).unwrap_err(), CardError::Font(_)));
    }
}
