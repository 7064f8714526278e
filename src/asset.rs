//! Logical asset name resolution for sprite and effect sheets.
//!
//! Which creature or effect a logical name refers to is decided by the
//! caller; this module only maps names onto the on-disk layout and reads the
//! bytes. Sheets are resolved at runtime rather than embedded, since sprite
//! names arrive from outside the viewer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AssetError;

const ASSET_ROOT: &str = "assets";

/// The path of the creature sheet backing a logical sprite name.
pub fn sprite_sheet_path(name: &str) -> PathBuf {
    Path::new(ASSET_ROOT).join("sprites").join(format!("{name}.png"))
}

/// The path of the effect strip backing a logical effect name.
pub fn effect_sheet_path(name: &str) -> PathBuf {
    Path::new(ASSET_ROOT).join("effects").join(format!("{name}.png"))
}

/// Reads the bytes of a sheet asset.
///
/// A missing file is reported as [`AssetError::NotFound`] so callers can
/// degrade to a blank render without inspecting `io::ErrorKind` themselves.
pub fn get_asset_bytes(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound(path.display().to_string()),
        _ => AssetError::Io(e),
    })
}
