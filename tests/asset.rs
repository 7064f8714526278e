use std::path::Path;

use critter::asset;
use critter::error::AssetError;
use pretty_assertions::assert_eq;

#[test]
fn test_sprite_sheet_path_layout() {
    let path = asset::sprite_sheet_path("emberling");
    assert_eq!(path, Path::new("assets").join("sprites").join("emberling.png"));
}

#[test]
fn test_effect_sheet_path_layout() {
    let path = asset::effect_sheet_path("heal-small");
    assert_eq!(path, Path::new("assets").join("effects").join("heal-small.png"));
}

#[test]
fn test_missing_asset_is_not_found() {
    let path = asset::sprite_sheet_path("definitely-not-a-creature");
    let result = asset::get_asset_bytes(&path);
    assert!(matches!(result, Err(AssetError::NotFound(_))));
}
