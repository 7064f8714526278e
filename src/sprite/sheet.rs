use std::path::PathBuf;

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::{debug, warn};

use crate::asset;

/// Loads sheet images by logical name, at most once per name change.
///
/// A failed read or decode leaves the loader empty: the renderer simply draws
/// nothing until a later `set_source` succeeds. No retry, no timeout.
pub struct SheetLoader {
    resolve: fn(&str) -> PathBuf,
    name: Option<String>,
    image: Option<Texture>,
}

impl SheetLoader {
    /// Creates a loader whose names resolve through the given path mapping
    /// (e.g. [`asset::sprite_sheet_path`] or [`asset::effect_sheet_path`]).
    pub fn new(resolve: fn(&str) -> PathBuf) -> Self {
        Self {
            resolve,
            name: None,
            image: None,
        }
    }

    /// Points the loader at a new logical name and loads its backing image.
    ///
    /// Re-invoking with the current name is a no-op. Changing the name drops
    /// the previous texture before the new load begins, so a draw can never
    /// use a stale image once a new load has been requested.
    pub fn set_source(&mut self, name: &str, creator: &TextureCreator<WindowContext>) {
        if self.name.as_deref() == Some(name) {
            return;
        }
        self.name = Some(name.to_string());
        self.image = None;

        let path = (self.resolve)(name);
        let bytes = match asset::get_asset_bytes(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(sheet = name, error = %e, "Could not read sheet");
                return;
            }
        };

        match creator.load_texture_bytes(&bytes) {
            Ok(texture) => {
                debug!(sheet = name, bytes = bytes.len(), "Sheet loaded");
                self.image = Some(texture);
            }
            Err(e) => {
                warn!(sheet = name, error = %e, "Could not decode sheet");
            }
        }
    }

    /// The decoded image, or `None` while no load has succeeded.
    pub fn image(&self) -> Option<&Texture> {
        self.image.as_ref()
    }

    pub fn ready(&self) -> bool {
        self.image.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
