//! Texture store resource.
//!
//! Holds raylib textures keyed by the texture keys that
//! [`FrameTexture`](crate::resources::animatedfont::FrameTexture)s refer to.
//!
//! Note: This is a non-send resource because raylib textures must be created
//! and drawn from the main thread only.

use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D, Vector2};
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Add a texture with the given key.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.map.insert(id.into(), texture);
    }

    /// Load an image file from disk and store it under `id`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        id: impl Into<String>,
        path: &str,
    ) -> Result<(), String> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Failed to load texture {}: {}", path, e))?;
        self.insert(id, texture);
        Ok(())
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }

    /// Pixel size of a loaded texture.
    pub fn size(&self, id: impl AsRef<str>) -> Option<Vector2> {
        self.get(id).map(|texture| Vector2 {
            x: texture.width as f32,
            y: texture.height as f32,
        })
    }

    /// Get the number of loaded textures.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
