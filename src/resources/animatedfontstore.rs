//! Animated font registry.
//!
//! Stores loaded [`AnimatedFont`]s keyed by string IDs. Labels reference a
//! font by key through their settings; the refresh system looks the key up
//! here whenever a label or the store changes.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::resources::animatedfont::AnimatedFont;

/// Map of font keys to animated fonts.
#[derive(Resource, Debug, Default)]
pub struct AnimatedFontStore {
    fonts: FxHashMap<String, AnimatedFont>,
}

impl AnimatedFontStore {
    /// Create an empty font store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font with the given key, replacing any previous one.
    pub fn add(&mut self, id: impl Into<String>, font: AnimatedFont) {
        self.fonts.insert(id.into(), font);
    }

    /// Get a font by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&AnimatedFont> {
        self.fonts.get(id.as_ref())
    }

    /// Get the number of loaded fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
