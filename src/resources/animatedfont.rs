//! Animated font definitions.
//!
//! An [`AnimatedFont`] maps characters (or aliases) to animation clips. Each
//! clip is an ordered list of frames plus the speed it was authored at. The
//! font is read-only once built; labels copy what they need out of it during
//! resolution.
//!
//! Fonts are usually described in JSON and loaded with
//! [`AnimatedFont::load_from_file`]:
//!
//! ```json
//! {
//!   "fps": 12.0,
//!   "textures": { "demo_atlas": "assets/fonts/demo_atlas.png" },
//!   "clips": {
//!     "a": { "texture": "demo_atlas", "fps": 8.0,
//!            "frames": [ { "region": [0, 0, 16, 16] }, { "region": [16, 0, 16, 16] } ] },
//!     "b": { "frames": [ { "image": "b0", "size": [16, 16] } ] }
//!   },
//!   "aliases": { " ": "space" },
//!   "offsets": { "g": [0.0, 4.0] }
//! }
//! ```
//!
//! Image decoding is not done here. Texture keys are resolved by the host
//! through [`TextureStore`](crate::resources::texturestore::TextureStore).
//!
//! The `size` of an `image` frame is only a placeholder until its texture is
//! loaded. Call [`AnimatedFont::fit_image_sizes`] once textures are available
//! so layout and drawing use the real image size.

use std::path::Path;
use std::sync::Arc;

use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Playback speed used when neither the clip nor the font sets one.
pub const DEFAULT_CLIP_FPS: f32 = 24.0;

/// A single frame of a clip.
///
/// The variant is fixed when the font is built so drawing never has to
/// inspect the texture again.
#[derive(Debug, Clone)]
pub enum FrameTexture {
    /// The whole texture is the frame.
    WholeImage { tex_key: Arc<str>, size: Vector2 },
    /// The frame is a sub-rectangle of a shared atlas texture.
    AtlasRegion { tex_key: Arc<str>, region: Rectangle },
}

impl FrameTexture {
    pub fn whole_image(tex_key: impl Into<Arc<str>>, width: f32, height: f32) -> Self {
        FrameTexture::WholeImage {
            tex_key: tex_key.into(),
            size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    pub fn atlas_region(tex_key: impl Into<Arc<str>>, region: Rectangle) -> Self {
        FrameTexture::AtlasRegion {
            tex_key: tex_key.into(),
            region,
        }
    }

    /// Key of the texture in the host's texture store.
    pub fn tex_key(&self) -> &str {
        match self {
            FrameTexture::WholeImage { tex_key, .. } => tex_key,
            FrameTexture::AtlasRegion { tex_key, .. } => tex_key,
        }
    }

    /// Intrinsic size of the frame in pixels.
    pub fn size(&self) -> Vector2 {
        match self {
            FrameTexture::WholeImage { size, .. } => *size,
            FrameTexture::AtlasRegion { region, .. } => Vector2 {
                x: region.width,
                y: region.height,
            },
        }
    }

    /// Source rectangle to sample from the texture.
    pub fn source_rect(&self) -> Rectangle {
        match self {
            FrameTexture::WholeImage { size, .. } => Rectangle {
                x: 0.0,
                y: 0.0,
                width: size.x,
                height: size.y,
            },
            FrameTexture::AtlasRegion { region, .. } => *region,
        }
    }
}

/// An ordered frame sequence and its authored playback speed.
#[derive(Debug, Clone)]
pub struct FontClip {
    pub frames: Vec<FrameTexture>,
    /// Frames per second.
    pub fps: f32,
}

impl FontClip {
    pub fn new(frames: Vec<FrameTexture>, fps: f32) -> Self {
        Self { frames, fps }
    }
}

/// Read-only lookup used by labels to resolve their letters.
///
/// Keys are letter strings after alias resolution. Implementors only need the
/// four lookups; aliasing and per-letter offsets are optional.
pub trait FontSource {
    /// Whether a clip is registered under `key`.
    fn has_animation(&self, key: &str) -> bool;
    /// Number of frames of the clip, 0 when missing.
    fn frame_count(&self, key: &str) -> usize;
    /// Frame `index` of the clip.
    fn frame_texture(&self, key: &str, index: usize) -> Option<FrameTexture>;
    /// Authored playback speed of the clip in frames per second.
    fn animation_speed(&self, key: &str) -> f32;

    /// Remap a letter to the clip key it should use.
    fn resolve_alias<'a>(&'a self, key: &'a str) -> &'a str {
        key
    }

    /// Draw offset applied to this letter.
    fn letter_offset(&self, _key: &str) -> Vector2 {
        Vector2::zero()
    }
}

/// Character-keyed table of animation clips.
#[derive(Debug, Clone, Default)]
pub struct AnimatedFont {
    clips: FxHashMap<String, FontClip>,
    aliases: FxHashMap<String, String>,
    offsets: FxHashMap<String, Vector2>,
    textures: FxHashMap<String, String>,
}

impl AnimatedFont {
    /// Create an empty font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: register a clip.
    pub fn with_clip(mut self, key: impl Into<String>, clip: FontClip) -> Self {
        self.add_clip(key, clip);
        self
    }

    /// Builder-style: register an alias.
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.add_alias(from, to);
        self
    }

    pub fn add_clip(&mut self, key: impl Into<String>, clip: FontClip) {
        self.clips.insert(key.into(), clip);
    }

    pub fn add_alias(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.aliases.insert(from.into(), to.into());
    }

    pub fn set_offset(&mut self, key: impl Into<String>, offset: Vector2) {
        self.offsets.insert(key.into(), offset);
    }

    /// Get a clip by key (no alias resolution).
    pub fn clip(&self, key: &str) -> Option<&FontClip> {
        self.clips.get(key)
    }

    /// Number of registered clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Replace declared whole-image frame sizes with the loaded texture sizes.
    ///
    /// `texture_size` returns the size of a loaded texture, or `None` when it
    /// is not loaded; those frames keep their declared size. Returns the
    /// texture keys of the frames that changed.
    pub fn fit_image_sizes(
        &mut self,
        texture_size: impl Fn(&str) -> Option<Vector2>,
    ) -> Vec<String> {
        let mut corrected = Vec::new();
        for clip in self.clips.values_mut() {
            for frame in clip.frames.iter_mut() {
                let FrameTexture::WholeImage { tex_key, size } = frame else {
                    continue;
                };
                let Some(actual) = texture_size(tex_key) else {
                    continue;
                };
                if actual.x != size.x || actual.y != size.y {
                    *size = actual;
                    corrected.push(tex_key.to_string());
                }
            }
        }
        corrected
    }

    /// Texture files referenced by the font description, keyed by texture key.
    pub fn texture_paths(&self) -> &FxHashMap<String, String> {
        &self.textures
    }

    /// Parse a font from its JSON description.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let data: AnimatedFontData = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse animated font JSON: {}", e))?;
        data.into_font()
    }

    /// Read and parse a font description file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read animated font {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }
}

impl FontSource for AnimatedFont {
    fn has_animation(&self, key: &str) -> bool {
        self.clips.contains_key(key)
    }

    fn frame_count(&self, key: &str) -> usize {
        self.clips.get(key).map_or(0, |clip| clip.frames.len())
    }

    fn frame_texture(&self, key: &str, index: usize) -> Option<FrameTexture> {
        self.clips.get(key)?.frames.get(index).cloned()
    }

    fn animation_speed(&self, key: &str) -> f32 {
        self.clips.get(key).map_or(0.0, |clip| clip.fps)
    }

    fn resolve_alias<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases.get(key).map_or(key, String::as_str)
    }

    fn letter_offset(&self, key: &str) -> Vector2 {
        self.offsets.get(key).copied().unwrap_or_else(Vector2::zero)
    }
}

/// JSON representation of an [`AnimatedFont`].
#[derive(Deserialize, Debug, Clone)]
struct AnimatedFontData {
    #[serde(default)]
    fps: Option<f32>,
    #[serde(default)]
    textures: FxHashMap<String, String>,
    clips: FxHashMap<String, ClipData>,
    #[serde(default)]
    aliases: FxHashMap<String, String>,
    #[serde(default)]
    offsets: FxHashMap<String, [f32; 2]>,
}

#[derive(Deserialize, Debug, Clone)]
struct ClipData {
    #[serde(default)]
    fps: Option<f32>,
    #[serde(default)]
    texture: Option<String>,
    frames: Vec<FrameData>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum FrameData {
    Region {
        #[serde(default)]
        texture: Option<String>,
        region: [f32; 4],
    },
    Image {
        image: String,
        size: [f32; 2],
    },
}

impl AnimatedFontData {
    fn into_font(self) -> Result<AnimatedFont, String> {
        let font_fps = self.fps.unwrap_or(DEFAULT_CLIP_FPS);
        let mut font = AnimatedFont {
            aliases: self.aliases,
            textures: self.textures,
            ..AnimatedFont::default()
        };

        for (key, [x, y]) in self.offsets {
            font.set_offset(key, Vector2 { x, y });
        }

        for (key, clip) in self.clips {
            let clip_texture: Option<Arc<str>> = clip.texture.as_deref().map(Arc::from);
            let mut frames = Vec::with_capacity(clip.frames.len());
            for (index, frame) in clip.frames.into_iter().enumerate() {
                let frame = match frame {
                    FrameData::Region {
                        texture,
                        region: [x, y, width, height],
                    } => {
                        let tex_key = match (texture, &clip_texture) {
                            (Some(texture), _) => Arc::from(texture),
                            (None, Some(texture)) => texture.clone(),
                            (None, None) => {
                                return Err(format!(
                                    "Clip '{}' frame {} has a region but no texture",
                                    key, index
                                ));
                            }
                        };
                        FrameTexture::atlas_region(
                            tex_key,
                            Rectangle {
                                x,
                                y,
                                width,
                                height,
                            },
                        )
                    }
                    FrameData::Image {
                        image,
                        size: [width, height],
                    } => FrameTexture::whole_image(image, width, height),
                };
                frames.push(frame);
            }
            let fps = clip.fps.unwrap_or(font_fps);
            font.add_clip(key, FontClip::new(frames, fps));
        }

        Ok(font)
    }
}
