//! Per-letter animation state owned by an
//! [`AnimatedLabel`](super::animatedlabel::AnimatedLabel).

use raylib::prelude::{Rectangle, Vector2};

use crate::resources::animatedfont::{DEFAULT_CLIP_FPS, FrameTexture};

/// One character of a label and the frames it plays.
#[derive(Debug, Clone)]
pub struct AnimatedLetter {
    /// The character as typed. Aliases are resolved at lookup time and never
    /// stored here.
    pub letter: String,
    /// Cached frames of the letter's clip. Empty when the font has no clip.
    pub frames: Vec<FrameTexture>,
    /// Position and size of the letter inside the label.
    pub rect: Rectangle,
    /// Frames per second. Only used by
    /// [`AnimationStyle::PerLetterLoop`](super::animationstyle::AnimationStyle::PerLetterLoop).
    pub frame_speed: f32,
    /// Current frame when playing on its own clock.
    pub frame_index: usize,
    /// Seconds accumulated on the letter's own clock.
    pub elapsed: f32,
    /// Extra draw offset from the font.
    pub offset: Vector2,
}

impl AnimatedLetter {
    pub fn new(letter: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            frames: Vec::new(),
            rect: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            frame_speed: DEFAULT_CLIP_FPS,
            frame_index: 0,
            elapsed: 0.0,
            offset: Vector2::zero(),
        }
    }

    /// One letter per character of `text`, in order, duplicates included.
    pub fn sequence(text: &str) -> Vec<AnimatedLetter> {
        text.chars()
            .map(|c| AnimatedLetter::new(c.to_string()))
            .collect()
    }

    /// Whether the font provided frames for this letter.
    pub fn is_resolved(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Advance the letter's own clock and wrap around its clip.
    ///
    /// Does nothing for unresolved letters, a non-positive speed or a
    /// non-positive `dt`.
    pub fn advance_loop(&mut self, dt: f32) {
        let count = self.frames.len();
        if count == 0 || self.frame_speed <= 0.0 || !self.frame_speed.is_finite() {
            return;
        }
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let frame_duration = 1.0 / self.frame_speed;
        // Keep the clock within one cycle so precision does not decay
        let cycle = frame_duration * count as f32;
        self.elapsed = (self.elapsed + dt) % cycle;
        self.frame_index = (self.elapsed / frame_duration).floor() as usize % count;
    }
}
