//! Animated label component.
//!
//! An [`AnimatedLabel`] shows a string where every character is an animation
//! clip taken from an [`AnimatedFont`](crate::resources::animatedfont::AnimatedFont)
//! instead of a static glyph.
//!
//! # Lifecycle
//!
//! 1. [`AnimatedLabel::configure`] turns [`LabelSettings`] plus a font into a
//!    [`LabelLayout`]: one [`AnimatedLetter`] per character, their frames and
//!    their rectangles. It is a pure function.
//! 2. [`AnimatedLabel::apply`] swaps that layout into the label.
//! 3. [`AnimatedLabel::advance`] moves frames forward every tick according to
//!    the label's [`AnimationStyle`].
//! 4. [`AnimatedLabel::emit`] lists what to draw, without mutating anything.
//!
//! The `set_*` methods run the cascade eagerly, so reading the label right
//! after a setter reflects it. Inside the ECS, mutating
//! [`AnimatedLabel::settings_mut`] is enough: the
//! [`animated_label_refresh_system`](crate::systems::animatedlabel::animated_label_refresh_system)
//! picks up the change in the same schedule run.
//!
//! # Layout
//!
//! Letters sit `separation` pixels apart. A letter without frames reserves a
//! `font_size` square. A letter with frames is scaled, keeping its aspect
//! ratio, to fit a `font_size` square and is bottom-aligned with the others.
//! The label measures `(separation * letters + font_size, font_size)`.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::components::animatedletter::AnimatedLetter;
use crate::components::animationstyle::AnimationStyle;
use crate::resources::animatedfont::{FontSource, FrameTexture};

pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_SEPARATION: f32 = 24.0;
pub const DEFAULT_SYNC_FRAME_SPEED: f32 = 24.0;

/// Everything a designer can tweak on a label.
#[derive(Debug, Clone)]
pub struct LabelSettings {
    /// Text to display.
    pub text: String,
    /// Key of the font in the [`AnimatedFontStore`](crate::resources::animatedfontstore::AnimatedFontStore).
    pub font: Option<String>,
    pub style: AnimationStyle,
    /// Target glyph size in pixels.
    pub font_size: f32,
    /// Horizontal distance between letter origins in pixels.
    pub separation: f32,
    /// Shared clock speed in frames per second (Synchronized style only).
    pub sync_frame_speed: f32,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Color every letter is drawn with.
    pub modulate: Color,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: None,
            style: AnimationStyle::default(),
            font_size: DEFAULT_FONT_SIZE,
            separation: DEFAULT_SEPARATION,
            sync_frame_speed: DEFAULT_SYNC_FRAME_SPEED,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            modulate: Color::WHITE,
        }
    }
}

impl LabelSettings {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_style(mut self, style: AnimationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_separation(mut self, separation: f32) -> Self {
        self.separation = separation;
        self
    }

    pub fn with_sync_frame_speed(mut self, fps: f32) -> Self {
        self.sync_frame_speed = fps;
        self
    }

    pub fn with_alignment(
        mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn with_modulate(mut self, modulate: Color) -> Self {
        self.modulate = modulate;
        self
    }
}

/// Problems found while resolving a label against its font.
///
/// None of them is fatal. An unbound font aborts the whole resolution and
/// leaves the label as it was; a missing clip only blanks one letter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelDiagnostic {
    /// No font key is set or the key is not loaded.
    #[error("{}", unbound_message(.font))]
    FontNotBound { font: Option<String> },
    /// The font has no clip for this letter.
    #[error("no clip for letter {letter:?} at position {index}")]
    MissingClip { letter: String, index: usize },
}

fn unbound_message(font: &Option<String>) -> String {
    match font {
        Some(font) => format!("animated font '{}' is not loaded", font),
        None => "no animated font is bound to the label".to_string(),
    }
}

/// Result of resolving a label: ready to be applied.
#[derive(Debug, Clone)]
pub struct LabelLayout {
    pub letters: Vec<AnimatedLetter>,
    /// Measured size of the label.
    pub size: Vector2,
    /// Longest frame sequence among the letters.
    pub longest_clip: usize,
    /// Letters that could not be resolved.
    pub diagnostics: Vec<LabelDiagnostic>,
}

/// Shared clock of the Synchronized style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SyncClock {
    pub elapsed: f32,
    pub frame_index: usize,
    /// Length of the longest clip of the label; the clock loops after it.
    pub frame_count: usize,
}

impl SyncClock {
    /// Advance by `dt` seconds at `speed` frames per second.
    ///
    /// The clock restarts at frame 0 once the derived frame reaches
    /// `frame_count`. Non-positive speeds leave it untouched.
    pub fn advance(&mut self, dt: f32, speed: f32) {
        if speed <= 0.0 || !speed.is_finite() || self.frame_count == 0 {
            return;
        }
        self.elapsed += dt;
        let frame_duration = 1.0 / speed;
        let frame = (self.elapsed / frame_duration).floor() as usize;
        if frame >= self.frame_count {
            self.reset();
        } else {
            self.frame_index = frame;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame_index = 0;
    }
}

/// One letter to draw: which frame, where, and with what color.
#[derive(Debug, Clone)]
pub struct LetterDraw {
    pub texture: FrameTexture,
    /// Destination rectangle relative to the label's top-left corner.
    pub dest: Rectangle,
    pub tint: Color,
}

/// Rectangle of the letter at `index`.
///
/// `first_frame` is the intrinsic size of the letter's first frame, if any.
pub fn letter_rect(
    index: usize,
    first_frame: Option<Vector2>,
    font_size: f32,
    separation: f32,
) -> Rectangle {
    let x = separation * index as f32;
    match first_frame {
        Some(tex) if tex.x > 0.0 && tex.y > 0.0 => {
            let scale = (font_size / tex.x).min(font_size / tex.y);
            let width = tex.x * scale;
            let height = tex.y * scale;
            Rectangle {
                x,
                y: font_size - height,
                width,
                height,
            }
        }
        _ => Rectangle {
            x,
            y: 0.0,
            width: font_size,
            height: font_size,
        },
    }
}

/// Bounding size of a label with `count` letters.
pub fn label_size(count: usize, font_size: f32, separation: f32) -> Vector2 {
    Vector2 {
        x: separation * count as f32 + font_size,
        y: font_size,
    }
}

/// Recompute every letter rectangle and return the label size.
pub fn layout_letters(letters: &mut [AnimatedLetter], font_size: f32, separation: f32) -> Vector2 {
    for (index, letter) in letters.iter_mut().enumerate() {
        let first_frame = letter.frames.first().map(FrameTexture::size);
        letter.rect = letter_rect(index, first_frame, font_size, separation);
    }
    label_size(letters.len(), font_size, separation)
}

/// A string drawn with animated letters.
#[derive(Component, Debug, Clone)]
pub struct AnimatedLabel {
    settings: LabelSettings,
    letters: Vec<AnimatedLetter>,
    size: Vector2,
    clock: SyncClock,
    diagnostics: Vec<LabelDiagnostic>,
}

impl AnimatedLabel {
    /// Create a label whose letters are not resolved yet.
    ///
    /// Letters already reserve their layout space, so the measured size is
    /// correct before any font is available.
    pub fn new(settings: LabelSettings) -> Self {
        let mut letters = AnimatedLetter::sequence(&settings.text);
        let size = layout_letters(&mut letters, settings.font_size, settings.separation);
        Self {
            settings,
            letters,
            size,
            clock: SyncClock::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Resolve `settings` against `font` without touching any label.
    pub fn configure(
        settings: &LabelSettings,
        font: Option<&dyn FontSource>,
    ) -> Result<LabelLayout, LabelDiagnostic> {
        let Some(font) = font else {
            return Err(LabelDiagnostic::FontNotBound {
                font: settings.font.clone(),
            });
        };

        let mut letters = AnimatedLetter::sequence(&settings.text);
        let mut diagnostics = Vec::new();
        let mut longest_clip = 0;

        for (index, letter) in letters.iter_mut().enumerate() {
            let key = font.resolve_alias(&letter.letter).to_owned();
            letter.offset = font.letter_offset(&key);

            if !font.has_animation(&key) {
                diagnostics.push(LabelDiagnostic::MissingClip {
                    letter: letter.letter.clone(),
                    index,
                });
                continue;
            }

            letter.frames = (0..font.frame_count(&key))
                .filter_map(|frame| font.frame_texture(&key, frame))
                .collect();
            if settings.style == AnimationStyle::PerLetterLoop {
                letter.frame_speed = font.animation_speed(&key);
            }
            longest_clip = longest_clip.max(letter.frames.len());
        }

        let size = layout_letters(&mut letters, settings.font_size, settings.separation);

        Ok(LabelLayout {
            letters,
            size,
            longest_clip,
            diagnostics,
        })
    }

    /// Replace letters and size with a freshly configured layout.
    ///
    /// The shared clock keeps running unless it now points past the longest
    /// clip.
    pub fn apply(&mut self, layout: LabelLayout) {
        self.letters = layout.letters;
        self.size = layout.size;
        self.diagnostics = layout.diagnostics;
        self.clock.frame_count = layout.longest_clip;
        if self.clock.frame_index >= self.clock.frame_count {
            self.clock.reset();
        }
    }

    /// Configure from the current settings and apply.
    ///
    /// On `Err` the label keeps its previous letters and size.
    pub fn refresh(&mut self, font: Option<&dyn FontSource>) -> Result<(), LabelDiagnostic> {
        let layout = Self::configure(&self.settings, font)?;
        self.apply(layout);
        Ok(())
    }

    /// Recompute rectangles of the current letters.
    pub fn relayout(&mut self) {
        self.size = layout_letters(
            &mut self.letters,
            self.settings.font_size,
            self.settings.separation,
        );
    }

    fn update(
        &mut self,
        font: Option<&dyn FontSource>,
        change: impl FnOnce(&mut LabelSettings),
    ) -> Result<(), LabelDiagnostic> {
        change(&mut self.settings);
        self.refresh(font)
    }

    pub fn set_text(
        &mut self,
        text: impl Into<String>,
        font: Option<&dyn FontSource>,
    ) -> Result<(), LabelDiagnostic> {
        let text = text.into();
        self.update(font, |settings| settings.text = text)
    }

    /// Bind the label to another font key and resolve against `font`.
    pub fn set_font(
        &mut self,
        key: Option<String>,
        font: Option<&dyn FontSource>,
    ) -> Result<(), LabelDiagnostic> {
        self.update(font, |settings| settings.font = key)
    }

    pub fn set_style(
        &mut self,
        style: AnimationStyle,
        font: Option<&dyn FontSource>,
    ) -> Result<(), LabelDiagnostic> {
        self.update(font, |settings| settings.style = style)
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.settings.font_size = font_size;
        self.relayout();
    }

    pub fn set_separation(&mut self, separation: f32) {
        self.settings.separation = separation;
        self.relayout();
    }

    pub fn set_sync_frame_speed(&mut self, fps: f32) {
        self.settings.sync_frame_speed = fps;
    }

    pub fn set_modulate(&mut self, modulate: Color) {
        self.settings.modulate = modulate;
    }

    pub fn set_alignment(&mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) {
        self.settings.horizontal_alignment = horizontal;
        self.settings.vertical_alignment = vertical;
    }

    pub fn settings(&self) -> &LabelSettings {
        &self.settings
    }

    /// Mutable settings. Nothing is recomputed until [`Self::refresh`] runs.
    pub fn settings_mut(&mut self) -> &mut LabelSettings {
        &mut self.settings
    }

    pub fn letters(&self) -> &[AnimatedLetter] {
        &self.letters
    }

    pub fn clock(&self) -> &SyncClock {
        &self.clock
    }

    /// Diagnostics of the last successful resolution.
    pub fn diagnostics(&self) -> &[LabelDiagnostic] {
        &self.diagnostics
    }

    /// Size of the label for the host's layout.
    pub fn measured_size(&self) -> Vector2 {
        self.size
    }

    /// Move playback forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        match self.settings.style {
            AnimationStyle::None => {}
            AnimationStyle::Synchronized => {
                self.clock.advance(dt, self.settings.sync_frame_speed);
            }
            AnimationStyle::PerLetterLoop => {
                for letter in self.letters.iter_mut() {
                    letter.advance_loop(dt);
                }
            }
        }
    }

    /// Index of the frame the letter at `index` currently shows.
    ///
    /// `None` when the letter does not exist or has no frames.
    pub fn current_frame_index(&self, index: usize) -> Option<usize> {
        let letter = self.letters.get(index)?;
        let last = letter.frames.len().checked_sub(1)?;
        let frame = match self.settings.style {
            AnimationStyle::None => 0,
            AnimationStyle::Synchronized => self.clock.frame_index,
            AnimationStyle::PerLetterLoop => letter.frame_index,
        };
        Some(frame.min(last))
    }

    /// Draw list for the current frame. Letters without frames are skipped.
    pub fn emit(&self) -> Vec<LetterDraw> {
        self.letters
            .iter()
            .enumerate()
            .filter_map(|(index, letter)| {
                let frame = self.current_frame_index(index)?;
                let texture = letter.frames.get(frame)?.clone();
                Some(LetterDraw {
                    texture,
                    dest: Rectangle {
                        x: letter.rect.x + letter.offset.x,
                        y: letter.rect.y + letter.offset.y,
                        width: letter.rect.width,
                        height: letter.rect.height,
                    },
                    tint: self.settings.modulate,
                })
            })
            .collect()
    }
}
