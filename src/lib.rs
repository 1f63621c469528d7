//! Animated label library.
//!
//! A label control that draws every character of a string as a sprite-sheet
//! animation taken from an animated font. Built on bevy_ecs components and
//! systems, drawn with raylib.
//!
//! - [`components`] – the label, its letters, style, alignment, anchor and tint
//! - [`events`] – label diagnostics and the debug toggle
//! - [`resources`] – animated fonts, font/texture stores, time and demo config
//! - [`systems`] – refresh, playback, input and rendering

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
