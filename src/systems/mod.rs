//! Systems.
//!
//! Submodules overview
//! - [`animatedlabel`] – refresh labels on change and advance their playback
//! - [`input`] – demo keyboard controls
//! - [`render`] – draw labels and the debug overlay using raylib
//! - [`time`] – update simulation time and delta

pub mod animatedlabel;
pub mod input;
pub mod render;
pub mod time;
