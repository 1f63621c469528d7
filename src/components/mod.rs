//! ECS components.
//!
//! Submodules overview:
//! - [`alignment`] – where a label sits relative to its anchor
//! - [`animatedlabel`] – the animated label and its playback state machine
//! - [`animatedletter`] – per-letter frames, rectangle and clock
//! - [`animationstyle`] – synchronization policy of a label
//! - [`screenposition`] – screen-space anchor for labels
//! - [`tint`] – color modulation applied at draw time

pub mod alignment;
pub mod animatedlabel;
pub mod animatedletter;
pub mod animationstyle;
pub mod screenposition;
pub mod tint;
