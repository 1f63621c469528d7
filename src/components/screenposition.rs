//! Screen-space anchor of a label.
//!
//! The render system places a label so that the point picked by its
//! alignment settings lands on this position. See
//! [`aligned_origin`](super::alignment::aligned_origin).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position (anchor) for an entity, in pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2::zero(),
        }
    }
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
