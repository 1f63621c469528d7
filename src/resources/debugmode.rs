//! Debug toggle resource.
//!
//! The mere presence of this resource makes the render system outline letter
//! rectangles and label bounds. Remove it to disable the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws debug overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
