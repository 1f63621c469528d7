//! Simulation time resource.
//!
//! Updated once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time) and read by
//! the label playback system.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    /// Multiplier applied to every raw frame delta.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    /// Builder-style: return a copy with a different time scale.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
