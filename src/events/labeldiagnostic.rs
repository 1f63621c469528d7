//! Label diagnostic events.
//!
//! The [`animated_label_refresh_system`](crate::systems::animatedlabel::animated_label_refresh_system)
//! logs every problem found while resolving a label and also triggers a
//! [`LabelDiagnosticEvent`] for it: an unbound font or a letter without a
//! clip. Nothing is required to listen.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<LabelDiagnosticEvent>| {
//!     if let LabelDiagnostic::FontNotBound { .. } = trigger.event().diagnostic {
//!         // show a placeholder, reload fonts, ...
//!     }
//! });
//! ```

use bevy_ecs::prelude::*;

use crate::components::animatedlabel::LabelDiagnostic;

/// Event emitted when a label could not be fully resolved.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct LabelDiagnosticEvent {
    /// The label entity.
    pub entity: Entity,
    pub diagnostic: LabelDiagnostic,
}
