//! Animated label systems.
//!
//! - [`animated_label_refresh_system`] re-resolves labels whose settings
//!   changed, or every label when the [`AnimatedFontStore`] changed.
//! - [`animated_label_advance_system`] moves label playback forward by the
//!   frame delta from [`WorldTime`].
//!
//! Both write through `bypass_change_detection`, so playback never looks like
//! a settings change to the refresh system. Run refresh before advance.
//!
//! # Related
//!
//! - [`crate::components::animatedlabel::AnimatedLabel`] – the label state machine
//! - [`crate::events::labeldiagnostic::LabelDiagnosticEvent`] – emitted diagnostics

use bevy_ecs::change_detection::{DetectChanges, DetectChangesMut};
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animatedlabel::AnimatedLabel;
use crate::events::labeldiagnostic::LabelDiagnosticEvent;
use crate::resources::animatedfont::FontSource;
use crate::resources::animatedfontstore::AnimatedFontStore;
use crate::resources::worldtime::WorldTime;

/// Resolve changed labels against their fonts.
///
/// Contract
/// - A label is refreshed when it was added, its settings were mutated, or
///   the font store changed.
/// - An unbound font leaves the label untouched and is logged and reported.
/// - Missing clips are reported per letter.
pub fn animated_label_refresh_system(
    mut query: Query<(Entity, &mut AnimatedLabel)>,
    fonts: Res<AnimatedFontStore>,
    mut commands: Commands,
) {
    let fonts_changed = fonts.is_changed();
    for (entity, mut label) in query.iter_mut() {
        if !fonts_changed && !label.is_changed() {
            continue;
        }

        let font = label
            .settings()
            .font
            .as_deref()
            .and_then(|key| fonts.get(key))
            .map(|font| font as &dyn FontSource);

        let label = label.bypass_change_detection();
        match label.refresh(font) {
            Ok(()) => {
                debug!(
                    "Refreshed label {:?} '{}': {} letters, size {:?}",
                    entity,
                    label.settings().text,
                    label.letters().len(),
                    label.measured_size()
                );
                for diagnostic in label.diagnostics() {
                    debug!("Label {:?}: {}", entity, diagnostic);
                    commands.trigger(LabelDiagnosticEvent {
                        entity,
                        diagnostic: diagnostic.clone(),
                    });
                }
            }
            Err(diagnostic) => {
                warn!("Label {:?} not refreshed: {}", entity, diagnostic);
                commands.trigger(LabelDiagnosticEvent { entity, diagnostic });
            }
        }
    }
}

/// Advance label playback by the world delta.
pub fn animated_label_advance_system(mut query: Query<&mut AnimatedLabel>, time: Res<WorldTime>) {
    for mut label in query.iter_mut() {
        label.bypass_change_detection().advance(time.delta);
    }
}
