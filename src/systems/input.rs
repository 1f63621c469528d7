//! Demo input system.
//!
//! Reads raylib keys once per frame:
//! - `1`, `2`, `3` switch every label to None, Synchronized or PerLetterLoop
//! - `UP`/`DOWN` change the shared sync speed by one frame per second
//! - `F11` toggles the debug overlay via [`SwitchDebugEvent`]
//!
//! Style changes go through [`AnimatedLabel::settings_mut`] and are picked up
//! by the refresh system. The sync speed does not need a refresh and is set
//! without change detection.
use bevy_ecs::change_detection::DetectChangesMut;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi::KeyboardKey;

use crate::components::animatedlabel::AnimatedLabel;
use crate::components::animationstyle::AnimationStyle;
use crate::events::switchdebug::SwitchDebugEvent;

const SYNC_SPEED_STEP: f32 = 1.0;

pub fn demo_input_system(
    rl: NonSend<raylib::RaylibHandle>,
    mut labels: Query<&mut AnimatedLabel>,
    mut commands: Commands,
) {
    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }

    let style = if rl.is_key_pressed(KeyboardKey::KEY_ONE) {
        Some(AnimationStyle::None)
    } else if rl.is_key_pressed(KeyboardKey::KEY_TWO) {
        Some(AnimationStyle::Synchronized)
    } else if rl.is_key_pressed(KeyboardKey::KEY_THREE) {
        Some(AnimationStyle::PerLetterLoop)
    } else {
        None
    };

    let speed_step = if rl.is_key_pressed(KeyboardKey::KEY_UP) {
        SYNC_SPEED_STEP
    } else if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
        -SYNC_SPEED_STEP
    } else {
        0.0
    };

    for mut label in labels.iter_mut() {
        if let Some(style) = style {
            if label.settings().style != style {
                info!("Label '{}' style -> {}", label.settings().text, style);
                label.settings_mut().style = style;
            }
        }
        if speed_step != 0.0 {
            let speed = (label.settings().sync_frame_speed + speed_step).max(0.0);
            info!("Label '{}' sync speed -> {}", label.settings().text, speed);
            label.bypass_change_detection().set_sync_frame_speed(speed);
        }
    }
}
