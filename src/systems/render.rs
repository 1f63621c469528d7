//! Label rendering.
//!
//! Draws every [`AnimatedLabel`] at its [`ScreenPosition`] with raylib. The
//! label decides which frames go where; this system only translates its
//! draw list to screen space and looks textures up in the [`TextureStore`].
//! Frames whose texture is not loaded are skipped.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::alignment::aligned_origin;
use crate::components::animatedlabel::AnimatedLabel;
use crate::components::screenposition::ScreenPosition;
use crate::components::tint::Tint;
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;

/// Clear the screen and draw all labels, plus the debug overlay if enabled.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    labels: Query<(&AnimatedLabel, &ScreenPosition, Option<&Tint>)>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::new(32, 30, 40, 255));

    for (label, anchor, tint) in labels.iter() {
        let settings = label.settings();
        let size = label.measured_size();
        let origin = aligned_origin(
            anchor.pos,
            size,
            settings.horizontal_alignment,
            settings.vertical_alignment,
        );

        for draw in label.emit() {
            let Some(texture) = textures.get(draw.texture.tex_key()) else {
                continue;
            };
            let dest = Rectangle {
                x: origin.x + draw.dest.x,
                y: origin.y + draw.dest.y,
                width: draw.dest.width,
                height: draw.dest.height,
            };
            d.draw_texture_pro(
                texture,
                draw.texture.source_rect(),
                dest,
                Vector2::zero(),
                0.0,
                Tint::apply(tint, draw.tint),
            );
        }

        if debug_mode.is_some() {
            for letter in label.letters() {
                let color = if letter.is_resolved() {
                    Color::GREEN
                } else {
                    Color::RED
                };
                d.draw_rectangle_lines(
                    (origin.x + letter.rect.x) as i32,
                    (origin.y + letter.rect.y) as i32,
                    letter.rect.width as i32,
                    letter.rect.height as i32,
                    color,
                );
            }
            d.draw_rectangle_lines(
                origin.x as i32,
                origin.y as i32,
                size.x as i32,
                size.y as i32,
                Color::YELLOW,
            );
        }
    }

    if debug_mode.is_some() {
        let fps = d.get_fps();
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::RAYWHITE);
        d.draw_text(
            "1: none  2: synchronized  3: per letter loop  UP/DOWN: sync speed",
            10,
            24,
            10,
            Color::RAYWHITE,
        );
    }
}
