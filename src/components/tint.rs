//! Per-entity color tint for animated labels.
//!
//! A label already carries a `modulate` color in its settings. Attaching a
//! [`Tint`] multiplies on top of it at draw time, which is handy for fading a
//! whole label without touching its settings (and without triggering a
//! refresh).

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Multiply this tint with another color, channel by channel.
    pub fn multiply(&self, other: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Color::new(
            mul(self.color.r, other.r),
            mul(self.color.g, other.g),
            mul(self.color.b, other.b),
            mul(self.color.a, other.a),
        )
    }

    /// Final draw color for a letter emitted with `modulate`.
    pub fn apply(tint: Option<&Tint>, modulate: Color) -> Color {
        tint.map_or(modulate, |t| t.multiply(modulate))
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_tint_keeps_modulate() {
        let modulate = Color::new(100, 150, 200, 255);
        let result = Tint::default().multiply(modulate);
        assert_eq!(result.r, 100);
        assert_eq!(result.g, 150);
        assert_eq!(result.b, 200);
        assert_eq!(result.a, 255);
    }

    #[test]
    fn test_half_alpha_fades() {
        let result = Tint::new(255, 255, 255, 128).multiply(Color::WHITE);
        assert_eq!(result.r, 255);
        assert_eq!(result.a, 128);
    }

    #[test]
    fn test_apply_without_tint() {
        let modulate = Color::new(1, 2, 3, 4);
        let result = Tint::apply(None, modulate);
        assert_eq!(result.g, 2);
        let black = Tint::new(0, 0, 0, 0);
        let result = Tint::apply(Some(&black), modulate);
        assert_eq!(result.b, 0);
    }
}
