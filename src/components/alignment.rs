//! Label alignment relative to its anchor.
//!
//! A label is anchored at its [`ScreenPosition`](super::screenposition::ScreenPosition).
//! Alignment decides which point of the label's measured box sits on the
//! anchor: `Left`/`Top` put the top-left corner there, `Center` the middle,
//! `Right`/`Bottom` the far edge.

use std::str::FromStr;

use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl HorizontalAlignment {
    fn factor(self) -> f32 {
        match self {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Center => 0.5,
            HorizontalAlignment::Right => 1.0,
        }
    }
}

impl VerticalAlignment {
    fn factor(self) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => 0.5,
            VerticalAlignment::Bottom => 1.0,
        }
    }
}

impl FromStr for HorizontalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HorizontalAlignment::Left),
            "center" => Ok(HorizontalAlignment::Center),
            "right" => Ok(HorizontalAlignment::Right),
            other => Err(format!("Unknown horizontal alignment '{}'", other)),
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(VerticalAlignment::Top),
            "center" => Ok(VerticalAlignment::Center),
            "bottom" => Ok(VerticalAlignment::Bottom),
            other => Err(format!("Unknown vertical alignment '{}'", other)),
        }
    }
}

/// Top-left corner of a box of `size` aligned on `anchor`.
pub fn aligned_origin(
    anchor: Vector2,
    size: Vector2,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Vector2 {
    Vector2 {
        x: anchor.x - size.x * horizontal.factor(),
        y: anchor.y - size.y * vertical.factor(),
    }
}
