//! ECS resources made available to systems.
//!
//! Overview
//! - `animatedfont` – animated font definitions and the `FontSource` lookup trait
//! - `animatedfontstore` – loaded animated fonts keyed by string IDs
//! - `debugmode` – presence toggles the debug overlay
//! - `democonfig` – demo settings loaded from an INI file
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animatedfont;
pub mod animatedfontstore;
pub mod debugmode;
pub mod democonfig;
pub mod texturestore;
pub mod worldtime;
