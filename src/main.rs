//! Animated label demo.
//!
//! Opens a raylib window and shows one animated label per configured line,
//! using:
//! - **raylib** for windowing, textures and drawing
//! - **bevy_ecs** for the label components, resources and systems
//!
//! # Main Loop
//!
//! 1. Parse the CLI and load `config.ini` (defaults when missing)
//! 2. Initialize the raylib window
//! 3. Load the animated font JSON and every texture it references
//! 4. Spawn the labels and register observers and systems
//! 5. Run the loop: input, refresh, advance, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --text "abc|cab" --style per_letter_loop
//! ```

use std::path::{Path, PathBuf};

use animatedlabel::components::animatedlabel::AnimatedLabel;
use animatedlabel::components::animationstyle::AnimationStyle;
use animatedlabel::components::screenposition::ScreenPosition;
use animatedlabel::events::switchdebug::switch_debug_observer;
use animatedlabel::resources::animatedfont::AnimatedFont;
use animatedlabel::resources::animatedfontstore::AnimatedFontStore;
use animatedlabel::resources::democonfig::DemoConfig;
use animatedlabel::resources::texturestore::TextureStore;
use animatedlabel::resources::worldtime::WorldTime;
use animatedlabel::systems::animatedlabel::{
    animated_label_advance_system, animated_label_refresh_system,
};
use animatedlabel::systems::input::demo_input_system;
use animatedlabel::systems::render::render_system;
use animatedlabel::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

/// Animated label demo
#[derive(Parser)]
#[command(version, about = "Per-character sprite-sheet animated labels")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Text to show; separate lines with '|'.
    #[arg(long)]
    text: Option<String>,

    /// Animation style: none, synchronized or per_letter_loop.
    #[arg(long)]
    style: Option<AnimationStyle>,

    /// Animated font description (JSON).
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,
}

/// Load the font description and its textures.
///
/// Texture paths are relative to the font file. Whole-image frames take the
/// size of their loaded texture.
fn load_font(
    rl: &mut raylib::RaylibHandle,
    thread: &raylib::RaylibThread,
    path: &Path,
    textures: &mut TextureStore,
) -> Result<AnimatedFont, String> {
    let mut font = AnimatedFont::load_from_file(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for (key, texture_path) in font.texture_paths() {
        let full_path = base.join(texture_path);
        if let Err(e) = textures.load(rl, thread, key.clone(), &full_path.to_string_lossy()) {
            warn!("{}", e);
        }
    }
    for key in font.fit_image_sizes(|key| textures.size(key)) {
        warn!("Frame '{}' declares a size that differs from its texture", key);
    }
    info!(
        "Loaded animated font {} ({} clips, {} textures)",
        path.display(),
        font.len(),
        textures.len()
    );
    Ok(font)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = DemoConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }
    if let Some(text) = cli.text {
        config.text = text;
    }
    if let Some(style) = cli.style {
        config.style = style;
    }
    if let Some(font) = cli.font {
        config.font_path = font;
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Animated Label")
        .build();
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    let mut fonts = AnimatedFontStore::new();
    match load_font(&mut rl, &thread, &config.font_path, &mut textures) {
        Ok(font) => fonts.add(config.font_key.clone(), font),
        // Labels still reserve their space and report the unbound font
        Err(e) => error!("{}", e),
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(fonts);
    world.insert_non_send_resource(textures);

    let lines: Vec<String> = config.lines().map(str::to_string).collect();
    let line_height = config.font_size * 1.5;
    let center_x = config.window_width as f32 * 0.5;
    let center_y = config.window_height as f32 * 0.5;
    let first_y = center_y - line_height * (lines.len().saturating_sub(1)) as f32 * 0.5;
    for (row, line) in lines.iter().enumerate() {
        world.spawn((
            AnimatedLabel::new(config.label_settings(line)),
            ScreenPosition::new(center_x, first_y + line_height * row as f32),
        ));
    }
    info!("Spawned {} labels", lines.len());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.add_observer(switch_debug_observer);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(demo_input_system);
    update.add_systems(animated_label_refresh_system.after(demo_input_system));
    update.add_systems(animated_label_advance_system.after(animated_label_refresh_system));
    update.add_systems(render_system.after(animated_label_advance_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
