//! Animated label integration tests: refresh on change, playback through
//! `WorldTime`, and diagnostic events.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use animatedlabel::components::animatedlabel::{AnimatedLabel, LabelDiagnostic, LabelSettings};
use animatedlabel::components::animationstyle::AnimationStyle;
use animatedlabel::events::labeldiagnostic::LabelDiagnosticEvent;
use animatedlabel::resources::animatedfont::{AnimatedFont, FontClip, FrameTexture};
use animatedlabel::resources::animatedfontstore::AnimatedFontStore;
use animatedlabel::resources::worldtime::WorldTime;
use animatedlabel::systems::animatedlabel::{
    animated_label_advance_system, animated_label_refresh_system,
};
use animatedlabel::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn clip(key: &str, count: usize, fps: f32) -> FontClip {
    FontClip::new(
        (0..count)
            .map(|i| FrameTexture::whole_image(format!("{}{}", key, i), 16.0, 16.0))
            .collect(),
        fps,
    )
}

fn abc_font() -> AnimatedFont {
    AnimatedFont::new()
        .with_clip("a", clip("a", 3, 4.0))
        .with_clip("b", clip("b", 5, 8.0))
        .with_clip("c", clip("c", 2, 2.0))
}

fn make_world(fonts: AnimatedFontStore) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(fonts);
    world
}

fn demo_fonts() -> AnimatedFontStore {
    let mut fonts = AnimatedFontStore::new();
    fonts.add("demo", abc_font());
    fonts
}

/// Refresh then advance, kept across ticks so change detection is meaningful.
fn label_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            animated_label_refresh_system,
            animated_label_advance_system,
        )
            .chain(),
    );
    schedule
}

fn collect_diagnostics(world: &mut World) -> Arc<Mutex<Vec<LabelDiagnosticEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    world.add_observer(move |trigger: On<LabelDiagnosticEvent>| {
        events_clone.lock().unwrap().push(trigger.event().clone());
    });
    world.flush();
    events
}

fn spawn_label(world: &mut World, text: &str, style: AnimationStyle) -> Entity {
    world
        .spawn(AnimatedLabel::new(
            LabelSettings::new(text)
                .with_font("demo")
                .with_style(style)
                .with_sync_frame_speed(8.0),
        ))
        .id()
}

#[test]
fn spawned_label_is_resolved_on_first_tick() {
    let mut world = make_world(demo_fonts());
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "abc", AnimationStyle::Synchronized);

    schedule.run(&mut world);

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert_eq!(label.letters().len(), 3);
    assert!(label.letters().iter().all(|l| l.is_resolved()));
    assert_eq!(label.clock().frame_count, 5);
    assert!(approx_eq(label.measured_size().x, 96.0));
    assert!(approx_eq(label.measured_size().y, 24.0));
    assert_eq!(label.emit().len(), 3);
}

#[test]
fn synchronized_playback_follows_world_time() {
    let mut world = make_world(demo_fonts());
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "abc", AnimationStyle::Synchronized);

    let mut seen = Vec::new();
    for _ in 0..3 {
        update_world_time(&mut world, 0.25);
        schedule.run(&mut world);
        let label = world.get::<AnimatedLabel>(entity).unwrap();
        seen.push((label.clock().frame_index, label.current_frame_index(2)));
    }

    // 8 fps, 0.25s per tick: frame 2, frame 4, then past the 5-frame clip.
    // The 2-frame 'c' holds its last frame meanwhile.
    assert_eq!(seen, vec![(2, Some(1)), (4, Some(1)), (0, Some(0))]);
}

#[test]
fn per_letter_loop_uses_each_clip_speed() {
    let mut world = make_world(demo_fonts());
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "ab", AnimationStyle::PerLetterLoop);

    update_world_time(&mut world, 0.25);
    schedule.run(&mut world);

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert_eq!(label.current_frame_index(0), Some(1));
    assert_eq!(label.current_frame_index(1), Some(2));
}

#[test]
fn style_none_stays_on_first_frame() {
    let mut world = make_world(demo_fonts());
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "abc", AnimationStyle::None);

    for _ in 0..4 {
        update_world_time(&mut world, 0.3);
        schedule.run(&mut world);
    }

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    for index in 0..3 {
        assert_eq!(label.current_frame_index(index), Some(0));
    }
}

#[test]
fn settings_change_triggers_refresh() {
    let mut world = make_world(demo_fonts());
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "abc", AnimationStyle::Synchronized);
    schedule.run(&mut world);

    world
        .get_mut::<AnimatedLabel>(entity)
        .unwrap()
        .settings_mut()
        .text = "ca".to_string();
    schedule.run(&mut world);

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    let letters: Vec<&str> = label.letters().iter().map(|l| l.letter.as_str()).collect();
    assert_eq!(letters, vec!["c", "a"]);
    assert_eq!(label.clock().frame_count, 3);
    assert!(approx_eq(label.measured_size().x, 72.0));
}

#[test]
fn refresh_keeps_clock_while_it_fits_the_new_text() {
    let mut world = make_world(demo_fonts());
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "abc", AnimationStyle::Synchronized);

    update_world_time(&mut world, 0.25);
    schedule.run(&mut world);
    assert_eq!(world.get::<AnimatedLabel>(entity).unwrap().clock().frame_index, 2);

    update_world_time(&mut world, 0.0);
    world
        .get_mut::<AnimatedLabel>(entity)
        .unwrap()
        .settings_mut()
        .text = "ab".to_string();
    schedule.run(&mut world);
    assert_eq!(world.get::<AnimatedLabel>(entity).unwrap().clock().frame_index, 2);

    world
        .get_mut::<AnimatedLabel>(entity)
        .unwrap()
        .settings_mut()
        .text = "c".to_string();
    schedule.run(&mut world);
    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert_eq!(label.clock().frame_count, 2);
    assert_eq!(label.clock().frame_index, 0);
}

#[test]
fn missing_clip_is_reported_once_per_refresh() {
    let mut world = make_world(demo_fonts());
    let events = collect_diagnostics(&mut world);
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "axb", AnimationStyle::Synchronized);

    // Playback alone must not look like a settings change.
    for _ in 0..3 {
        update_world_time(&mut world, 0.1);
        schedule.run(&mut world);
    }

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].entity, entity);
    assert_eq!(
        events[0].diagnostic,
        LabelDiagnostic::MissingClip {
            letter: "x".to_string(),
            index: 1,
        }
    );

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert_eq!(label.diagnostics().len(), 1);
    // The missing letter keeps its slot but draws nothing.
    assert_eq!(label.letters().len(), 3);
    assert_eq!(label.emit().len(), 2);
}

#[test]
fn unbound_font_is_reported_and_label_kept() {
    let mut world = make_world(AnimatedFontStore::new());
    let events = collect_diagnostics(&mut world);
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "abc", AnimationStyle::Synchronized);

    update_world_time(&mut world, 0.25);
    schedule.run(&mut world);

    {
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].diagnostic,
            LabelDiagnostic::FontNotBound {
                font: Some("demo".to_string())
            }
        );
    }

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert_eq!(label.letters().len(), 3);
    assert!(label.letters().iter().all(|l| !l.is_resolved()));
    assert!(approx_eq(label.measured_size().x, 96.0));
    assert!(label.emit().is_empty());
    assert_eq!(label.clock().frame_index, 0);
}

#[test]
fn loading_font_later_resolves_waiting_labels() {
    let mut world = make_world(AnimatedFontStore::new());
    let mut schedule = label_schedule();
    let first = spawn_label(&mut world, "abc", AnimationStyle::Synchronized);
    let second = spawn_label(&mut world, "cab", AnimationStyle::PerLetterLoop);
    schedule.run(&mut world);
    assert!(world.get::<AnimatedLabel>(first).unwrap().emit().is_empty());

    world
        .resource_mut::<AnimatedFontStore>()
        .add("demo", abc_font());
    schedule.run(&mut world);

    for entity in [first, second] {
        let label = world.get::<AnimatedLabel>(entity).unwrap();
        assert!(label.letters().iter().all(|l| l.is_resolved()));
        assert_eq!(label.emit().len(), 3);
    }
}

#[test]
fn replacing_font_clears_missing_clips() {
    let mut world = make_world(demo_fonts());
    let events = collect_diagnostics(&mut world);
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "axb", AnimationStyle::Synchronized);
    schedule.run(&mut world);
    assert_eq!(events.lock().unwrap().len(), 1);

    world
        .resource_mut::<AnimatedFontStore>()
        .add("demo", abc_font().with_clip("x", clip("x", 7, 4.0)));
    schedule.run(&mut world);

    assert_eq!(events.lock().unwrap().len(), 1);
    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert!(label.diagnostics().is_empty());
    assert_eq!(label.clock().frame_count, 7);
    assert_eq!(label.emit().len(), 3);
}

#[test]
fn alias_resolves_through_the_store() {
    let mut fonts = AnimatedFontStore::new();
    fonts.add("demo", abc_font().with_alias("A", "a"));
    let mut world = make_world(fonts);
    let mut schedule = label_schedule();
    let entity = spawn_label(&mut world, "Ab", AnimationStyle::None);

    schedule.run(&mut world);

    let label = world.get::<AnimatedLabel>(entity).unwrap();
    assert_eq!(label.letters()[0].letter, "A");
    assert_eq!(label.letters()[0].frame_count(), 3);
    let draws = label.emit();
    assert_eq!(draws[0].texture.tex_key(), "a0");
}
