//! Pose tests: quarter turns, blending and stepping

mod common;

use common::{world_from_rows, DT};
use tui_wizardry::core::{DVec2, Level, Pose, RotationPacing, TileGrid, World};
use tui_wizardry::types::{Compass, GameAction, CAMERA_PLANE};

fn finish_turn(pose: &mut Pose) {
    for _ in 0..5 {
        pose.update_rotation();
    }
}

#[test]
fn test_turn_snaps_exactly_onto_target() {
    let mut pose = Pose::default();
    pose.rotate(true);
    finish_turn(&mut pose);

    assert!(!pose.is_rotating());
    assert_eq!(pose.direction, DVec2::new(0.0, -1.0));
    assert_eq!(pose.plane, DVec2::new(-CAMERA_PLANE, 0.0));
    assert_eq!(pose.compass(), Compass::South);
}

#[test]
fn test_four_turns_return_bit_exact() {
    let start = Pose::default();
    let mut pose = start;
    for _ in 0..4 {
        pose.rotate(false);
        finish_turn(&mut pose);
    }
    assert_eq!(pose.direction, start.direction);
    assert_eq!(pose.plane, start.plane);
}

#[test]
fn test_blend_is_linear_and_short() {
    let mut pose = Pose::default();
    pose.rotate(false);
    for _ in 0..2 {
        pose.update_rotation();
    }
    let lerp = *pose.rotation().expect("still turning");
    assert!((lerp.progress - 0.4).abs() < 1e-12);
    assert!((pose.direction - DVec2::new(0.6, 0.4)).length() < 1e-12);
    assert!(pose.direction.length() < 1.0);
    assert!(!pose.is_degenerate());
}

#[test]
fn test_turn_mid_blend_restarts_from_current_vectors() {
    let mut pose = Pose::default();
    pose.rotate(true);
    pose.update_rotation();
    let current = pose.direction;

    pose.rotate(true);
    let lerp = pose.rotation().expect("turning");
    assert_eq!(lerp.from_direction, current);
    assert_eq!(lerp.target_direction, DVec2::new(current.y, -current.x));
    assert_eq!(lerp.progress, 0.0);
}

#[test]
fn test_frame_paced_turn_ignores_delta_time() {
    let mut world = World::new(Level::builtin());
    world.apply_action(GameAction::RotateLeft);
    for _ in 0..5 {
        world.tick(0.001);
    }
    assert!(!world.pose().is_rotating());
}

#[test]
fn test_delta_time_paced_turn_follows_clock() {
    let mut world = World::new(Level::builtin()).with_rotation_pacing(RotationPacing::DeltaTime);
    world.apply_action(GameAction::RotateLeft);
    for _ in 0..5 {
        world.tick(0.001);
    }
    assert!(world.pose().is_rotating());

    world.tick(0.25);
    assert!(!world.pose().is_rotating());
    assert_eq!(world.pose().direction, DVec2::new(0.0, 1.0));
}

#[test]
fn test_both_pacings_agree_at_default_frame_rate() {
    let mut frames = World::default();
    let mut clock = World::default().with_rotation_pacing(RotationPacing::DeltaTime);
    frames.apply_action(GameAction::RotateRight);
    clock.apply_action(GameAction::RotateRight);
    for _ in 0..5 {
        frames.tick(DT);
        clock.tick(DT);
    }
    assert_eq!(frames.pose().direction, clock.pose().direction);
}

#[test]
fn test_step_snaps_to_cell_centre() {
    let grid = TileGrid::default_map();
    let mut pose = Pose::default();
    pose.position = DVec2::new(1.2, 1.9);

    assert_eq!(pose.step(true, &grid), Some((2, 1)));
    assert_eq!(pose.position, DVec2::new(2.5, 1.5));
}

#[test]
fn test_step_into_wall_changes_nothing() {
    let grid = TileGrid::default_map();
    let mut pose = Pose::new((8, 8), Compass::North);
    let before = pose;
    assert_eq!(pose.step(true, &grid), None);
    assert_eq!(pose, before);
}

#[test]
fn test_front_cell_reach() {
    let pose = Pose::default();
    assert_eq!(pose.front_cell(), (2, 1));

    let west = Pose::new((3, 3), Compass::West);
    assert_eq!(west.front_cell(), (2, 3));
}

#[test]
fn test_spawn_marker_faces_east() {
    let world = world_from_rows(&["####", "#.@#", "####"]);
    assert_eq!(world.pose().cell(), (2, 1));
    assert_eq!(world.pose().compass(), Compass::East);
}
