//! Raycaster tests: distances, sides, orientation and door opacity

mod common;

use common::world_from_rows;
use tui_wizardry::core::raycast::max_steps;
use tui_wizardry::core::{cast, classify, column_ray, DVec2, Pose, Tile, TileGrid};
use tui_wizardry::types::{Compass, Orientation, Side, WallTexture};

fn corridor(len: usize) -> TileGrid {
    let inner = ".".repeat(len);
    let wall = "#".repeat(len + 2);
    let mid = format!("#{}#", inner);
    let world = world_from_rows(&[wall.as_str(), mid.as_str(), wall.as_str()]);
    world.grid().clone()
}

#[test]
fn test_corridor_distance() {
    for len in 1..8usize {
        let grid = corridor(len);
        let hit = cast(DVec2::new(1.5, 1.5), DVec2::new(1.0, 0.0), &grid);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.cell, (len as i32 + 1, 1));
        assert!(!hit.boundary);
        assert!((hit.distance - (len as f64 - 0.5)).abs() < 1e-9, "len {}", len);
        assert!((hit.wall_x - 0.5).abs() < 1e-9);
        assert_eq!(hit.tile, Tile::Wall(WallTexture::OuterWall));
    }
}

#[test]
fn test_distance_is_perpendicular() {
    // Edge columns travel further but report the same plane distance
    let mut wide = TileGrid::new(9, 9);
    for y in 0..9 {
        wide.set(8, y, Tile::Wall(WallTexture::Stone));
    }
    let pose = Pose::new((1, 4), Compass::East);
    let left = cast(pose.position, column_ray(&pose, 0, 80), &wide);
    let centre = cast(pose.position, column_ray(&pose, 40, 80), &wide);
    assert!((left.distance - centre.distance).abs() < 1e-9);
    assert!((centre.distance - 6.5).abs() < 1e-9);
}

#[test]
fn test_vertical_ray_with_zero_component() {
    let grid = TileGrid::default_map();
    let hit = cast(DVec2::new(1.5, 1.5), DVec2::new(0.0, 1.0), &grid);
    assert_eq!(hit.side, Side::Y);
    assert_eq!(hit.cell, (1, 9));
    assert!((hit.distance - 7.5).abs() < 1e-9);
    assert!(hit.distance.is_finite());
}

#[test]
fn test_leaving_open_grid_hits_boundary() {
    let grid = TileGrid::new(4, 4);
    let hit = cast(DVec2::new(1.5, 1.5), DVec2::new(1.0, 0.0), &grid);
    assert!(hit.boundary);
    assert_eq!(hit.cell, (4, 1));
    assert_eq!(hit.tile, Tile::BOUNDARY);
    assert!((hit.distance - 2.5).abs() < 1e-9);
    assert!(hit.steps <= max_steps(&grid));
}

#[test]
fn test_diagonal_tie_goes_to_y() {
    let grid = TileGrid::new(6, 6);
    let hit = cast(DVec2::new(0.5, 0.5), DVec2::new(1.0, 1.0), &grid);
    // Every crossing is an exact corner
    assert_eq!(hit.side, Side::Y);
    assert!(hit.boundary);
    assert_eq!(hit.cell, (5, 6));
    assert!((hit.distance - 5.5).abs() < 1e-9);
}

#[test]
fn test_orientation_thresholds() {
    let normal = DVec2::new(1.0, 0.0);
    assert_eq!(classify(DVec2::new(1.0, 0.0), normal), Orientation::FaceOn);
    assert_eq!(classify(DVec2::new(-1.0, 0.0), normal), Orientation::FaceOn);
    let diag = std::f64::consts::FRAC_1_SQRT_2;
    assert_eq!(classify(DVec2::new(diag, diag), normal), Orientation::FaceOn);
    assert_eq!(classify(DVec2::new(0.3, (1.0f64 - 0.09).sqrt()), normal), Orientation::Glancing);
    assert_eq!(classify(DVec2::new(0.5, 0.75f64.sqrt()), normal), Orientation::Glancing);
}

#[test]
fn test_hit_orientation_from_view() {
    let grid = corridor(4);
    let hit = cast(DVec2::new(1.5, 1.5), DVec2::new(1.0, 0.0), &grid);
    assert_eq!(hit.normal(), DVec2::new(1.0, 0.0));
    assert_eq!(hit.orientation(DVec2::new(1.0, 0.0)), Orientation::FaceOn);
    assert_eq!(hit.orientation(DVec2::new(0.2, 0.98)), Orientation::Glancing);
}

#[test]
fn test_door_blocks_rays_until_fully_open() {
    let world = world_from_rows(&["#######", "#@.+..#", "#######"]);
    let mut grid = world.grid().clone();
    let origin = DVec2::new(1.5, 1.5);
    let east = DVec2::new(1.0, 0.0);

    let closed = cast(origin, east, &grid);
    assert_eq!(closed.cell, (3, 1));
    assert!(!closed.is_door_in_transition());

    let Some(Tile::Door(door)) = grid.get_mut(3, 1) else {
        panic!("door expected");
    };
    door.interact();
    door.update(0.25);

    let swinging = cast(origin, east, &grid);
    assert_eq!(swinging.cell, (3, 1));
    assert!(swinging.is_door_in_transition());
    assert!((swinging.distance - 1.5).abs() < 1e-9);

    grid.update(0.25);
    let open = cast(origin, east, &grid);
    assert_eq!(open.cell, (6, 1));
    assert!((open.distance - 4.5).abs() < 1e-9);
}

#[test]
fn test_triggers_are_transparent() {
    let world = world_from_rows(&["######", "#@*!.#", "######"]);
    let hit = cast(DVec2::new(1.5, 1.5), DVec2::new(1.0, 0.0), world.grid());
    assert_eq!(hit.cell, (5, 1));
}

#[test]
fn test_cast_never_mutates() {
    let world = world_from_rows(&["#####", "#@+.#", "#####"]);
    let before = world.grid().clone();
    let mut buf = Vec::new();
    world.render_columns(64, 20, &mut buf);
    assert_eq!(buf.len(), 64);
    assert_eq!(world.grid(), &before);
}
