//! Shared helpers for integration tests

#![allow(dead_code)]

use tui_wizardry::core::{LevelDef, World};
use tui_wizardry::types::{GameAction, FRAME_MS};

pub const DT: f64 = FRAME_MS as f64 / 1000.0;

/// Build a world from level rows
pub fn world_from_rows(rows: &[&str]) -> World {
    let json = serde_json::json!({ "rows": rows }).to_string();
    let def = LevelDef::from_json(&json).expect("level json");
    World::new(def.build().expect("valid level"))
}

/// Apply a turn and tick until the blend has finished
pub fn turn(world: &mut World, action: GameAction) {
    world.apply_action(action);
    for _ in 0..10 {
        if !world.pose().is_rotating() {
            break;
        }
        world.tick(DT);
    }
    assert!(!world.pose().is_rotating(), "turn did not finish");
}

/// Apply an action and run one tick, the way the frame loop does
pub fn act(world: &mut World, action: GameAction) {
    world.apply_action(action);
    world.tick(DT);
}
