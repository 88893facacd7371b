//! Dungeon runner (default binary).
//!
//! One loop iteration is one tick: advance animations by the measured
//! delta-time, wait for at most one key until the tick deadline, apply it,
//! then redraw if anything visible changed.

use std::time::Instant;

use anyhow::Result;
use log::{error, info};

use tui_wizardry::core::{World, WorldEvent};
use tui_wizardry::input::poll_action;
use tui_wizardry::term::{DungeonView, Flash, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_wizardry::Config;

/// A still scene is redrawn at least this often
const IDLE_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::from_env();
    config.init_logging()?;

    let level = config.load_level()?;
    let world = World::new(level).with_rotation_pacing(config.rotation_pacing);
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, world, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("runner failed: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, mut world: World, config: &Config) -> Result<()> {
    let frame = config.frame_duration();
    let started = Instant::now();
    let mut last_tick = Instant::now();

    let mut view = DungeonView::new();
    let mut flash = Flash::default();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    while !world.is_quit() {
        let tick_start = Instant::now();
        let dt = tick_start.duration_since(last_tick).as_secs_f64();
        last_tick = tick_start;

        world.tick(dt);
        flash.update(dt);

        let timeout = frame.saturating_sub(tick_start.elapsed());
        if let Some(action) = poll_action(timeout)? {
            world.apply_action(action);
        }

        if let Some(WorldEvent::TriggerFired { .. }) = world.take_last_event() {
            flash.start();
        }

        let now_ms = started.elapsed().as_millis() as u64;
        let animating = world.is_animating() || flash.is_active();
        if throttle.should_render(now_ms, world.fingerprint(), animating) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&world, &flash, Viewport::new(w, h), &mut fb);
            term.present(&fb)?;
        }

        // Key arrived early: sleep out the rest of the tick
        let spent = tick_start.elapsed();
        if spent < frame {
            std::thread::sleep(frame - spent);
        }
    }
    Ok(())
}
