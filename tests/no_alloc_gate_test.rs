use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_wizardry::core::World;
use tui_wizardry::term::{DungeonView, Flash, FrameBuffer, Viewport};
use tui_wizardry::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut world = World::default();
    let mut columns = Vec::new();
    world.render_columns(120, 40, &mut columns);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let action = match i % 6 {
                0 => GameAction::MoveForward,
                1 => GameAction::RotateLeft,
                2 => GameAction::Interact,
                3 => GameAction::MoveBackward,
                4 => GameAction::RotateRight,
                _ => GameAction::MoveForward,
            };
            let _ = world.apply_action(action);
            world.tick(0.05);
            let _ = world.take_last_event();
            world.render_columns(120, 40, &mut columns);
            let _ = world.fingerprint();
        }
    });

    assert_eq!(allocs, 0);
}

#[test]
fn view_render_does_not_allocate() {
    let mut world = World::default();
    let mut view = DungeonView::new();
    let mut flash = Flash::default();
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(&world, &flash, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let action = match i % 4 {
                0 => GameAction::MoveForward,
                1 => GameAction::RotateRight,
                2 => GameAction::Interact,
                _ => GameAction::RotateLeft,
            };
            let _ = world.apply_action(action);
            world.tick(0.05);
            if i % 50 == 0 {
                flash.start();
            }
            flash.update(0.05);
            view.render_into(&world, &flash, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
