use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_wizardry::core::{cast, DVec2, TileGrid, World};
use tui_wizardry::term::{DungeonView, Flash, FrameBuffer, Viewport};
use tui_wizardry::types::GameAction;

fn bench_single_ray(c: &mut Criterion) {
    let grid = TileGrid::default_map();
    let origin = DVec2::new(1.5, 1.5);
    let ray = DVec2::new(0.8, 0.35);

    c.bench_function("cast_diagonal_ray", |b| {
        b.iter(|| cast(black_box(origin), black_box(ray), &grid))
    });
}

fn bench_render_columns(c: &mut Criterion) {
    let world = World::default();
    let mut columns = Vec::new();

    c.bench_function("render_columns_120x40", |b| {
        b.iter(|| {
            world.render_columns(black_box(120), 40, &mut columns);
        })
    });
}

fn bench_world_tick(c: &mut Criterion) {
    let mut world = World::default();
    world.apply_action(GameAction::RotateLeft);

    c.bench_function("world_tick_50ms", |b| {
        b.iter(|| {
            world.tick(black_box(0.05));
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let world = World::default();
    let mut view = DungeonView::new();
    let flash = Flash::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("dungeon_view_frame_120x40", |b| {
        b.iter(|| {
            view.render_into(&world, &flash, Viewport::new(120, 40), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_single_ray,
    bench_render_columns,
    bench_world_tick,
    bench_full_frame
);
criterion_main!(benches);
