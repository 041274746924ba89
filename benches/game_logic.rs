use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use pellet_chase::core::{circles_overlap, GameSnapshot, GameState, Ghost, PelletScatter};
use pellet_chase::term::{FrameBuffer, GameView, Viewport};
use pellet_chase::types::{Command, Direction, NUM_PELLETS, PELLET_RADIUS};

/// A game in `Playing` that never ends: the player walks into the left wall,
/// away from every pellet, and there are no ghosts.
fn endless_game() -> GameState {
    let pellets: Vec<Vec2> = (0..NUM_PELLETS)
        .map(|i| Vec2::new(1000.0 + 60.0 * i as f32, 800.0))
        .collect();
    let mut state = GameState::staged(12345, Vec2::new(910.0, 200.0), &pellets, &[]);
    state.handle_input(Command::Direction(Direction::Left));
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = endless_game();
    let mut ghosts = [
        Ghost::new(Vec2::new(1600.0, 400.0), 4, 35.0),
        Ghost::new(Vec2::new(400.0, 1600.0), 4, 35.0),
    ];

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
        })
    });

    c.bench_function("ghost_pursuit_step", |b| {
        b.iter(|| {
            for ghost in &mut ghosts {
                ghost.move_toward(black_box(Vec2::new(910.0, 490.0)));
            }
        })
    });
}

fn bench_overlap(c: &mut Criterion) {
    c.bench_function("circles_overlap", |b| {
        b.iter(|| {
            circles_overlap(
                black_box(Vec2::new(910.0, 490.0)),
                20.0,
                black_box(Vec2::new(940.0, 500.0)),
                16.0,
            )
        })
    });
}

fn bench_scatter(c: &mut Criterion) {
    let state = GameState::new(1);
    let field = *state.field();
    let mut scatter = PelletScatter::new(1);
    let mut out = Vec::with_capacity(NUM_PELLETS);

    c.bench_function("scatter_pellets", |b| {
        b.iter(|| {
            scatter.scatter_into(&field, PELLET_RADIUS, NUM_PELLETS, &mut out);
            black_box(out.len())
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = endless_game();
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let vp = Viewport::new(200, 60);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });

    state.snapshot_into(&mut snap);
    c.bench_function("render_into_200x60", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_overlap,
    bench_scatter,
    bench_snapshot_and_render
);
criterion_main!(benches);
