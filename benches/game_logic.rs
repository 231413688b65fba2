use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{GameSession, Grid, ScriptedRng};
use tui_2048::types::Direction;

fn busy_grid() -> Grid<ScriptedRng> {
    Grid::from_rows(
        &[[2, 2, 4, 0], [4, 4, 4, 4], [0, 8, 8, 2], [16, 0, 16, 2]],
        ScriptedRng::default(),
    )
    .unwrap()
}

fn bench_shift_right(c: &mut Criterion) {
    let grid = busy_grid();

    c.bench_function("shift_right_4x4", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            black_box(g.shift_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut grid = busy_grid();

    c.bench_function("rotate_quarter_4x4", |b| {
        b.iter(|| {
            grid.rotate(black_box(1));
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = busy_grid();

    for dir in Direction::ALL {
        c.bench_function(&format!("apply_move_{}", dir.as_str().to_lowercase()), |b| {
            b.iter(|| {
                let mut g = grid.clone();
                black_box(g.apply_move(black_box(dir)));
            })
        });
    }
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_one_8x8", |b| {
        let mut grid = Grid::empty(8, StdRng::seed_from_u64(12345)).unwrap();
        b.iter(|| {
            if !grid.spawn_random(1) {
                grid.reset();
            }
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    let stuck = Grid::from_rows(
        &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
        ScriptedRng::default(),
    )
    .unwrap();

    c.bench_function("can_move_full_board", |b| {
        b.iter(|| black_box(stuck.can_move()))
    });
}

fn bench_session_play(c: &mut Criterion) {
    c.bench_function("session_play_cycle", |b| {
        let grid = Grid::new(4, StdRng::seed_from_u64(7)).unwrap();
        let mut session = GameSession::with_grid(grid);
        let mut turn = 0usize;
        b.iter(|| {
            if session.game_over() {
                session.restart();
            }
            session.play(Direction::ALL[turn % 4]);
            turn += 1;
        })
    });
}

criterion_group!(
    benches,
    bench_shift_right,
    bench_rotate,
    bench_apply_move,
    bench_spawn,
    bench_can_move,
    bench_session_play
);
criterion_main!(benches);
