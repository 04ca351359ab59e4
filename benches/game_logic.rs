use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{merge_in_place, Board, GameConfig, GameState};
use tui_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows(vec![
        vec![2, 2, 4, 8],
        vec![0, 4, 4, 16],
        vec![2, 0, 2, 32],
        vec![64, 64, 0, 2],
    ])
    .unwrap()
}

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("merge_line_4", |b| {
        b.iter(|| {
            let mut line = black_box([2u32, 2, 4, 4]);
            merge_in_place(&mut line)
        })
    });
}

fn bench_slide(c: &mut Criterion) {
    let board = busy_board();
    c.bench_function("slide_left_4x4", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board.slide(black_box(Direction::Left))
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let board = Board::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ])
    .unwrap();
    c.bench_function("can_move_locked_4x4", |b| {
        b.iter(|| black_box(&board).can_move())
    });
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_cycle", |b| {
        let mut state = GameState::new(GameConfig::seeded(12345)).unwrap();
        let mut i = 0usize;
        b.iter(|| {
            if state.is_lost() {
                state.restart();
            }
            i = i.wrapping_add(1);
            state.apply_move(Direction::ALL[i % 4])
        })
    });
}

criterion_group!(
    benches,
    bench_merge_line,
    bench_slide,
    bench_game_over_check,
    bench_apply_move
);
criterion_main!(benches);
