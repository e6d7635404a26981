use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use slide_2048::engine::{compact_line, Board, Direction};
use std::hint::black_box;

fn corpus(size: usize) -> Vec<Board> {
    let mut boards = Vec::new();
    let mut b = Board::with_seed(size, 42).unwrap();
    boards.push(b.copy());
    // Derive a variety of densities deterministically
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..40 {
        b.do_move(seq[i % seq.len()]);
        boards.push(b.copy());
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    for size in [4, 8] {
        let boards = corpus(size);
        for dir in Direction::ALL {
            c.bench_function(&format!("shift/{size}x{size}/{dir}"), |bch| {
                bch.iter_batched(
                    || boards.clone(),
                    |mut boards| {
                        let mut acc = 0u64;
                        for bd in &mut boards {
                            acc += bd.shift(dir).score_gained;
                        }
                        black_box(acc)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
}

fn bench_compact_line(c: &mut Criterion) {
    let lines: [[u64; 8]; 4] =
        [[2, 2, 4, 0, 8, 8, 0, 2], [0, 0, 0, 0, 0, 0, 0, 2], [2, 4, 8, 16, 32, 64, 128, 256], [4, 4, 4, 4, 4, 4, 4, 4]];
    c.bench_function("line/compact_8", |bch| {
        let mut out = [0u64; 8];
        let mut events = Vec::with_capacity(16);
        bch.iter(|| {
            let mut acc = 0u64;
            for line in &lines {
                events.clear();
                acc += compact_line(0, black_box(line), &mut out, &mut events).score;
            }
            black_box(acc)
        })
    });
}

fn bench_moves_and_queries(c: &mut Criterion) {
    c.bench_function("board/do_move_cycle_4x4", |bch| {
        bch.iter_batched(
            || Board::with_seed(4, 9).unwrap(),
            |mut bd| {
                for dir in Direction::ALL.iter().cycle().take(64) {
                    bd.do_move(*dir);
                }
                black_box(bd.score())
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("board/copy_8x8", |bch| {
        let boards = corpus(8);
        bch.iter(|| {
            let mut acc = 0usize;
            for bd in &boards {
                acc ^= bd.copy().free_count();
            }
            black_box(acc)
        })
    });
    c.bench_function("query/check_continue", |bch| {
        let boards = corpus(4);
        bch.iter(|| boards.iter().filter(|bd| bd.check_continue()).count())
    });
}

criterion_group!(engine_ops, bench_shift, bench_compact_line, bench_moves_and_queries);
criterion_main!(engine_ops);
