use std::time::Duration;

use cogs::board::Board;
use cogs::movegen::legal_moves;
use cogs::pieces::Color::White;
use cogs::variants::Rules;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

pub fn chess_startpos_bench(c: &mut Criterion) {
    c.bench_function("legal moves chess startpos", |b| {
        let rules = Rules::chess();
        let pos = rules.startpos();
        b.iter(|| legal_moves(black_box(&rules), black_box(&pos), White));
    });
}

pub fn anarchy_startpos_bench(c: &mut Criterion) {
    c.bench_function("legal moves anarchy startpos", |b| {
        let rules = Rules::anarchy();
        let pos = rules.startpos();
        b.iter(|| legal_moves(black_box(&rules), black_box(&pos), White));
    });
}

pub fn play_moves_bench(c: &mut Criterion) {
    c.bench_function("play all startpos moves", |b| {
        let rules = Rules::anarchy();
        let pos = rules.startpos();
        let moves = legal_moves(&rules, &pos, White);
        b.iter(|| {
            for mov in &moves {
                let mut pos: Board = black_box(&pos).clone();
                pos.play_move(mov.clone());
                _ = black_box(pos);
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(20)).noise_threshold(0.03);
    targets =
    chess_startpos_bench,
    anarchy_startpos_bench,
    play_moves_bench,
}

criterion_main!(benches);
