//! Search benchmarks for the two board-game bots.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_arcade::core::{ConnectFourProfile, Difficulty, GameRng};
use rust_arcade::games::connect_four::{self, Token};
use rust_arcade::games::tetris;
use rust_arcade::games::tictactoe::{self, Board, Mark};

fn bench_tictactoe_empty_board(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("tictactoe_best_move_empty", |b| {
        b.iter(|| black_box(tictactoe::best_move(&board, Mark::X)))
    });
}

fn bench_connect_four_depths(c: &mut Criterion) {
    let board = connect_four::new_board();
    let board = connect_four::drop_token(&board, 3, Token::Red).unwrap();
    let mut group = c.benchmark_group("connect_four_search");
    group.sample_size(10);

    for depth in [3u32, 5, 7] {
        let profile = ConnectFourProfile::for_difficulty(Difficulty::Hard).with_search_depth(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &profile, |b, profile| {
            b.iter(|| {
                let mut rng = GameRng::new(0);
                black_box(connect_four::bot_move_with_profile(
                    &board,
                    Token::Yellow,
                    profile,
                    &mut rng,
                ))
            })
        });
    }
    group.finish();
}

fn bench_tetris_session(c: &mut Criterion) {
    c.bench_function("tetris_hard_drop_until_over", |b| {
        b.iter(|| {
            let mut game = tetris::new_game(7);
            while !game.is_over() {
                game = tetris::hard_drop(&game);
            }
            black_box(game.score())
        })
    });
}

criterion_group!(
    benches,
    bench_tictactoe_empty_board,
    bench_connect_four_depths,
    bench_tetris_session,
);
criterion_main!(benches);
