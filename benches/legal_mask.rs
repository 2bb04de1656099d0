//! Legal-action mask throughput: sequential and rayon wall checks on the
//! open board and on a crowded mid-game board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quoridor_engine::core::{EngineConfig, GameRng};
use quoridor_engine::games::quoridor::{random_playout_from, QuoridorGame};
use quoridor_engine::rules::{QuoridorRules, RulesEngine};
use quoridor_engine::BoardState;

fn mid_game(game: &QuoridorGame) -> BoardState {
    // A deterministic random prefix leaves walls scattered over the board.
    random_playout_from(game, game.initial_state(), &mut GameRng::new(17), 30)
        .map(|result| result.final_state)
        .unwrap_or_else(|_| game.initial_state())
}

fn bench_legal_mask(c: &mut Criterion) {
    let game = QuoridorGame::new(EngineConfig::default());
    let positions = [("open", game.initial_state()), ("mid_game", mid_game(&game))];

    for (label, state) in &positions {
        for parallel in [false, true] {
            let rules = QuoridorRules {
                parallel_walls: parallel,
            };
            let name = format!(
                "legal_mask/{label}/{}",
                if parallel { "rayon" } else { "sequential" }
            );
            c.bench_function(&name, |b| {
                b.iter(|| rules.legal_action_mask(black_box(state), state.current_player()))
            });
        }
    }
}

fn bench_playout(c: &mut Criterion) {
    let game = QuoridorGame::default();
    c.bench_function("random_playout/200", |b| {
        let mut rng = GameRng::new(5);
        b.iter(|| {
            let mut fork = rng.fork();
            quoridor_engine::random_playout(&game, &mut fork, 200)
        })
    });
}

criterion_group!(benches, bench_legal_mask, bench_playout);
criterion_main!(benches);
