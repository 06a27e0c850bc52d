use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use borderchain::board::{AdjacencyGraph, Difficulty, GameState, Side, COUNTRY_BORDERS};
use borderchain::engine::Engine;
use borderchain::eval::features;
use borderchain::movegen::{legal_moves, validate};
use borderchain::search::search;
use borderchain::selfplay::{play_game, SelfPlayConfig};

/// Opponent to move after the human opens with Nemačka, the densest
/// part of the map.
fn central_europe() -> GameState {
    let mut engine = Engine::with_seed(AdjacencyGraph::world(), 1);
    engine.start(Difficulty::Hard);
    engine
        .submit_human_move("Nemačka")
        .expect("Nemačka is a valid opening")
}

fn bench_world_build(c: &mut Criterion) {
    c.bench_function("world_graph_from_table", |b| {
        b.iter(|| AdjacencyGraph::from_table(black_box(&COUNTRY_BORDERS)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let graph = AdjacencyGraph::world();
    let state = central_europe();
    c.bench_function("legal_moves_nemacka", |b| {
        b.iter(|| legal_moves(black_box(&graph), black_box(&state)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let graph = AdjacencyGraph::world();
    let state = central_europe();
    c.bench_function("validate_adjacent", |b| {
        b.iter(|| validate(black_box(&graph), black_box(&state), black_box("Poljska")))
    });
}

fn bench_features(c: &mut Criterion) {
    let graph = AdjacencyGraph::world();
    let state = central_europe();
    c.bench_function("features_francuska", |b| {
        b.iter(|| {
            features(
                black_box(&graph),
                black_box(&state.used_countries),
                black_box("Francuska"),
            )
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let graph = AdjacencyGraph::world();
    let state = central_europe();
    assert_eq!(state.to_move(), Some(Side::Opponent));

    let mut group = c.benchmark_group("search");
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut rng = SmallRng::seed_from_u64(7);
        group.bench_function(difficulty.name(), |b| {
            b.iter(|| search(black_box(&graph), black_box(&state), difficulty, &mut rng))
        });
    }
    group.finish();
}

fn bench_full_game(c: &mut Criterion) {
    let graph = AdjacencyGraph::world();
    let config = SelfPlayConfig {
        num_games: 1,
        human: Difficulty::Hard,
        opponent: Difficulty::Hard,
        threads: 1,
        seed: 42,
    };
    c.bench_function("full_game_hard_vs_hard", |b| {
        b.iter(|| play_game(black_box(&graph), black_box(&config), 0))
    });
}

criterion_group!(
    benches,
    bench_world_build,
    bench_legal_moves,
    bench_validate,
    bench_features,
    bench_search,
    bench_full_game,
);
criterion_main!(benches);
