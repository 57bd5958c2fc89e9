use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mtg_combat_sim::card::{filter_pool, CardDatabase, Color};
use mtg_combat_sim::matchup::{generate_board, generate_matchup, MatchupConfig};
use mtg_combat_sim::rng::GameRng;

fn benchmark_single_matchup(c: &mut Criterion) {
    let db = CardDatabase::from_file("cards.json").expect("Failed to load cards");
    let config = MatchupConfig::default();

    c.bench_function("single_matchup_seed_12345", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(Some(12345));
            generate_matchup(black_box(db.cards()), black_box(&config), &mut rng, false)
        })
    });
}

fn benchmark_board_sampling(c: &mut Criterion) {
    let db = CardDatabase::from_file("cards.json").expect("Failed to load cards");
    let config = MatchupConfig::default();
    let pool = filter_pool(db.cards(), &config.banned_names);
    let colors = [Color::Black, Color::Green];

    c.bench_function("generate_board_bg", |b| {
        let mut rng = GameRng::new(Some(42));
        b.iter(|| generate_board(black_box(&pool), black_box(&colors), &config, &mut rng, false))
    });
}

fn benchmark_card_loading(c: &mut Criterion) {
    c.bench_function("load_cards_json", |b| {
        b.iter(|| CardDatabase::from_file(black_box("cards.json")))
    });
}

criterion_group!(
    benches,
    benchmark_single_matchup,
    benchmark_board_sampling,
    benchmark_card_loading
);
criterion_main!(benches);
