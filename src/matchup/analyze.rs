//! Batch matchup analysis
//!
//! Generates many matchups and reports how often the balancer had to step in.

use crate::card::{Card, Color};
use crate::matchup::balance::Side;
use crate::matchup::config::MatchupConfig;
use crate::matchup::engine::{generate_matchup_detailed, GeneratedMatchup};
use crate::rng::GameRng;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate results over many generated matchups
#[derive(Debug, Default, Serialize)]
pub struct AnalysisResults {
    pub matchups: usize,
    pub life_raised: usize,
    pub life_raised_side_one: usize,
    pub life_raised_side_two: usize,
    /// Average life gained when a raise happened
    pub avg_life_added: f64,
    pub lands_padded: usize,
    pub avg_lands_added: f64,
    /// Per-side averages after balancing
    pub avg_life: f64,
    pub avg_lands: f64,
    pub avg_creatures: f64,
    pub avg_hand: f64,
    /// Average magnitude of the alpha strike before balancing
    pub avg_abs_alpha: f64,
    pub color_counts: BTreeMap<Color, usize>,
}

/// Generate `num_matchups` matchups in parallel, seeding matchup `i` with `base_seed + i`
pub fn analyze_batch(
    cards: &[Card],
    config: &MatchupConfig,
    num_matchups: usize,
    base_seed: u64,
    progress: &ProgressBar,
) -> Vec<GeneratedMatchup> {
    (0..num_matchups)
        .into_par_iter()
        .map(|i| {
            let mut rng = GameRng::new(Some(base_seed.wrapping_add(i as u64)));
            let generated = generate_matchup_detailed(cards, config, &mut rng, false);
            progress.inc(1);
            generated
        })
        .collect()
}

fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

pub fn aggregate_results(generated: &[GeneratedMatchup]) -> AnalysisResults {
    let mut results = AnalysisResults {
        matchups: generated.len(),
        ..AnalysisResults::default()
    };

    let mut life_added = 0usize;
    let mut lands_added = 0usize;
    let mut life_total = 0usize;
    let mut lands_total = 0usize;
    let mut creatures_total = 0usize;
    let mut hand_total = 0usize;
    let mut alpha_total = 0usize;

    for g in generated {
        if let Some(raise) = g.report.life_raise {
            results.life_raised += 1;
            match raise.side {
                Side::One => results.life_raised_side_one += 1,
                Side::Two => results.life_raised_side_two += 1,
            }
            life_added += raise.to.saturating_sub(raise.from).max(0) as usize;
        }
        if let Some(padding) = g.report.land_padding {
            results.lands_padded += 1;
            lands_added += padding.added;
        }

        for board in [&g.matchup.board1, &g.matchup.board2] {
            life_total += board.life.max(0) as usize;
            lands_total += board.lands.len();
            creatures_total += board.creatures.len();
            hand_total += board.hand.len();
            for &color in &board.colors {
                *results.color_counts.entry(color).or_insert(0) += 1;
            }
        }
        alpha_total += g.raw_alpha.unsigned_abs() as usize;
    }

    let sides = generated.len() * 2;
    results.avg_life_added = mean(life_added, results.life_raised);
    results.avg_lands_added = mean(lands_added, results.lands_padded);
    results.avg_life = mean(life_total, sides);
    results.avg_lands = mean(lands_total, sides);
    results.avg_creatures = mean(creatures_total, sides);
    results.avg_hand = mean(hand_total, sides);
    results.avg_abs_alpha = mean(alpha_total, generated.len());

    results
}
