use crate::card::{filter_pool, Card, Color};
use crate::matchup::balance::{balance, BalanceReport};
use crate::matchup::board::{generate_board, Board, Matchup};
use crate::matchup::colors::pick_colors;
use crate::matchup::config::MatchupConfig;
use crate::matchup::alpha::alpha_strike;
use crate::rng::GameRng;

/// A balanced matchup plus what the balancer had to change
#[derive(Debug, Clone)]
pub struct GeneratedMatchup {
    pub matchup: Matchup,
    /// Alpha strike before balancing
    pub raw_alpha: i32,
    pub report: BalanceReport,
}

fn generate_side(
    pool: &[Card],
    config: &MatchupConfig,
    rng: &mut GameRng,
    verbose: bool,
) -> Board {
    let colors = pick_colors(&Color::ALL, config.num_colors, rng);
    if verbose {
        println!("[Colors] {:?}", colors);
    }
    generate_board(pool, &colors, config, rng, verbose)
}

/// Filter the collection, sample both sides and balance them
pub fn generate_matchup_detailed(
    cards: &[Card],
    config: &MatchupConfig,
    rng: &mut GameRng,
    verbose: bool,
) -> GeneratedMatchup {
    let pool = filter_pool(cards, &config.banned_names);
    if verbose {
        println!("[Pool] {} of {} cards playable", pool.len(), cards.len());
    }

    let board1 = generate_side(&pool, config, rng, verbose);
    let board2 = generate_side(&pool, config, rng, verbose);
    let raw_alpha = alpha_strike(&board1.creatures, &board2.creatures);

    let (matchup, report) = balance(Matchup { board1, board2 }, config.alpha_buffer, rng, verbose);

    GeneratedMatchup {
        matchup,
        raw_alpha,
        report,
    }
}

/// Generate one balanced matchup from a card collection
pub fn generate_matchup(
    cards: &[Card],
    config: &MatchupConfig,
    rng: &mut GameRng,
    verbose: bool,
) -> Matchup {
    generate_matchup_detailed(cards, config, rng, verbose).matchup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardDatabase;
    use crate::matchup::balance::LAND_TOLERANCE;

    #[test]
    fn test_matchup_is_balanced() {
        let db = CardDatabase::from_file("cards.json").expect("Failed to load cards");
        let config = MatchupConfig::default();

        for seed in 0..300 {
            let mut rng = GameRng::new(Some(seed));
            let m = generate_matchup(db.cards(), &config, &mut rng, false);

            let alpha = alpha_strike(&m.board1.creatures, &m.board2.creatures);
            assert!(alpha < m.board2.life, "seed {}: side 1 has lethal", seed);
            assert!(-alpha < m.board1.life, "seed {}: side 2 has lethal", seed);

            let gap = m.board1.lands.len().abs_diff(m.board2.lands.len());
            assert!(gap <= LAND_TOLERANCE, "seed {}: land gap {}", seed, gap);
        }
    }

    #[test]
    fn test_banned_cards_never_appear() {
        let db = CardDatabase::from_file("cards.json").expect("Failed to load cards");
        let config = MatchupConfig::default();

        for seed in 0..200 {
            let mut rng = GameRng::new(Some(seed));
            let m = generate_matchup(db.cards(), &config, &mut rng, false);
            for board in [&m.board1, &m.board2] {
                for c in board.hand.iter().chain(board.creatures.iter()) {
                    assert!(!config.banned_names.contains(&c.name), "{} is banned", c.name);
                    assert!(c.is_front(), "{} is a back face", c.name);
                }
            }
        }
    }

    #[test]
    fn test_report_matches_changes() {
        let db = CardDatabase::from_file("cards.json").expect("Failed to load cards");
        let config = MatchupConfig::default();

        for seed in 0..200 {
            let mut rng = GameRng::new(Some(seed));
            let generated = generate_matchup_detailed(db.cards(), &config, &mut rng, false);
            if let Some(raise) = generated.report.life_raise {
                assert_eq!(raise.alpha, generated.raw_alpha);
                assert!(raise.to > raise.from, "Life only goes up");
            }
        }
    }
}
