use crate::matchup::alpha::alpha_strike;
use crate::matchup::board::{Board, Matchup};
use crate::rng::GameRng;
use serde::Serialize;

/// Largest land gap left alone between the two sides
pub const LAND_TOLERANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    One,
    Two,
}

/// Life raised on one side because the other side had lethal on board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeRaise {
    pub side: Side,
    pub alpha: i32,
    pub from: i32,
    pub to: i32,
}

/// Extra land copies given to the side that was short
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LandPadding {
    pub side: Side,
    pub added: usize,
}

/// What the balancer changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub life_raise: Option<LifeRaise>,
    pub land_padding: Option<LandPadding>,
}

impl BalanceReport {
    pub fn is_noop(&self) -> bool {
        self.life_raise.is_none() && self.land_padding.is_none()
    }
}

/// Life high enough to survive `alpha`, plus a random cushion of 1..=buffer.
/// Saturates at `i32::MAX`.
fn raised_life(alpha: i32, buffer: u32, rng: &mut GameRng) -> i32 {
    let cushion = i32::try_from(rng.random_inclusive(1, buffer.max(1))).unwrap_or(i32::MAX);
    alpha.saturating_add(cushion)
}

/// Raise the defender's life when the attacker's guaranteed damage is already lethal.
pub fn remove_trivial_attacks(
    mut matchup: Matchup,
    alpha_buffer: u32,
    rng: &mut GameRng,
) -> (Matchup, Option<LifeRaise>) {
    let alpha = alpha_strike(&matchup.board1.creatures, &matchup.board2.creatures);

    let (side, board) = if alpha >= matchup.board2.life {
        (Side::Two, &mut matchup.board2)
    } else if alpha.saturating_neg() >= matchup.board1.life {
        (Side::One, &mut matchup.board1)
    } else {
        return (matchup, None);
    };

    let from = board.life;
    board.life = raised_life(alpha.saturating_abs(), alpha_buffer, rng);
    let raise = LifeRaise {
        side,
        alpha,
        from,
        to: board.life,
    };

    (matchup, Some(raise))
}

/// Repeat the board's last land until it has `target` lands
fn pad_lands(board: &mut Board, target: usize) -> usize {
    let Some(last) = board.lands.last().cloned() else {
        return 0;
    };
    let added = target.saturating_sub(board.lands.len());
    board.lands.extend(std::iter::repeat(last).take(added));
    added
}

/// Bring the land counts within `LAND_TOLERANCE` of each other
pub fn equalize_lands(mut matchup: Matchup) -> (Matchup, Option<LandPadding>) {
    let lands1 = matchup.board1.lands.len();
    let lands2 = matchup.board2.lands.len();

    let (side, board, target) = if lands1 > lands2 + LAND_TOLERANCE {
        (Side::Two, &mut matchup.board2, lands1 - LAND_TOLERANCE)
    } else if lands2 > lands1 + LAND_TOLERANCE {
        (Side::One, &mut matchup.board1, lands2 - LAND_TOLERANCE)
    } else {
        return (matchup, None);
    };

    let added = pad_lands(board, target);
    let padding = (added > 0).then_some(LandPadding { side, added });
    (matchup, padding)
}

/// Run both balancing passes and report what changed
pub fn balance(
    matchup: Matchup,
    alpha_buffer: u32,
    rng: &mut GameRng,
    verbose: bool,
) -> (Matchup, BalanceReport) {
    let (matchup, life_raise) = remove_trivial_attacks(matchup, alpha_buffer, rng);
    let (matchup, land_padding) = equalize_lands(matchup);

    if verbose {
        match life_raise {
            Some(r) => println!(
                "[Balance] Alpha strike of {} was lethal, side {:?} life {} -> {}",
                r.alpha, r.side, r.from, r.to
            ),
            None => println!("[Balance] No trivial attack"),
        }
        match land_padding {
            Some(p) => println!("[Balance] Side {:?} padded with {} land(s)", p.side, p.added),
            None => println!("[Balance] Lands within {}", LAND_TOLERANCE),
        }
    }

    (matchup, BalanceReport { life_raise, land_padding })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Color};

    fn creature(power: i32) -> Card {
        Card {
            name: format!("Creature {}", power),
            colors: Vec::new(),
            types: vec!["Creature".to_string()],
            cmc: 2,
            power: Some(power.to_string()),
            image_url: None,
            multiverse_id: None,
            names: None,
        }
    }

    fn board(powers: &[i32], land_colors: &[Color], life: i32) -> Board {
        let mut lands: Vec<Card> = land_colors.iter().map(|&c| Card::basic_land(c)).collect();
        lands.sort_by(|a, b| a.name.cmp(&b.name));
        Board {
            colors: Vec::new(),
            hand: Vec::new(),
            creatures: powers.iter().map(|&p| creature(p)).collect(),
            lands,
            life,
        }
    }

    fn matchup(board1: Board, board2: Board) -> Matchup {
        Matchup { board1, board2 }
    }

    const THREE_LANDS: [Color; 3] = [Color::Red, Color::Red, Color::White];

    #[test]
    fn test_lethal_alpha_raises_defender_life() {
        let mut rng = GameRng::new(Some(1));
        for _ in 0..100 {
            let m = matchup(board(&[1, 2, 3], &THREE_LANDS, 10), board(&[5], &THREE_LANDS, 2));
            let (m, raise) = remove_trivial_attacks(m, 5, &mut rng);

            let raise = raise.expect("3 damage against 2 life is lethal");
            assert_eq!(raise.side, Side::Two);
            assert_eq!(raise.alpha, 3);
            assert_eq!(raise.from, 2);
            assert!(m.board2.life >= 4 && m.board2.life <= 8, "life was {}", m.board2.life);
            assert_eq!(m.board1.life, 10);
        }
    }

    #[test]
    fn test_symmetric_raise_for_side_one() {
        let mut rng = GameRng::new(Some(2));
        let m = matchup(board(&[], &THREE_LANDS, 3), board(&[4], &THREE_LANDS, 20));
        let (m, raise) = remove_trivial_attacks(m, 5, &mut rng);

        let raise = raise.expect("4 damage against 3 life is lethal");
        assert_eq!(raise.side, Side::One);
        assert_eq!(raise.alpha, -4);
        assert!(m.board1.life > 4 && m.board1.life <= 9);
        assert_eq!(m.board2.life, 20);
    }

    #[test]
    fn test_non_lethal_alpha_is_untouched() {
        let mut rng = GameRng::new(Some(3));
        let original = matchup(board(&[1, 2], &THREE_LANDS, 10), board(&[], &THREE_LANDS, 4));
        let (m, raise) = remove_trivial_attacks(original.clone(), 5, &mut rng);
        assert!(raise.is_none());
        assert_eq!(m, original);
    }

    #[test]
    fn test_zero_buffer_still_clears_lethal() {
        let mut rng = GameRng::new(Some(4));
        let m = matchup(board(&[6], &THREE_LANDS, 1), board(&[], &THREE_LANDS, 6));
        let (m, _) = remove_trivial_attacks(m, 0, &mut rng);
        assert_eq!(m.board2.life, 7);
    }

    #[test]
    fn test_huge_alpha_saturates_life() {
        let mut rng = GameRng::new(Some(7));
        let m = matchup(board(&[i32::MAX], &THREE_LANDS, 20), board(&[], &THREE_LANDS, 1));
        let (m, report) = balance(m, 5, &mut rng, false);

        let raise = report.life_raise.expect("side one has lethal");
        assert_eq!(raise.alpha, i32::MAX);
        assert_eq!(m.board2.life, i32::MAX);

        let m = matchup(board(&[], &THREE_LANDS, 1), board(&[i32::MAX], &THREE_LANDS, 20));
        let (m, report) = balance(m, u32::MAX, &mut rng, false);
        let raise = report.life_raise.expect("side two has lethal");
        assert_eq!(raise.side, Side::One);
        assert_eq!(raise.alpha, -i32::MAX);
        assert_eq!(m.board1.life, i32::MAX);
    }

    #[test]
    fn test_degenerate_empty_boards() {
        let mut rng = GameRng::new(Some(5));
        let original = matchup(board(&[], &[], 1), board(&[], &[], 1));
        let (m, report) = balance(original.clone(), 5, &mut rng, false);
        assert!(report.is_noop());
        assert_eq!(m, original);
    }

    #[test]
    fn test_land_gap_is_closed_to_tolerance() {
        let big = [Color::Green; 7];
        let m = matchup(board(&[], &big, 10), board(&[], &[Color::Blue, Color::Black], 10));
        let (m, padding) = equalize_lands(m);

        assert_eq!(padding, Some(LandPadding { side: Side::Two, added: 3 }));
        assert_eq!(m.board1.lands.len(), 7);
        assert_eq!(m.board2.lands.len(), 5);
        // Swamp sorts after Island, so Swamp is repeated
        let swamps = m.board2.lands.iter().filter(|l| l.name == "Swamp").count();
        assert_eq!(swamps, 4);
    }

    #[test]
    fn test_land_gap_side_one() {
        let big = [Color::White; 8];
        let reds = [Color::Red; 3];
        let m = matchup(board(&[], &reds, 10), board(&[], &big, 10));
        let (m, padding) = equalize_lands(m);

        assert_eq!(padding, Some(LandPadding { side: Side::One, added: 3 }));
        assert_eq!(m.board1.lands.len(), 6);
        assert!(m.board1.lands.iter().all(|l| l.name == "Mountain"));
    }

    #[test]
    fn test_land_gap_within_tolerance() {
        let m = matchup(
            board(&[], &[Color::Green; 5], 10),
            board(&[], &[Color::Green; 3], 10),
        );
        let (m, padding) = equalize_lands(m);
        assert!(padding.is_none());
        assert_eq!(m.board2.lands.len(), 3);
    }

    #[test]
    fn test_side_without_lands_cannot_be_padded() {
        let m = matchup(board(&[], &[Color::Green; 6], 10), board(&[], &[], 10));
        let (m, padding) = equalize_lands(m);
        assert!(padding.is_none());
        assert!(m.board2.lands.is_empty());
    }

    #[test]
    fn test_balance_is_idempotent() {
        let mut rng = GameRng::new(Some(6));
        let m = matchup(
            board(&[1, 1, 2, 5], &[Color::Black; 8], 12),
            board(&[3], &[Color::Red, Color::Blue, Color::Blue], 3),
        );
        let (once, report) = balance(m, 5, &mut rng, false);
        assert!(report.life_raise.is_some());
        assert!(report.land_padding.is_some());

        let (twice, report) = balance(once.clone(), 5, &mut rng, false);
        assert!(report.is_noop());
        assert_eq!(once, twice);
    }
}
