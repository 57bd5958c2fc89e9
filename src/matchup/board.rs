use crate::card::{Card, Color};
use crate::matchup::config::MatchupConfig;
use crate::rng::GameRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Land count ceiling, whatever the creature curve or configured floor asks for
pub const MAX_LANDS: u32 = 20;

/// One side's starting state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub colors: Vec<Color>,
    pub hand: Vec<Card>,
    pub creatures: Vec<Card>,
    /// Sorted by name so identical basics group together
    pub lands: Vec<Card>,
    pub life: i32,
}

/// Both players' starting states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub board1: Board,
    pub board2: Board,
}

impl Board {
    /// Highest mana value among the creatures, 0 for an empty board
    pub fn max_creature_cmc(&self) -> u32 {
        max_cmc(&self.creatures)
    }

    fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().chain(&self.creatures).chain(&self.lands)
    }
}

impl Matchup {
    /// Art URL for every card on either board, keyed by card name
    pub fn art_urls(&self) -> BTreeMap<String, String> {
        self.board1
            .cards()
            .chain(self.board2.cards())
            .filter_map(|c| c.image_url().map(|url| (c.name.clone(), url)))
            .collect()
    }
}

fn max_cmc(creatures: &[Card]) -> u32 {
    creatures.iter().map(|c| c.cmc).max().unwrap_or(0)
}

pub(crate) fn card_names(cards: &[Card]) -> String {
    cards.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// A card fits a color identity if it is colorless or all of its colors are in the identity
pub fn is_castable(card: &Card, colors: &[Color]) -> bool {
    card.colors.iter().all(|c| colors.contains(c))
}

/// Noncreature, nonland, nonartifact cards
pub fn is_hand_spell(card: &Card) -> bool {
    !card.is_creature() && !card.is_land() && !card.is_artifact()
}

/// One anchor basic per color, then random basics of those colors up to `num_lands`
fn build_lands(colors: &[Color], num_lands: usize, rng: &mut GameRng) -> Vec<Card> {
    let mut lands: Vec<Card> = colors.iter().map(|&c| Card::basic_land(c)).collect();

    for _ in colors.len()..num_lands {
        if let Some(&color) = rng.choose(colors) {
            lands.push(Card::basic_land(color));
        }
    }

    lands.sort_by(|a, b| a.name.cmp(&b.name));
    lands
}

/// Draw a random board for one side from the filtered pool
pub fn generate_board(
    pool: &[Card],
    colors: &[Color],
    config: &MatchupConfig,
    rng: &mut GameRng,
    verbose: bool,
) -> Board {
    let eligible: Vec<&Card> = pool.iter().filter(|c| is_castable(c, colors)).collect();

    let spells: Vec<Card> = eligible
        .iter()
        .filter(|c| is_hand_spell(c))
        .map(|&c| c.clone())
        .collect();
    let (hand_min, hand_max) = config.hand_size_range;
    let hand_size = rng.random_inclusive(hand_min, hand_max) as usize;
    let hand = rng.sample_size(&spells, hand_size);

    let creature_pool: Vec<Card> = eligible
        .iter()
        .filter(|c| c.is_creature())
        .map(|&c| c.clone())
        .collect();
    let (board_min, board_max) = config.board_size_range;
    let board_size = rng.random_inclusive(board_min, board_max) as usize;
    let creatures = rng.sample_size(&creature_pool, board_size);

    // Enough lands to cast the most expensive creature
    let (land_min, land_max) = config.land_range;
    let land_floor = rng.random_inclusive(land_min, land_max);
    let num_lands = max_cmc(&creatures).max(land_floor).min(MAX_LANDS) as usize;
    let lands = build_lands(colors, num_lands.max(colors.len()), rng);

    let (life_min, life_max) = config.life_range;
    let life = i32::try_from(rng.random_inclusive(life_min, life_max)).unwrap_or(i32::MAX);

    if verbose {
        let color_str: String = colors.iter().map(Color::to_char).collect();
        println!(
            "[Board] {} | {} eligible spells, {} eligible creatures",
            color_str,
            spells.len(),
            creature_pool.len()
        );
        println!("  Hand ({}/{}): {}", hand.len(), hand_size, card_names(&hand));
        println!("  Creatures ({}/{}): {}", creatures.len(), board_size, card_names(&creatures));
        println!("  Lands: {}  Life: {}", lands.len(), life);
    }

    Board {
        colors: colors.to_vec(),
        hand,
        creatures,
        lands,
        life,
    }
}
