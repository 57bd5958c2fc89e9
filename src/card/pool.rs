use crate::card::types::Card;
use std::collections::BTreeSet;

/// Returns true if the card is not on the banned list
pub fn is_allowed(card: &Card, banned: &BTreeSet<String>) -> bool {
    !banned.contains(&card.name)
}

/// Build the playable pool: drop banned cards and non-front faces
pub fn filter_pool(cards: &[Card], banned: &BTreeSet<String>) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| c.is_front() && is_allowed(c, banned))
        .cloned()
        .collect()
}
