//! Alpha strike math.
//!
//! When one side has more creatures than the other, the defender can block
//! at most one attacker per creature. A sensible defender blocks the biggest
//! attackers, so the damage that is guaranteed to connect is the sum of the
//! weakest excess attackers.

use crate::card::Card;

/// Sum of the `count` smallest powers in a squad
fn weakest_power(creatures: &[Card], count: usize) -> i32 {
    let mut powers: Vec<i32> = creatures.iter().map(Card::power_value).collect();
    powers.sort_unstable();
    powers.iter().take(count).fold(0, |acc, &p| acc.saturating_add(p))
}

/// Guaranteed unblocked damage of an all-out attack.
///
/// Positive values favor `creatures_a`, negative values favor `creatures_b`,
/// and equally sized squads give 0. Sums saturate at the `i32` bounds.
pub fn alpha_strike(creatures_a: &[Card], creatures_b: &[Card]) -> i32 {
    let (len_a, len_b) = (creatures_a.len(), creatures_b.len());

    if len_a > len_b {
        weakest_power(creatures_a, len_a - len_b)
    } else if len_b > len_a {
        weakest_power(creatures_b, len_b - len_a).saturating_neg()
    } else {
        0
    }
}
