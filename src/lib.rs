pub mod card;
pub mod matchup;
pub mod rng;
