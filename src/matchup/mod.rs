pub mod alpha;
pub mod analyze;
pub mod balance;
pub mod board;
pub mod colors;
pub mod config;
pub mod engine;

pub use alpha::alpha_strike;
pub use balance::{balance, BalanceReport, Side, LAND_TOLERANCE};
pub use board::{generate_board, Board, Matchup};
pub use colors::pick_colors;
pub use config::{ConfigError, MatchupConfig};
pub use engine::{generate_matchup, generate_matchup_detailed, GeneratedMatchup};
