pub mod database;
pub mod pool;
pub mod types;

pub use database::{CardDatabase, CardDatabaseError};
pub use pool::filter_pool;
pub use types::{Card, Color};
