use crate::card::types::Card;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardDatabaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Card data must be a JSON array of card records")]
    NotAnArray,
    #[error("Card not found: {0}")]
    CardNotFound(String),
}

/// Card collection loaded from provider JSON
pub struct CardDatabase {
    cards: Vec<Card>,
    skipped: usize,
}

impl CardDatabase {
    /// Load cards from a JSON file
    pub fn from_file(path: &str) -> Result<Self, CardDatabaseError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a JSON array of card records.
    /// Records that don't form a valid card are skipped rather than failing the load.
    pub fn from_json_str(content: &str) -> Result<Self, CardDatabaseError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let records = match value {
            serde_json::Value::Array(records) => records,
            _ => return Err(CardDatabaseError::NotAnArray),
        };

        let mut cards = Vec::with_capacity(records.len());
        let mut skipped = 0;
        for record in records {
            match serde_json::from_value::<Card>(record) {
                Ok(card) => cards.push(card),
                Err(_) => skipped += 1,
            }
        }

        Ok(CardDatabase { cards, skipped })
    }

    /// All cards in load order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by name
    pub fn get_card(&self, name: &str) -> Result<&Card, CardDatabaseError> {
        self.cards
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CardDatabaseError::CardNotFound(name.to_string()))
    }

    /// Get total number of cards
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of malformed records dropped while loading
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }
}
