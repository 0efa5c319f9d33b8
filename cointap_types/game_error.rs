use thiserror::Error;

/// Errors for domain logic (game rules).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Not enough coins: need {needed} more")]
    NotEnoughCoins { needed: i64, available: i64 },

    #[error("Item '{0}' not found in catalog")]
    UnknownItem(String),
}
