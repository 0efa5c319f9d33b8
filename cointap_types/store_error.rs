use thiserror::Error;

/// Errors for the entity store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Player with ID {0} not found")]
    PlayerNotFound(u32),

    #[error("Upgrade with ID {0} not found")]
    UpgradeNotFound(u32),
}
