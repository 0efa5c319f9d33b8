mod player_repository;
mod upgrade_repository;

pub use player_repository::{MemoryPlayerRepository, PlayerRepository};
pub use upgrade_repository::{MemoryUpgradeRepository, UpgradeRepository};
