use std::sync::Arc;

use crate::repository::{
    MemoryPlayerRepository, MemoryUpgradeRepository, PlayerRepository, UpgradeRepository,
};

/// Handle to the entity store. One store is constructed per process and
/// passed around by cloning the handle; it owns its own maps and counters,
/// so tests can build isolated instances.
#[derive(Clone)]
pub struct Store {
    players: Arc<dyn PlayerRepository>,
    upgrades: Arc<dyn UpgradeRepository>,
}

impl Store {
    /// Builds a store backed by process memory. Nothing survives a restart.
    pub fn in_memory() -> Self {
        Self {
            players: Arc::new(MemoryPlayerRepository::new()),
            upgrades: Arc::new(MemoryUpgradeRepository::new()),
        }
    }

    pub fn players(&self) -> Arc<dyn PlayerRepository> {
        self.players.clone()
    }

    pub fn upgrades(&self) -> Arc<dyn UpgradeRepository> {
        self.upgrades.clone()
    }
}
