use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use cointap_game::models::{NewUpgrade, Upgrade, UpgradePatch};
use cointap_types::{ApplicationError, Result, StoreError};

#[async_trait::async_trait]
pub trait UpgradeRepository: Send + Sync {
    /// Stores a new upgrade, defaulting `level` to 1 when absent, and
    /// returns the full record. `player_id` is not validated against the
    /// player store.
    async fn add(&self, new_upgrade: NewUpgrade) -> Result<Upgrade, ApplicationError>;

    /// Returns every upgrade belonging to the player, in insertion order.
    /// Unknown player ids yield an empty list; this never fails.
    async fn list_by_player_id(&self, player_id: u32) -> Result<Vec<Upgrade>, ApplicationError>;

    /// Applies a partial update and returns the merged record.
    async fn patch(&self, upgrade_id: u32, patch: UpgradePatch)
    -> Result<Upgrade, ApplicationError>;
}

#[derive(Debug)]
struct UpgradeTable {
    next_id: u32,
    upgrades: HashMap<u32, Upgrade>,
}

/// Process-local upgrade storage with its own id counter, independent from
/// the player counter.
#[derive(Debug)]
pub struct MemoryUpgradeRepository {
    table: Mutex<UpgradeTable>,
}

impl MemoryUpgradeRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(UpgradeTable {
                next_id: 1,
                upgrades: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, UpgradeTable>, ApplicationError> {
        self.table
            .lock()
            .map_err(|_| ApplicationError::Infrastructure("upgrade table lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl UpgradeRepository for MemoryUpgradeRepository {
    async fn add(&self, new_upgrade: NewUpgrade) -> Result<Upgrade, ApplicationError> {
        let mut table = self.lock()?;
        let id = table.next_id;
        table.next_id += 1;

        let upgrade = Upgrade {
            id,
            player_id: new_upgrade.player_id,
            kind: new_upgrade.kind,
            level: new_upgrade.level.unwrap_or(1),
        };
        table.upgrades.insert(id, upgrade.clone());

        tracing::debug!(upgrade_id = id, player_id = upgrade.player_id, "upgrade added");
        Ok(upgrade)
    }

    async fn list_by_player_id(&self, player_id: u32) -> Result<Vec<Upgrade>, ApplicationError> {
        let table = self.lock()?;
        let mut upgrades: Vec<Upgrade> = table
            .upgrades
            .values()
            .filter(|upgrade| upgrade.player_id == player_id)
            .cloned()
            .collect();

        // Ids are allocated sequentially, so this is insertion order.
        upgrades.sort_by_key(|upgrade| upgrade.id);
        Ok(upgrades)
    }

    async fn patch(
        &self,
        upgrade_id: u32,
        patch: UpgradePatch,
    ) -> Result<Upgrade, ApplicationError> {
        let mut table = self.lock()?;
        let upgrade = table
            .upgrades
            .get_mut(&upgrade_id)
            .ok_or(StoreError::UpgradeNotFound(upgrade_id))?;

        upgrade.apply_patch(patch);
        Ok(upgrade.clone())
    }
}
