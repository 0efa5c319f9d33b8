use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use cointap_game::models::{NewPlayer, Player, PlayerPatch};
use cointap_types::{ApplicationError, Result, StoreError};

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Creates a player from the caller-supplied fields merged with the
    /// starting defaults, and returns the full record.
    async fn create(&self, new_player: NewPlayer) -> Result<Player, ApplicationError>;

    /// Returns the player, or `None` for an unknown id. Never fails.
    async fn get_by_id(&self, player_id: u32) -> Result<Option<Player>, ApplicationError>;

    /// Applies a partial update and returns the merged record.
    async fn patch(&self, player_id: u32, patch: PlayerPatch) -> Result<Player, ApplicationError>;
}

#[derive(Debug)]
struct PlayerTable {
    next_id: u32,
    players: HashMap<u32, Player>,
}

/// Process-local player storage: a map keyed by an auto-incrementing id
/// starting at 1, owned by this repository instance.
#[derive(Debug)]
pub struct MemoryPlayerRepository {
    table: Mutex<PlayerTable>,
}

impl MemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(PlayerTable {
                next_id: 1,
                players: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PlayerTable>, ApplicationError> {
        self.table
            .lock()
            .map_err(|_| ApplicationError::Infrastructure("player table lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl PlayerRepository for MemoryPlayerRepository {
    async fn create(&self, new_player: NewPlayer) -> Result<Player, ApplicationError> {
        let mut table = self.lock()?;
        let id = table.next_id;
        table.next_id += 1;

        // No uniqueness check on username: duplicate creates succeed.
        let player = Player::new(id, new_player.username, Utc::now());
        table.players.insert(id, player.clone());

        tracing::debug!(player_id = id, "player created");
        Ok(player)
    }

    async fn get_by_id(&self, player_id: u32) -> Result<Option<Player>, ApplicationError> {
        let table = self.lock()?;
        Ok(table.players.get(&player_id).cloned())
    }

    async fn patch(&self, player_id: u32, patch: PlayerPatch) -> Result<Player, ApplicationError> {
        let mut table = self.lock()?;
        let player = table
            .players
            .get_mut(&player_id)
            .ok_or(StoreError::PlayerNotFound(player_id))?;

        player.apply_patch(patch);
        Ok(player.clone())
    }
}
