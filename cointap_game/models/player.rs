use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound for a player's energy.
pub const MAX_ENERGY: i32 = 100;

/// The persisted per-user progression record.
///
/// `id` and `username` are immutable once the record is created; everything
/// else evolves through clicks, regeneration ticks and purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub username: String,
    pub coins: i64,
    pub total_clicks: i64,
    /// Always within [0, MAX_ENERGY].
    pub energy: i32,
    /// Set at creation. No operation updates it afterwards.
    pub last_energy_refill: DateTime<Utc>,
    /// Present in the record but not yet applied by the click logic.
    pub click_power: i32,
    /// Reserved for passive income.
    pub auto_click_power: i32,
}

impl Player {
    /// Returns a fresh player with the starting stats.
    pub fn new(id: u32, username: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            coins: 0,
            total_clicks: 0,
            energy: MAX_ENERGY,
            last_energy_refill: now,
            click_power: 1,
            auto_click_power: 0,
        }
    }

    /// Applies a partial update: only fields present in the patch replace
    /// the stored value. Shallow replace, no deep merging.
    pub fn apply_patch(&mut self, patch: PlayerPatch) {
        if let Some(coins) = patch.coins {
            self.coins = coins;
        }
        if let Some(total_clicks) = patch.total_clicks {
            self.total_clicks = total_clicks;
        }
        if let Some(energy) = patch.energy {
            self.energy = energy;
        }
        if let Some(last_energy_refill) = patch.last_energy_refill {
            self.last_energy_refill = last_energy_refill;
        }
        if let Some(click_power) = patch.click_power {
            self.click_power = click_power;
        }
        if let Some(auto_click_power) = patch.auto_click_power {
            self.auto_click_power = auto_click_power;
        }
    }
}

/// Creation payload. Only the username is accepted from the caller; all
/// other fields are store defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlayer {
    pub username: String,
}

/// Partial update for a player. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_clicks: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_energy_refill: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_power: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_click_power: Option<i32>,
}
