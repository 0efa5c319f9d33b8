use serde::{Deserialize, Serialize};

/// A per-player purchased enhancement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub id: u32,
    pub player_id: u32,
    /// Open-ended discriminator. Conventional values are `click_power`,
    /// `auto_click` and `energy_regen`, but the store does not validate
    /// against an enumeration.
    #[serde(rename = "type")]
    pub kind: String,
    pub level: i32,
}

/// Creation payload for an upgrade. `level` defaults to 1 when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUpgrade {
    pub player_id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
}

/// Partial update for an upgrade. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
}

impl Upgrade {
    /// Applies a partial update, replacing only the fields present.
    pub fn apply_patch(&mut self, patch: UpgradePatch) {
        if let Some(player_id) = patch.player_id {
            self.player_id = player_id;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
    }
}
