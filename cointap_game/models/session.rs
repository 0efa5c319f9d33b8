use chrono::{DateTime, Utc};

use cointap_types::{GameError, Result};

use crate::catalog::{self, Item};
use crate::models::player::{MAX_ENERGY, Player, PlayerPatch};

/// Minimum interval between two accepted clicks, in milliseconds. Soft
/// protection against auto-clickers.
pub const CLICK_COOLDOWN_MS: i64 = 200;

/// Cadence at which the host should drive [`Session::regen_tick`], in
/// milliseconds.
pub const ENERGY_REGEN_INTERVAL_MS: u64 = 1000;

/// Coins granted per accepted click. `click_power` is not wired into the
/// click yet.
pub const COINS_PER_CLICK: i64 = 1;

/// The client-resident progression state for one player.
///
/// Every transition is a pure function of `(state, event, now)`: clicks and
/// regeneration are guarded rather than clamped after the fact, so the
/// session can never hold negative coins or energy outside [0, 100]. Time
/// is always passed in, never read from a clock, which keeps the machine
/// testable without timers.
///
/// Rejected clicks are dropped silently: the caller only sees a `false`
/// return, never an error. Purchases do surface a [`GameError`] so the UI
/// can show an insufficient-funds notice.
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    last_click: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            last_click: None,
        }
    }

    /// Handles a click event at `now`. Returns whether it was accepted.
    ///
    /// A click is accepted only if the cooldown since the previous accepted
    /// click has elapsed and the player has energy left. On acceptance the
    /// player earns coins, the click counter advances and one energy is
    /// spent.
    pub fn click(&mut self, now: DateTime<Utc>) -> bool {
        if let Some(last) = self.last_click {
            if (now - last).num_milliseconds() < CLICK_COOLDOWN_MS {
                tracing::warn!(player_id = self.player.id, "click ignored: too fast");
                return false;
            }
        }

        if self.player.energy <= 0 {
            tracing::debug!(player_id = self.player.id, "click ignored: no energy");
            return false;
        }

        self.player.coins += COINS_PER_CLICK;
        self.player.total_clicks += 1;
        self.player.energy -= 1;
        self.last_click = Some(now);
        true
    }

    /// Handles one energy regeneration tick. Returns whether any energy
    /// was restored; at full energy the tick is a no-op.
    pub fn regen_tick(&mut self) -> bool {
        if self.player.energy >= MAX_ENERGY {
            return false;
        }

        self.player.energy = (self.player.energy + 1).min(MAX_ENERGY);
        true
    }

    /// Purchases a catalog item, deducting its price from the player's
    /// coins. Fails without deducting anything when the item is unknown or
    /// the player cannot afford it.
    pub fn purchase(&mut self, item_id: &str) -> Result<&'static Item, GameError> {
        let item = catalog::find_item(item_id)
            .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;

        if self.player.coins < item.price {
            return Err(GameError::NotEnoughCoins {
                needed: item.price - self.player.coins,
                available: self.player.coins,
            });
        }

        self.player.coins -= item.price;
        tracing::debug!(player_id = self.player.id, item = item.id, "item purchased");

        // TODO: record the purchase as an Upgrade against the player's
        // inventory instead of only deducting coins.
        Ok(item)
    }

    /// The partial update to persist local progress on the server.
    pub fn sync_patch(&self) -> PlayerPatch {
        PlayerPatch {
            coins: Some(self.player.coins),
            total_clicks: Some(self.player.total_clicks),
            energy: Some(self.player.energy),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn setup() -> Session {
        Session::new(Player::new(1, "alice".to_string(), Utc::now()))
    }

    #[test]
    fn test_accepted_clicks_earn_coins_and_spend_energy() {
        let mut session = setup();
        let start = Utc::now();

        for n in 0..10 {
            let now = start + Duration::milliseconds(n * CLICK_COOLDOWN_MS);
            assert!(session.click(now));
        }

        assert_eq!(session.player.coins, 10);
        assert_eq!(session.player.total_clicks, 10);
        assert_eq!(session.player.energy, MAX_ENERGY - 10);
    }

    #[test]
    fn test_click_within_cooldown_is_dropped() {
        let mut session = setup();
        let start = Utc::now();

        assert!(session.click(start));
        assert!(!session.click(start + Duration::milliseconds(CLICK_COOLDOWN_MS - 1)));

        assert_eq!(session.player.coins, 1);
        assert_eq!(session.player.total_clicks, 1);
        assert_eq!(session.player.energy, MAX_ENERGY - 1);
    }

    #[test]
    fn test_cooldown_measures_from_last_accepted_click() {
        let mut session = setup();
        let start = Utc::now();

        assert!(session.click(start));
        // Dropped: too fast. Must not reset the cooldown window.
        assert!(!session.click(start + Duration::milliseconds(150)));
        assert!(session.click(start + Duration::milliseconds(CLICK_COOLDOWN_MS)));

        assert_eq!(session.player.total_clicks, 2);
    }

    #[test]
    fn test_click_with_zero_energy_is_rejected_not_clamped() {
        let mut session = setup();
        session.player.energy = 0;

        assert!(!session.click(Utc::now()));
        assert_eq!(session.player.energy, 0);
        assert_eq!(session.player.coins, 0);
        assert_eq!(session.player.total_clicks, 0);
    }

    #[test]
    fn test_regen_restores_one_energy_and_caps_at_max() {
        let mut session = setup();
        session.player.energy = MAX_ENERGY - 1;

        assert!(session.regen_tick());
        assert_eq!(session.player.energy, MAX_ENERGY);

        // At the cap the tick is a no-op.
        assert!(!session.regen_tick());
        assert_eq!(session.player.energy, MAX_ENERGY);
    }

    #[test]
    fn test_energy_stays_in_bounds_under_mixed_events() {
        let mut session = setup();
        let start = Utc::now();

        for n in 0..300 {
            let now = start + Duration::milliseconds(n * CLICK_COOLDOWN_MS);
            session.click(now);
            if n % 3 == 0 {
                session.regen_tick();
            }
            assert!(session.player.energy >= 0);
            assert!(session.player.energy <= MAX_ENERGY);
        }
    }

    #[test]
    fn test_purchase_rejected_when_unaffordable() {
        let mut session = setup();
        session.player.coins = 99;

        let err = session.purchase("hqd_cuvie").unwrap_err();
        match err {
            GameError::NotEnoughCoins { needed, available } => {
                assert_eq!(needed, 1);
                assert_eq!(available, 99);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // No partial deduction.
        assert_eq!(session.player.coins, 99);
    }

    #[test]
    fn test_purchase_deducts_exactly_the_price() {
        let mut session = setup();
        session.player.coins = 130;

        let item = session.purchase("elf_bar_600").unwrap();
        assert_eq!(item.price, 120);
        assert_eq!(session.player.coins, 10);
    }

    #[test]
    fn test_purchase_of_unknown_item_fails() {
        let mut session = setup();
        session.player.coins = 1000;

        assert!(matches!(
            session.purchase("no_such_item"),
            Err(GameError::UnknownItem(_))
        ));
        assert_eq!(session.player.coins, 1000);
    }

    #[test]
    fn test_sync_patch_carries_local_progress() {
        let mut session = setup();
        let start = Utc::now();
        session.click(start);
        session.click(start + Duration::milliseconds(CLICK_COOLDOWN_MS));

        let patch = session.sync_patch();
        assert_eq!(patch.coins, Some(2));
        assert_eq!(patch.total_clicks, Some(2));
        assert_eq!(patch.energy, Some(MAX_ENERGY - 2));
        assert_eq!(patch.click_power, None);
    }
}
