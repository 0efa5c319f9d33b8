pub mod player;
pub mod session;
pub mod upgrade;

pub use player::{NewPlayer, Player, PlayerPatch};
pub use session::Session;
pub use upgrade::{NewUpgrade, Upgrade, UpgradePatch};
