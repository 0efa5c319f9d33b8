mod helpers;
mod player_handler;
mod upgrade_handler;

pub use helpers::ApiError;
pub(crate) use helpers::validation_error;
pub use player_handler::{create_player, get_player, patch_player};
pub use upgrade_handler::{add_upgrade, list_player_upgrades};
