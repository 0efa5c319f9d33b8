use cointap_app::{config::Config, store::Store};
use cointap_types::{ApplicationError, Result};
use cointap_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();

    let config = Config::from_env();
    let store = Store::in_memory();
    let state = AppState::new(store);

    WebRouter::serve(state, config.port, &config.public_dir).await
}
