use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, path::Path};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use cointap_app::store::Store;
use cointap_types::{ApplicationError, Result};

use crate::handlers::{add_upgrade, create_player, get_player, list_player_upgrades, patch_player};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> AppState {
        AppState { store }
    }
}

pub struct WebRouter {}

impl WebRouter {
    /// Builds the full router: the JSON API under `/api` and the static
    /// client for everything else, falling back to `index.html` so deep
    /// links resolve to the single-page client.
    pub fn router(state: AppState, public_dir: &str) -> Router {
        let index = Path::new(public_dir).join("index.html");
        let assets = ServeDir::new(public_dir).not_found_service(ServeFile::new(index));

        Router::new()
            .route("/api/players", post(create_player))
            .route("/api/players/{id}", get(get_player).patch(patch_player))
            .route("/api/players/{id}/upgrades", get(list_player_upgrades))
            .route("/api/upgrades", post(add_upgrade))
            .fallback_service(assets)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16, public_dir: &str) -> Result<(), ApplicationError> {
        let router = Self::router(state, public_dir);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            let err = format!("{:#?}", e);
            ApplicationError::Infrastructure(err)
        })?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
