use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use cointap_game::models::{NewUpgrade, Upgrade};

use crate::{
    handlers::{ApiError, validation_error},
    http::AppState,
};

/// POST /api/upgrades
pub async fn add_upgrade(
    State(state): State<AppState>,
    payload: Result<Json<NewUpgrade>, JsonRejection>,
) -> Result<Json<Upgrade>, ApiError> {
    let Json(new_upgrade) = payload.map_err(validation_error)?;
    let upgrade = state.store.upgrades().add(new_upgrade).await?;

    Ok(Json(upgrade))
}

/// GET /api/players/{id}/upgrades
///
/// Always succeeds; an unknown player id yields an empty array.
pub async fn list_player_upgrades(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Upgrade>>, ApiError> {
    let upgrades = state.store.upgrades().list_by_player_id(id).await?;

    Ok(Json(upgrades))
}
