use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use cointap_game::models::{NewPlayer, Player, PlayerPatch};
use cointap_types::StoreError;

use crate::{
    handlers::{ApiError, validation_error},
    http::AppState,
};

/// POST /api/players
///
/// Only `username` is accepted from the caller; every other field is a
/// store default. A malformed body leaves no side effect.
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(new_player) = payload.map_err(validation_error)?;
    let player = state.store.players().create(new_player).await?;

    Ok(Json(player))
}

/// GET /api/players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .store
        .players()
        .get_by_id(id)
        .await?
        .ok_or(StoreError::PlayerNotFound(id))?;

    Ok(Json(player))
}

/// PATCH /api/players/{id}
///
/// Applies whatever subset of player fields the body carries; unknown ids
/// are a 404.
pub async fn patch_player(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    payload: Result<Json<PlayerPatch>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(patch) = payload.map_err(validation_error)?;
    let player = state.store.players().patch(id, patch).await?;

    Ok(Json(player))
}
