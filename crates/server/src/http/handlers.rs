//! Player route handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use roster_core::{Player, PlayerPatch};
use roster_runtime::PlayerService;

use super::error::ApiError;
use super::params::PlayerQuery;

type ApiResult<T> = Result<T, ApiError>;

/// List one page of players matching the query filters.
pub(super) async fn list_players(
    State(service): State<PlayerService>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Player>>> {
    let Query(query) = query.map_err(|e| ApiError::Malformed(e.body_text()))?;
    let players = service.list(
        &query.filter(),
        query.page_number(),
        query.page_size(),
        query.order(),
    )?;
    Ok(Json(players))
}

/// Count players matching the query filters.
pub(super) async fn count_players(
    State(service): State<PlayerService>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<Json<usize>> {
    let Query(query) = query.map_err(|e| ApiError::Malformed(e.body_text()))?;
    Ok(Json(service.count(&query.filter())?))
}

pub(super) async fn create_player(
    State(service): State<PlayerService>,
    payload: Result<Json<PlayerPatch>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let Json(payload) = payload.map_err(|e| ApiError::Malformed(e.body_text()))?;
    Ok(Json(service.create(payload)?))
}

pub(super) async fn get_player(
    State(service): State<PlayerService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Player>> {
    let Path(id) = id.map_err(|e| ApiError::Malformed(e.body_text()))?;
    Ok(Json(service.get_by_id(id)?))
}

/// Delete a player; success carries no body.
pub(super) async fn delete_player(
    State(service): State<PlayerService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(|e| ApiError::Malformed(e.body_text()))?;
    service.delete_by_id(id)?;
    Ok(StatusCode::OK)
}

pub(super) async fn update_player(
    State(service): State<PlayerService>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PlayerPatch>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let Path(id) = id.map_err(|e| ApiError::Malformed(e.body_text()))?;
    let Json(payload) = payload.map_err(|e| ApiError::Malformed(e.body_text()))?;
    Ok(Json(service.update_by_id(id, payload)?))
}
