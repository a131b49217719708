use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use roster_core::validation::checked_id;
use roster_core::{Data, PageRequest, PlayerCriteria, PlayerOrder};
use roster_database::model::{NewPlayer, Player, PlayerPatch};
use roster_utils::parse::parse_player_id;

use super::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderParam {
    pub order: Option<PlayerOrder>,
}

/// `GET /rest/players`
pub async fn list_players(
    State(data): State<Data>,
    criteria: Result<Query<PlayerCriteria>, QueryRejection>,
    order: Result<Query<OrderParam>, QueryRejection>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(criteria) = criteria?;
    let Query(OrderParam { order }) = order?;
    let Query(page) = page?;

    let players = data.players.list(&criteria, order, page).await?;
    Ok(Json(players))
}

/// `GET /rest/players/count`
pub async fn count_players(
    State(data): State<Data>,
    criteria: Result<Query<PlayerCriteria>, QueryRejection>,
) -> Result<Json<usize>, ApiError> {
    let Query(criteria) = criteria?;
    Ok(Json(data.players.count(&criteria).await?))
}

/// `POST /rest/players`
pub async fn create_player(
    State(data): State<Data>,
    input: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(input) = input?;
    Ok(Json(data.players.create(input).await?))
}

/// `GET /rest/players/{id}`
pub async fn get_player(
    State(data): State<Data>,
    Path(raw_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let id = checked_id(parse_player_id(Some(&raw_id)))?;
    Ok(Json(data.players.get_by_id(id).await?))
}

/// `POST /rest/players/{id}`
pub async fn update_player(
    State(data): State<Data>,
    Path(raw_id): Path<String>,
    patch: Result<Json<PlayerPatch>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = checked_id(parse_player_id(Some(&raw_id)))?;
    let Json(patch) = patch?;
    Ok(Json(data.players.update(patch, id).await?))
}

/// `DELETE /rest/players/{id}`
pub async fn delete_player(
    State(data): State<Data>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = checked_id(parse_player_id(Some(&raw_id)))?;
    data.players.delete(id).await?;
    Ok(StatusCode::OK)
}
