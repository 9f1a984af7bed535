use crate::{
    application::map::{
        dto::{ClickQuery, MapQuery, MapResponse, SelectionResponse},
        use_case::MapUseCase,
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

fn use_case(state: &AppState) -> MapUseCase {
    MapUseCase::new(state.browse(), state.config.map_default_center)
}

pub async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Json<MapResponse> {
    Json(use_case(&state).view(&query, Utc::now()).await)
}

pub async fn select_on_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
    Query(click): Query<ClickQuery>,
) -> Result<Json<SelectionResponse>, AppError> {
    let selection = use_case(&state)
        .select(&query, click.lat, click.lon, Utc::now())
        .await?;
    Ok(Json(selection))
}
