use crate::{
    application::{
        browse::dto::FilterSpec,
        statistics::{
            dto::{StatisticsQuery, StatisticsResponse},
            use_case::StatisticsUseCase,
        },
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let spec = FilterSpec::try_from(query).map_err(AppError::BadRequest)?;
    let use_case = StatisticsUseCase::new(state.browse());
    Ok(Json(use_case.execute(&spec, Utc::now()).await))
}
