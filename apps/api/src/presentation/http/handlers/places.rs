use crate::{
    application::{
        SubmissionReceipt,
        browse::{
            dto::{BrowseQuery, FilterSpec},
            use_case::PlaceListResponse,
        },
        submit_place::{dto::SubmitPlaceRequest, use_case::SubmitPlaceUseCase},
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;

pub async fn list_places(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<PlaceListResponse>, AppError> {
    let spec = FilterSpec::try_from(query).map_err(AppError::BadRequest)?;
    Ok(Json(state.browse().place_list(&spec, Utc::now()).await))
}

pub async fn create_place(
    State(state): State<AppState>,
    Json(request): Json<SubmitPlaceRequest>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError> {
    let use_case = SubmitPlaceUseCase::new(state.places.clone(), state.geocoder.clone());
    let receipt = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
