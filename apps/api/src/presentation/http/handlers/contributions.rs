use crate::{
    application::{
        SubmissionReceipt,
        browse::{
            dto::{BrowseQuery, FilterSpec},
            use_case::ContributionListResponse,
        },
        submit_contribution::{
            dto::{SubmitContributionRequest, UploadedFile},
            use_case::SubmitContributionUseCase,
        },
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
};
use chrono::Utc;

pub async fn list_contributions(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<ContributionListResponse>, AppError> {
    let spec = FilterSpec::try_from(query).map_err(AppError::BadRequest)?;
    Ok(Json(state.browse().contribution_list(&spec, Utc::now()).await))
}

fn parse_coordinate(name: &str, raw: &str) -> Result<Option<f64>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(AppError::ValidationError(format!("{name} must be a number"))),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes")
}

/// Reads the multipart form into a submission request. Unknown fields are
/// ignored; a `file` part with no bytes counts as no file.
async fn read_form(mut multipart: Multipart) -> Result<SubmitContributionRequest, AppError> {
    let mut request = SubmitContributionRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;
            if !data.is_empty() {
                request.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            continue;
        }

        let value = field.text().await?;
        match name.as_str() {
            "title" => request.title = value,
            "category" => request.category = value,
            "description" => request.description = Some(value),
            "latitude" => request.latitude = parse_coordinate("Latitude", &value)?,
            "longitude" => request.longitude = parse_coordinate("Longitude", &value)?,
            "location_address" => request.location_address = Some(value),
            "contributor_name" => request.contributor_name = Some(value),
            "resolve_address" => request.resolve_address = parse_flag(&value),
            _ => {}
        }
    }

    Ok(request)
}

pub async fn create_contribution(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError> {
    let request = read_form(multipart).await?;
    let use_case = SubmitContributionUseCase::new(
        state.contributions.clone(),
        state.storage.clone(),
        state.geocoder.clone(),
        state.config.max_upload_bytes,
    );
    let receipt = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
