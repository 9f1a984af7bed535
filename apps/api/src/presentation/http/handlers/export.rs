use crate::{
    application::{
        browse::dto::{BrowseQuery, FilterSpec},
        export::use_case::{ExportKind, ExportUseCase},
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

async fn export(state: AppState, kind: ExportKind, query: BrowseQuery) -> Result<Response, AppError> {
    let spec = FilterSpec::try_from(query).map_err(AppError::BadRequest)?;
    let export = ExportUseCase::new(state.browse())
        .execute(kind, &spec, Utc::now())
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.body,
    )
        .into_response())
}

pub async fn export_places(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, AppError> {
    export(state, ExportKind::Places, query).await
}

pub async fn export_contributions(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, AppError> {
    export(state, ExportKind::Contributions, query).await
}

pub async fn export_locations(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, AppError> {
    export(state, ExportKind::Locations, query).await
}
