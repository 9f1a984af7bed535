use crate::{
    application::dashboard::use_case::{DashboardResponse, DashboardUseCase},
    presentation::http::state::AppState,
};
use axum::{Json, extract::State};

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let use_case = DashboardUseCase::new(
        state.places.clone(),
        state.contributions.clone(),
        state.config.recent_contributions_limit,
    );
    Json(use_case.execute().await)
}
