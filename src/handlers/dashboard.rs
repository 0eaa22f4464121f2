use axum::{Json, extract::State};

use crate::{
    AppState,
    error::AppResult,
    models::dashboard::{Activity, ActivityParams, DashboardStats},
    services::dashboard::DashboardService,
    validation::ValidatedQuery,
};

/// get_stats
///
/// [Admin Route] Overview counters for the admin dashboard.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses((status = 200, description = "Dashboard overview", body = DashboardStats)),
    tag = "dashboard"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(DashboardService::new(state.repo).stats().await?))
}

/// get_activity
///
/// [Admin Route] Recent creations across courses, events, faculty and gallery.
#[utoipa::path(
    get,
    path = "/dashboard/activity",
    params(ActivityParams),
    responses((status = 200, description = "Newest first", body = [Activity])),
    tag = "dashboard"
)]
pub async fn get_activity(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ActivityParams>,
) -> AppResult<Json<Vec<Activity>>> {
    Ok(Json(DashboardService::new(state.repo).activity(params.limit).await?))
}
