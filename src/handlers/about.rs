use axum::{Json, extract::State};

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        about::{About, AboutView, UpsertAboutRequest},
    },
    services::about::AboutService,
    validation::ValidatedJson,
};

/// upsert_about
///
/// [Admin Route] Creates the about page or overwrites the existing one.
#[utoipa::path(
    post,
    path = "/aboutus",
    request_body = UpsertAboutRequest,
    responses((status = 200, description = "About page saved", body = About)),
    tag = "about"
)]
pub async fn upsert_about(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpsertAboutRequest>,
) -> AppResult<Json<Stored<About>>> {
    Ok(Json(AboutService::new(state.repo).upsert(payload).await?))
}

/// get_about
///
/// [Public Route] Falls back to placeholder content until an admin writes the page.
#[utoipa::path(
    get,
    path = "/aboutus",
    responses((status = 200, description = "About page", body = About)),
    tag = "about"
)]
pub async fn get_about(State(state): State<AppState>) -> AppResult<Json<AboutView>> {
    Ok(Json(AboutService::new(state.repo).find().await?))
}
