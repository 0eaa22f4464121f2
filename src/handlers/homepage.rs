use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        homepage::{
            HeroSection, HomePage, UpdateHeroSectionRequest, UpdateWhyChooseUsRequest, WhyChooseUs,
        },
    },
    services::homepage::HomepageService,
    validation::{ValidatedJson, ValidatedPath},
};

/// get_home
///
/// [Public Route] Hero section (or `null`) plus the "why choose us" items.
#[utoipa::path(
    get,
    path = "/admin/home",
    responses((status = 200, description = "Homepage content", body = HomePage)),
    tag = "homepage"
)]
pub async fn get_home(State(state): State<AppState>) -> AppResult<Json<HomePage>> {
    Ok(Json(HomepageService::new(state.repo).home().await?))
}

/// create_hero
///
/// [Admin Route] Replaces any existing hero section.
#[utoipa::path(
    post,
    path = "/admin/hero-section",
    request_body = HeroSection,
    responses((status = 201, description = "Hero section created", body = HeroSection)),
    tag = "homepage"
)]
pub async fn create_hero(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<HeroSection>,
) -> AppResult<(StatusCode, Json<Stored<HeroSection>>)> {
    let hero = HomepageService::new(state.repo).replace_hero(payload).await?;
    Ok((StatusCode::CREATED, Json(hero)))
}

#[utoipa::path(
    patch,
    path = "/admin/hero-section/{id}",
    params(("id" = Uuid, Path, description = "Hero section id")),
    request_body = UpdateHeroSectionRequest,
    responses(
        (status = 200, description = "Hero section updated", body = HeroSection),
        (status = 404, description = "Hero section not found")
    ),
    tag = "homepage"
)]
pub async fn update_hero(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateHeroSectionRequest>,
) -> AppResult<Json<Stored<HeroSection>>> {
    Ok(Json(HomepageService::new(state.repo).update_hero(id, payload).await?))
}

#[utoipa::path(
    post,
    path = "/admin/why-choose-us",
    request_body = WhyChooseUs,
    responses((status = 201, description = "Item created", body = WhyChooseUs)),
    tag = "homepage"
)]
pub async fn create_reason(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<WhyChooseUs>,
) -> AppResult<(StatusCode, Json<Stored<WhyChooseUs>>)> {
    let reason = HomepageService::new(state.repo).add_reason(payload).await?;
    Ok((StatusCode::CREATED, Json(reason)))
}

#[utoipa::path(
    patch,
    path = "/admin/why-choose-us/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = UpdateWhyChooseUsRequest,
    responses(
        (status = 200, description = "Item updated", body = WhyChooseUs),
        (status = 404, description = "Item not found")
    ),
    tag = "homepage"
)]
pub async fn update_reason(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateWhyChooseUsRequest>,
) -> AppResult<Json<Stored<WhyChooseUs>>> {
    Ok(Json(HomepageService::new(state.repo).update_reason(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/why-choose-us/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deleted item", body = WhyChooseUs),
        (status = 404, description = "Item not found")
    ),
    tag = "homepage"
)]
pub async fn delete_reason(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<WhyChooseUs>>> {
    Ok(Json(HomepageService::new(state.repo).delete_reason(id).await?))
}
