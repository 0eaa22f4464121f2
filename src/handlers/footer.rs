use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        footer::{
            CreateSocialLinkRequest, Footer, SocialLink, UpdateFooterDescriptionRequest,
            UpdateSocialLinkRequest, UpsertFooterRequest,
        },
    },
    services::footer::FooterService,
    validation::{ValidatedJson, ValidatedPath},
};

#[utoipa::path(
    post,
    path = "/footer",
    request_body = UpsertFooterRequest,
    responses((status = 201, description = "Footer saved", body = Footer)),
    tag = "footer"
)]
pub async fn upsert_footer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpsertFooterRequest>,
) -> AppResult<(StatusCode, Json<Stored<Footer>>)> {
    let footer = FooterService::new(state.repo).upsert(payload).await?;
    Ok((StatusCode::CREATED, Json(footer)))
}

#[utoipa::path(
    get,
    path = "/footer",
    responses(
        (status = 200, description = "Footer", body = Footer),
        (status = 404, description = "Footer not found")
    ),
    tag = "footer"
)]
pub async fn get_footer(State(state): State<AppState>) -> AppResult<Json<Stored<Footer>>> {
    Ok(Json(FooterService::new(state.repo).get().await?))
}

/// update_description
///
/// [Admin Route] Blank fields are ignored.
#[utoipa::path(
    patch,
    path = "/footer/description",
    request_body = UpdateFooterDescriptionRequest,
    responses(
        (status = 200, description = "Description updated", body = Footer),
        (status = 404, description = "Footer not found")
    ),
    tag = "footer"
)]
pub async fn update_description(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateFooterDescriptionRequest>,
) -> AppResult<Json<Stored<Footer>>> {
    Ok(Json(FooterService::new(state.repo).update_description(payload).await?))
}

// --- Social links ---

#[utoipa::path(
    post,
    path = "/footer/social-links",
    request_body = CreateSocialLinkRequest,
    responses(
        (status = 201, description = "Link added", body = Footer),
        (status = 404, description = "Footer not found")
    ),
    tag = "footer"
)]
pub async fn add_social_link(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSocialLinkRequest>,
) -> AppResult<(StatusCode, Json<Stored<Footer>>)> {
    let footer = FooterService::new(state.repo).add_social_link(payload).await?;
    Ok((StatusCode::CREATED, Json(footer)))
}

#[utoipa::path(
    get,
    path = "/footer/social-links",
    responses(
        (status = 200, description = "Social links", body = [SocialLink]),
        (status = 404, description = "Footer not found")
    ),
    tag = "footer"
)]
pub async fn list_social_links(State(state): State<AppState>) -> AppResult<Json<Vec<SocialLink>>> {
    Ok(Json(FooterService::new(state.repo).social_links().await?))
}

#[utoipa::path(
    patch,
    path = "/footer/social-links/{link_id}",
    params(("link_id" = Uuid, Path, description = "Social link id")),
    request_body = UpdateSocialLinkRequest,
    responses(
        (status = 200, description = "Link updated", body = Footer),
        (status = 404, description = "Footer or link not found")
    ),
    tag = "footer"
)]
pub async fn update_social_link(
    State(state): State<AppState>,
    ValidatedPath(link_id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateSocialLinkRequest>,
) -> AppResult<Json<Stored<Footer>>> {
    let footer = FooterService::new(state.repo)
        .update_social_link(link_id, payload)
        .await?;
    Ok(Json(footer))
}

#[utoipa::path(
    delete,
    path = "/footer/social-links/{link_id}",
    params(("link_id" = Uuid, Path, description = "Social link id")),
    responses(
        (status = 200, description = "Link removed", body = Footer),
        (status = 404, description = "Footer or link not found")
    ),
    tag = "footer"
)]
pub async fn delete_social_link(
    State(state): State<AppState>,
    ValidatedPath(link_id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Footer>>> {
    Ok(Json(FooterService::new(state.repo).delete_social_link(link_id).await?))
}
