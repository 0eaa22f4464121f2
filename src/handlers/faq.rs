use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        MessageResponse, ReorderRequest, Stored,
        course::SearchParams,
        faq::{
            BulkDeleteRequest, BulkStatusRequest, CreateFaqCategoryRequest, CreateFaqRequest, Faq,
            FaqCategory, FaqView, UpdateFaqCategoryRequest, UpdateFaqRequest,
        },
    },
    services::faq::FaqService,
    validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
};

// --- Categories ---

#[utoipa::path(
    get,
    path = "/faq/categories",
    responses((status = 200, description = "FAQ categories by order", body = [FaqCategory])),
    tag = "faq"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<FaqCategory>>>> {
    Ok(Json(FaqService::new(state.repo).categories().await?))
}

#[utoipa::path(
    post,
    path = "/faq/categories",
    request_body = CreateFaqCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = FaqCategory),
        (status = 409, description = "Name already in use")
    ),
    tag = "faq"
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFaqCategoryRequest>,
) -> AppResult<(StatusCode, Json<Stored<FaqCategory>>)> {
    let category = FaqService::new(state.repo).create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    patch,
    path = "/faq/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateFaqCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = FaqCategory),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Name already in use")
    ),
    tag = "faq"
)]
pub async fn update_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateFaqCategoryRequest>,
) -> AppResult<Json<Stored<FaqCategory>>> {
    Ok(Json(FaqService::new(state.repo).update_category(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/faq/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted category", body = FaqCategory),
        (status = 400, description = "Category still used by FAQs"),
        (status = 404, description = "Category not found")
    ),
    tag = "faq"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<FaqCategory>>> {
    Ok(Json(FaqService::new(state.repo).delete_category(id).await?))
}

// --- FAQs ---

/// list_faqs
///
/// [Public Route] Ordered by `order`, categories resolved to their names.
#[utoipa::path(
    get,
    path = "/faq",
    responses((status = 200, description = "FAQs", body = [FaqView])),
    tag = "faq"
)]
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<FaqView>>>> {
    Ok(Json(FaqService::new(state.repo).list().await?))
}

#[utoipa::path(
    get,
    path = "/faq/search",
    params(SearchParams),
    responses((status = 200, description = "Matching FAQs", body = [FaqView])),
    tag = "faq"
)]
pub async fn search_faqs(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> AppResult<Json<Vec<Stored<FaqView>>>> {
    Ok(Json(FaqService::new(state.repo).search(&params.query).await?))
}

#[utoipa::path(
    post,
    path = "/faq",
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "FAQ created", body = FaqView),
        (status = 400, description = "Validation failed or unknown category")
    ),
    tag = "faq"
)]
pub async fn create_faq(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFaqRequest>,
) -> AppResult<(StatusCode, Json<Stored<FaqView>>)> {
    let faq = FaqService::new(state.repo).create(payload).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

#[utoipa::path(
    get,
    path = "/faq/{id}",
    params(("id" = Uuid, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "FAQ", body = FaqView),
        (status = 404, description = "FAQ not found")
    ),
    tag = "faq"
)]
pub async fn get_faq(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<FaqView>>> {
    Ok(Json(FaqService::new(state.repo).get(id).await?))
}

#[utoipa::path(
    patch,
    path = "/faq/{id}",
    params(("id" = Uuid, Path, description = "FAQ id")),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "FAQ updated", body = FaqView),
        (status = 404, description = "FAQ not found")
    ),
    tag = "faq"
)]
pub async fn update_faq(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateFaqRequest>,
) -> AppResult<Json<Stored<FaqView>>> {
    Ok(Json(FaqService::new(state.repo).update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/faq/{id}",
    params(("id" = Uuid, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "Deleted FAQ", body = Faq),
        (status = 404, description = "FAQ not found")
    ),
    tag = "faq"
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Faq>>> {
    Ok(Json(FaqService::new(state.repo).delete(id).await?))
}

#[utoipa::path(
    patch,
    path = "/faq/{id}/reorder",
    params(("id" = Uuid, Path, description = "FAQ id")),
    request_body = ReorderRequest,
    responses((status = 200, description = "Order updated", body = FaqView)),
    tag = "faq"
)]
pub async fn reorder_faq(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReorderRequest>,
) -> AppResult<Json<Stored<FaqView>>> {
    Ok(Json(FaqService::new(state.repo).reorder(id, payload.order).await?))
}

#[utoipa::path(
    post,
    path = "/faq/bulk-delete",
    request_body = BulkDeleteRequest,
    responses((status = 200, description = "FAQs deleted", body = MessageResponse)),
    tag = "faq"
)]
pub async fn bulk_delete(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BulkDeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(FaqService::new(state.repo).bulk_delete(payload).await?))
}

#[utoipa::path(
    post,
    path = "/faq/bulk-status-update",
    request_body = BulkStatusRequest,
    responses((status = 200, description = "FAQs updated", body = MessageResponse)),
    tag = "faq"
)]
pub async fn bulk_status_update(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BulkStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(FaqService::new(state.repo).bulk_status(payload).await?))
}
