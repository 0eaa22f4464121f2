use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        gallery::{
            CreateGalleryCategoryRequest, GalleryCategory, GalleryForm, GalleryItem, GalleryUpload,
            GalleryView, UpdateGalleryCategoryRequest,
        },
    },
    services::gallery::GalleryService,
    upload::{MultipartForm, read_form},
    validation::{ValidatedJson, ValidatedPath},
};

fn split_form(mut form: MultipartForm) -> (GalleryForm, Option<String>) {
    let image = form.image.take().map(|image| image.data_url());
    let fields = GalleryForm {
        title: form.take("title"),
        arabic_title: form.take("arabicTitle"),
        category: form.take("category"),
        arabic_category: form.take("arabicCategory"),
    };
    (fields, image)
}

/// create_item
///
/// [Admin Route] Multipart upload. The image is stored inline as a base64
/// data URL.
#[utoipa::path(
    post,
    path = "/gallery",
    request_body(content = GalleryUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Gallery item created", body = GalleryView),
        (status = 400, description = "Missing fields, bad image or unknown category")
    ),
    tag = "gallery"
)]
pub async fn create_item(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Stored<GalleryView>>)> {
    let form = read_form(multipart?, state.config.max_image_bytes).await?;
    let (fields, image) = split_form(form);
    let item = GalleryService::new(state.repo).create(fields, image).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/gallery",
    responses((status = 200, description = "Gallery, newest first", body = [GalleryView])),
    tag = "gallery"
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<GalleryView>>>> {
    Ok(Json(GalleryService::new(state.repo).list().await?))
}

#[utoipa::path(
    get,
    path = "/gallery/{id}",
    params(("id" = Uuid, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "Gallery item", body = GalleryView),
        (status = 404, description = "Gallery item not found")
    ),
    tag = "gallery"
)]
pub async fn get_item(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<GalleryView>>> {
    Ok(Json(GalleryService::new(state.repo).get(id).await?))
}

/// update_item
///
/// [Admin Route] Multipart partial update; send `image` only to replace it.
#[utoipa::path(
    patch,
    path = "/gallery/{id}",
    params(("id" = Uuid, Path, description = "Gallery item id")),
    request_body(content = GalleryUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Gallery item updated", body = GalleryView),
        (status = 404, description = "Gallery item not found")
    ),
    tag = "gallery"
)]
pub async fn update_item(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<Stored<GalleryView>>> {
    let form = read_form(multipart?, state.config.max_image_bytes).await?;
    let (fields, image) = split_form(form);
    Ok(Json(GalleryService::new(state.repo).update(id, fields, image).await?))
}

#[utoipa::path(
    delete,
    path = "/gallery/{id}",
    params(("id" = Uuid, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "Deleted item", body = GalleryItem),
        (status = 404, description = "Gallery item not found")
    ),
    tag = "gallery"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<GalleryItem>>> {
    Ok(Json(GalleryService::new(state.repo).delete(id).await?))
}

// --- Categories ---

#[utoipa::path(
    get,
    path = "/gallery/category",
    responses((status = 200, description = "Gallery categories", body = [GalleryCategory])),
    tag = "gallery"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<GalleryCategory>>>> {
    Ok(Json(GalleryService::new(state.repo).categories().await?))
}

#[utoipa::path(
    post,
    path = "/gallery/category",
    request_body = CreateGalleryCategoryRequest,
    responses((status = 201, description = "Category created", body = GalleryCategory)),
    tag = "gallery"
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGalleryCategoryRequest>,
) -> AppResult<(StatusCode, Json<Stored<GalleryCategory>>)> {
    let category = GalleryService::new(state.repo).create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    patch,
    path = "/gallery/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateGalleryCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = GalleryCategory),
        (status = 404, description = "Category not found")
    ),
    tag = "gallery"
)]
pub async fn update_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateGalleryCategoryRequest>,
) -> AppResult<Json<Stored<GalleryCategory>>> {
    let category = GalleryService::new(state.repo)
        .update_category(id, payload)
        .await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/gallery/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted category", body = GalleryCategory),
        (status = 404, description = "Category not found")
    ),
    tag = "gallery"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<GalleryCategory>>> {
    Ok(Json(GalleryService::new(state.repo).delete_category(id).await?))
}
