use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        ReorderRequest, Stored,
        course::SearchParams,
        faculty::{CreateFacultyRequest, Faculty, FacultyFilter, UpdateFacultyRequest},
    },
    services::faculty::FacultyService,
    validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
};

/// create_faculty
///
/// [Admin Route] Emails are unique across faculty members (409 on clash).
#[utoipa::path(
    post,
    path = "/faculty",
    request_body = CreateFacultyRequest,
    responses(
        (status = 201, description = "Faculty member created", body = Faculty),
        (status = 409, description = "Email already in use")
    ),
    tag = "faculty"
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFacultyRequest>,
) -> AppResult<(StatusCode, Json<Stored<Faculty>>)> {
    let member = FacultyService::new(state.repo).create(payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    get,
    path = "/faculty",
    params(FacultyFilter),
    responses((status = 200, description = "Faculty by order then name", body = [Faculty])),
    tag = "faculty"
)]
pub async fn list_faculty(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<FacultyFilter>,
) -> AppResult<Json<Vec<Stored<Faculty>>>> {
    Ok(Json(FacultyService::new(state.repo).list(filter).await?))
}

#[utoipa::path(
    get,
    path = "/faculty/search",
    params(SearchParams),
    responses((status = 200, description = "Matching faculty members", body = [Faculty])),
    tag = "faculty"
)]
pub async fn search_faculty(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> AppResult<Json<Vec<Stored<Faculty>>>> {
    Ok(Json(FacultyService::new(state.repo).search(&params.query).await?))
}

#[utoipa::path(
    get,
    path = "/faculty/{id}",
    params(("id" = Uuid, Path, description = "Faculty member id")),
    responses(
        (status = 200, description = "Faculty member", body = Faculty),
        (status = 404, description = "Faculty member not found")
    ),
    tag = "faculty"
)]
pub async fn get_faculty(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Faculty>>> {
    Ok(Json(FacultyService::new(state.repo).get(id).await?))
}

#[utoipa::path(
    patch,
    path = "/faculty/{id}",
    params(("id" = Uuid, Path, description = "Faculty member id")),
    request_body = UpdateFacultyRequest,
    responses(
        (status = 200, description = "Faculty member updated", body = Faculty),
        (status = 404, description = "Faculty member not found"),
        (status = 409, description = "Email already in use")
    ),
    tag = "faculty"
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateFacultyRequest>,
) -> AppResult<Json<Stored<Faculty>>> {
    Ok(Json(FacultyService::new(state.repo).update(id, payload).await?))
}

#[utoipa::path(
    patch,
    path = "/faculty/{id}/reorder",
    params(("id" = Uuid, Path, description = "Faculty member id")),
    request_body = ReorderRequest,
    responses((status = 200, description = "Order updated", body = Faculty)),
    tag = "faculty"
)]
pub async fn reorder_faculty(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReorderRequest>,
) -> AppResult<Json<Stored<Faculty>>> {
    let member = FacultyService::new(state.repo)
        .reorder(id, payload.order)
        .await?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/faculty/{id}",
    params(("id" = Uuid, Path, description = "Faculty member id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Faculty member not found")
    ),
    tag = "faculty"
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<StatusCode> {
    FacultyService::new(state.repo).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
