use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        ReorderRequest, Stored,
        service::{CreateServiceRequest, Service, ServiceLevel, UpdateServiceRequest},
    },
    services::service::ServiceCatalog,
    validation::{ValidatedJson, ValidatedPath},
};

#[utoipa::path(
    post,
    path = "/services",
    request_body = CreateServiceRequest,
    responses((status = 201, description = "Service created", body = Service)),
    tag = "services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<Stored<Service>>)> {
    let service = ServiceCatalog::new(state.repo).create(payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    get,
    path = "/services",
    responses((status = 200, description = "Active services", body = [Service])),
    tag = "services"
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Service>>>> {
    Ok(Json(ServiceCatalog::new(state.repo).list().await?))
}

#[utoipa::path(
    get,
    path = "/services/level/{level}",
    params(("level" = ServiceLevel, Path, description = "Service level")),
    responses((status = 200, description = "Active services of the level", body = [Service])),
    tag = "services"
)]
pub async fn services_by_level(
    State(state): State<AppState>,
    ValidatedPath(level): ValidatedPath<ServiceLevel>,
) -> AppResult<Json<Vec<Stored<Service>>>> {
    Ok(Json(ServiceCatalog::new(state.repo).by_level(level).await?))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service", body = Service),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Service>>> {
    Ok(Json(ServiceCatalog::new(state.repo).get(id).await?))
}

#[utoipa::path(
    patch,
    path = "/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceRequest>,
) -> AppResult<Json<Stored<Service>>> {
    Ok(Json(ServiceCatalog::new(state.repo).update(id, payload).await?))
}

#[utoipa::path(
    patch,
    path = "/services/{id}/reorder",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = ReorderRequest,
    responses((status = 200, description = "Order updated", body = Service)),
    tag = "services"
)]
pub async fn reorder_service(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReorderRequest>,
) -> AppResult<Json<Stored<Service>>> {
    Ok(Json(ServiceCatalog::new(state.repo).reorder(id, payload.order).await?))
}

/// delete_service
///
/// [Admin Route] Soft delete: the service is kept with `isActive = false`.
#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Deactivated service", body = Service),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Service>>> {
    Ok(Json(ServiceCatalog::new(state.repo).deactivate(id).await?))
}
