use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        event::{CreateEventRequest, Event, UpdateEventRequest},
    },
    services::event::EventService,
    validation::{ValidatedJson, ValidatedPath},
};

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses((status = 201, description = "Event created", body = Event)),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<Stored<Event>>)> {
    let event = EventService::new(state.repo).create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/events",
    responses((status = 200, description = "All events by date", body = [Event])),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Event>>>> {
    Ok(Json(EventService::new(state.repo).list().await?))
}

/// upcoming_events
///
/// [Public Route] Events dated today or later, soonest first.
#[utoipa::path(
    get,
    path = "/events/upcoming",
    responses((status = 200, description = "Upcoming events", body = [Event])),
    tag = "events"
)]
pub async fn upcoming_events(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<Event>>>> {
    Ok(Json(EventService::new(state.repo).upcoming().await?))
}

/// past_events
///
/// [Public Route] Events dated before today, most recent first.
#[utoipa::path(
    get,
    path = "/events/past",
    responses((status = 200, description = "Past events", body = [Event])),
    tag = "events"
)]
pub async fn past_events(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Event>>>> {
    Ok(Json(EventService::new(state.repo).past().await?))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Event>>> {
    Ok(Json(EventService::new(state.repo).get(id).await?))
}

#[utoipa::path(
    patch,
    path = "/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEventRequest>,
) -> AppResult<Json<Stored<Event>>> {
    Ok(Json(EventService::new(state.repo).update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Deleted event", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Event>>> {
    Ok(Json(EventService::new(state.repo).delete(id).await?))
}
