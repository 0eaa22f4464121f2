use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthUser,
    error::AppResult,
    models::{
        Stored,
        contact::{
            ContactInfo, ContactSubmission, CreateSubmissionRequest, DateRange, SubmissionFilter,
            SubmissionStats, UpdateContactInfoRequest, UpdateSubmissionRequest,
        },
    },
    services::contact::ContactService,
    validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
};

// --- Contact Info ---

#[utoipa::path(
    post,
    path = "/contact/info",
    request_body = ContactInfo,
    responses((status = 201, description = "Contact info saved", body = ContactInfo)),
    tag = "contact"
)]
pub async fn upsert_info(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactInfo>,
) -> AppResult<(StatusCode, Json<Stored<ContactInfo>>)> {
    let info = ContactService::new(state.repo).upsert_info(payload).await?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// get_info
///
/// [Public Route] `null` until the contact info has been written.
#[utoipa::path(
    get,
    path = "/contact/info",
    responses((status = 200, description = "Contact info, or null when unset", body = ContactInfo)),
    tag = "contact"
)]
pub async fn get_info(
    State(state): State<AppState>,
) -> AppResult<Json<Option<Stored<ContactInfo>>>> {
    Ok(Json(ContactService::new(state.repo).info().await?))
}

#[utoipa::path(
    patch,
    path = "/contact/info",
    request_body = UpdateContactInfoRequest,
    responses(
        (status = 200, description = "Contact info updated", body = ContactInfo),
        (status = 404, description = "No contact info yet")
    ),
    tag = "contact"
)]
pub async fn update_info(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateContactInfoRequest>,
) -> AppResult<Json<Stored<ContactInfo>>> {
    Ok(Json(ContactService::new(state.repo).update_info(payload).await?))
}

// --- Submissions ---

/// submit
///
/// [Public Route] The website contact form.
#[utoipa::path(
    post,
    path = "/contact/submit",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmission),
        (status = 400, description = "Validation failed")
    ),
    tag = "contact"
)]
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<Stored<ContactSubmission>>)> {
    let submission = ContactService::new(state.repo).submit(payload).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

#[utoipa::path(
    get,
    path = "/contact/submissions",
    params(SubmissionFilter),
    responses((status = 200, description = "Submissions, newest first", body = [ContactSubmission])),
    tag = "contact"
)]
pub async fn list_submissions(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<SubmissionFilter>,
) -> AppResult<Json<Vec<Stored<ContactSubmission>>>> {
    Ok(Json(ContactService::new(state.repo).submissions(filter).await?))
}

#[utoipa::path(
    get,
    path = "/contact/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission", body = ContactSubmission),
        (status = 404, description = "Submission not found")
    ),
    tag = "contact"
)]
pub async fn get_submission(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<ContactSubmission>>> {
    Ok(Json(ContactService::new(state.repo).submission(id).await?))
}

/// update_submission
///
/// [Admin Route] Triage. A response message is attributed to the calling admin
/// and marks the submission as replied.
#[utoipa::path(
    put,
    path = "/contact/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission id")),
    request_body = UpdateSubmissionRequest,
    responses(
        (status = 200, description = "Submission updated", body = ContactSubmission),
        (status = 404, description = "Submission not found")
    ),
    tag = "contact"
)]
pub async fn update_submission(
    AuthUser { id: admin_id, .. }: AuthUser,
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateSubmissionRequest>,
) -> AppResult<Json<Stored<ContactSubmission>>> {
    let submission = ContactService::new(state.repo)
        .update_submission(id, payload, admin_id)
        .await?;
    Ok(Json(submission))
}

#[utoipa::path(
    delete,
    path = "/contact/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Submission not found")
    ),
    tag = "contact"
)]
pub async fn delete_submission(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<StatusCode> {
    ContactService::new(state.repo).delete_submission(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/contact/submissions/stats/overview",
    params(DateRange),
    responses((status = 200, description = "Counts by status and priority", body = SubmissionStats)),
    tag = "contact"
)]
pub async fn submission_stats(
    State(state): State<AppState>,
    ValidatedQuery(range): ValidatedQuery<DateRange>,
) -> AppResult<Json<SubmissionStats>> {
    Ok(Json(ContactService::new(state.repo).stats(range).await?))
}
