use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppResult,
    models::{
        MessageResponse, Stored,
        admin::{
            AdminProfile, ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
            TokenStatus, UpdateProfileRequest,
        },
    },
    services::auth::AuthService,
    validation::ValidatedJson,
};

fn service(state: &AppState) -> AuthService {
    AuthService::new(state.repo.clone(), state.config.clone())
}

/// login
///
/// [Public Route] Exchanges email and password for an access token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    Ok(Json(service(&state).login(payload).await?))
}

/// register
///
/// [Public Route] Creates an admin account. Only available while
/// `ALLOW_ADMIN_REGISTRATION` is on.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin created", body = AdminProfile),
        (status = 403, description = "Registration disabled"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Stored<AdminProfile>>)> {
    let admin = service(&state).register(payload).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// logout
///
/// [Authenticated Route] Tokens are stateless; the client simply drops its copy.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tag = "auth"
)]
pub async fn logout(AuthUser { id, .. }: AuthUser) -> Json<MessageResponse> {
    tracing::info!(admin = %id, "admin logged out");
    Json(MessageResponse::new("Logged out successfully"))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current admin", body = AdminProfile),
        (status = 404, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn me(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Stored<AdminProfile>>> {
    Ok(Json(service(&state).me(id).await?))
}

#[utoipa::path(
    put,
    path = "/auth/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = AdminProfile),
        (status = 409, description = "Email already in use")
    ),
    tag = "auth"
)]
pub async fn update_profile(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<Stored<AdminProfile>>> {
    Ok(Json(service(&state).update_profile(id, payload).await?))
}

#[utoipa::path(
    post,
    path = "/auth/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 401, description = "Current password is incorrect")
    ),
    tag = "auth"
)]
pub async fn change_password(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(service(&state).change_password(id, payload).await?))
}

/// verify_token
///
/// [Authenticated Route] Reaching the handler means the guard accepted the token.
#[utoipa::path(
    post,
    path = "/auth/verify-token",
    responses((status = 200, description = "Token is valid", body = TokenStatus)),
    tag = "auth"
)]
pub async fn verify_token(_user: AuthUser) -> Json<TokenStatus> {
    Json(TokenStatus { is_valid: true })
}
