use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Authenticated Router Module
///
/// Session endpoints for a logged-in admin. The router is wrapped in
/// `auth_middleware`, so every handler here can take `AuthUser` and rely on it
/// pointing at an existing, active account.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // Tokens are stateless; logout only acknowledges.
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/profile", put(handlers::auth::update_profile))
        .route(
            "/auth/change-password",
            post(handlers::auth::change_password),
        )
        .route("/auth/verify-token", post(handlers::auth::verify_token))
}
