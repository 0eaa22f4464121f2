use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::{FromRef, FromRequestParts, Request},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, AuthError},
    models::admin::{ADMIN_ROLE, Admin},
    repository::RepositoryState,
    services::auth::AuthService,
};

/// Claims
///
/// Payload of the HS256 access token issued at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the admin document.
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    /// Issued At (iat).
    pub iat: usize,
    /// Expiration Time (exp), checked on every request.
    pub exp: usize,
}

/// issue_token
///
/// Signs a token for the admin with the configured secret and lifetime.
pub fn issue_token(
    config: &AppConfig,
    admin_id: Uuid,
    email: &str,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: admin_id,
        email: email.to_string(),
        role: ADMIN_ROLE.to_string(),
        iat: now.timestamp().max(0) as usize,
        exp: (now + Duration::hours(config.jwt_expires_in_hours)).timestamp().max(0) as usize,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?)
}

/// decode_token
///
/// Verifies signature and expiry. Every failure collapses into `InvalidToken`.
pub fn decode_token(config: &AppConfig, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "token rejected");
        AuthError::InvalidToken
    })
}

/// hash_password
///
/// Argon2id with a random salt. Runs on the blocking pool since hashing is
/// deliberately slow.
pub async fn hash_password(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(e.to_string()))?
}

/// verify_password
///
/// `Ok(false)` for a wrong password; `Err` only when the stored hash is unreadable.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|e| AuthError::Hashing(e.to_string()))?
}

/// AuthUser
///
/// The resolved identity of an authenticated request: the admin the token's
/// `sub` points at, re-read from the store so deleted or deactivated accounts
/// lose access immediately.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ADMIN_ROLE)
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// AuthUser Extractor Implementation
///
/// 1. Bearer token extraction from `Authorization`.
/// 2. JWT decoding (signature + expiry).
/// 3. Store lookup: the admin must still exist and be active.
///
/// Rejection: 401 through `AppError::Auth`.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    RepositoryState: FromRef<S>,
    AppConfig: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Reuse an identity already resolved by the route middleware.
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);

        let token = bearer_token(parts)?;
        let claims = decode_token(&config, token)?;

        let admin = AuthService::new(repo, config)
            .find_active(claims.sub)
            .await?
            .ok_or(AuthError::InactiveAccount)?;

        let user = AuthUser::from_admin(admin.id, admin.data);
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

impl AuthUser {
    fn from_admin(id: Uuid, admin: Admin) -> Self {
        Self {
            id,
            email: admin.email,
            roles: admin.roles,
        }
    }
}

/// auth_middleware
///
/// Route layer for everything behind a login. Extracting `AuthUser` is the
/// whole check; the resolved identity is stashed in the request extensions for
/// handlers that also take `AuthUser`.
pub async fn auth_middleware(auth_user: AuthUser, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(auth_user);
    next.run(request).await
}

/// admin_middleware
///
/// Same as `auth_middleware` plus the `admin` role check (403 without it).
pub async fn admin_middleware(
    auth_user: AuthUser,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !auth_user.is_admin() {
        tracing::warn!(admin = %auth_user.id, "admin role required");
        return Err(AuthError::Forbidden.into());
    }
    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let config = AppConfig::default();
        let id = Uuid::new_v4();
        let token = issue_token(&config, id, "admin@academy.edu").unwrap();
        let claims = decode_token(&config, &token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_with_other_secret_is_rejected() {
        let config = AppConfig::default();
        let token = issue_token(&config, Uuid::new_v4(), "a@b.co").unwrap();
        let other = AppConfig {
            jwt_secret: "another-secret".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(decode_token(&other, &token), Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn password_hash_verifies() {
        let hash = hash_password("correct horse".to_string()).await.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hash).await.unwrap());
    }
}
