use uuid::Uuid;

use crate::{
    auth::{hash_password, issue_token, verify_password},
    config::AppConfig,
    error::{AppError, AppResult, AuthError},
    models::{
        MessageResponse, Stored,
        admin::{
            ADMIN_ROLE, Admin, AdminProfile, ChangePasswordRequest, LoginAdmin, LoginRequest,
            LoginResponse, RegisterRequest, UpdateProfileRequest, profile,
        },
    },
    repository::{Collection, Query, RepositoryState},
};

use super::Records;

pub struct AuthService {
    admins: Records<Admin>,
    config: AppConfig,
}

/// Emails are compared case-insensitively by storing them lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AuthService {
    pub fn new(repo: RepositoryState, config: AppConfig) -> Self {
        Self {
            admins: Records::new(repo, Collection::Admins, "User"),
            config,
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Stored<Admin>>> {
        self.admins
            .first(&Query::new().eq("email", normalize_email(email)))
            .await
    }

    /// The admin behind a token, if it still exists and is active.
    pub async fn find_active(&self, id: Uuid) -> AppResult<Option<Stored<Admin>>> {
        Ok(self.admins.get(id).await?.filter(|admin| admin.data.is_active))
    }

    /// login
    ///
    /// Unknown email, wrong password and inactive account all answer with the
    /// same 401 so the response does not reveal which accounts exist.
    pub async fn login(&self, req: LoginRequest) -> AppResult<LoginResponse> {
        let admin = self
            .find_by_email(&req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = verify_password(req.password, admin.data.password.clone()).await?;
        if !valid || !admin.data.is_active {
            tracing::info!(email = %admin.data.email, "login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = issue_token(&self.config, admin.id, &admin.data.email)?;
        tracing::info!(admin = %admin.id, "admin logged in");

        Ok(LoginResponse {
            access_token,
            admin: LoginAdmin {
                id: admin.id,
                email: admin.data.email,
                role: ADMIN_ROLE.to_string(),
            },
        })
    }

    pub async fn register(&self, req: RegisterRequest) -> AppResult<Stored<AdminProfile>> {
        if !self.config.allow_admin_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        let email = normalize_email(&req.email);
        if self.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "An admin with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(req.password).await?;
        let admin = self
            .admins
            .create(&Admin::new(req.name, email, password_hash))
            .await?;
        tracing::info!(admin = %admin.id, "admin registered");
        Ok(profile(admin))
    }

    pub async fn me(&self, id: Uuid) -> AppResult<Stored<AdminProfile>> {
        Ok(profile(self.admins.fetch(id).await?))
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        mut req: UpdateProfileRequest,
    ) -> AppResult<Stored<AdminProfile>> {
        if let Some(email) = req.email.as_deref() {
            let email = normalize_email(email);
            let taken = self
                .admins
                .first(&Query::new().eq("email", email.clone()).exclude_id(id))
                .await?
                .is_some();
            if taken {
                return Err(AppError::Conflict(
                    "An admin with this email already exists".to_string(),
                ));
            }
            req.email = Some(email);
        }

        let admin = self.admins.update(id, &req).await?;
        Ok(profile(admin))
    }

    pub async fn change_password(
        &self,
        id: Uuid,
        req: ChangePasswordRequest,
    ) -> AppResult<MessageResponse> {
        let mut admin = self.admins.fetch(id).await?;

        if !verify_password(req.current_password, admin.data.password.clone()).await? {
            return Err(AuthError::WrongPassword.into());
        }

        admin.data.password = hash_password(req.new_password).await?;
        self.admins.save(&admin).await?;
        tracing::info!(admin = %id, "password changed");
        Ok(MessageResponse::new("Password changed successfully"))
    }
}
