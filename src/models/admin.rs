use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Stored, default_true};
use crate::validation::{Validate, Violations};

pub const ADMIN_ROLE: &str = "admin";
pub const MIN_PASSWORD_LEN: usize = 8;

fn default_roles() -> Vec<String> {
    vec![ADMIN_ROLE.to_string()]
}

/// Admin
///
/// Persisted administrator account. `password` holds the argon2 PHC string and
/// never leaves the service layer; clients get an `AdminProfile` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Admin {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password: password_hash,
            is_active: true,
            roles: default_roles(),
            first_name: None,
            last_name: None,
            phone: None,
        }
    }
}

/// AdminProfile
///
/// The admin as returned to clients, without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<Admin> for AdminProfile {
    fn from(admin: Admin) -> Self {
        Self {
            name: admin.name,
            email: admin.email,
            is_active: admin.is_active,
            roles: admin.roles,
            first_name: admin.first_name,
            last_name: admin.last_name,
            phone: admin.phone,
        }
    }
}

pub fn profile(admin: Stored<Admin>) -> Stored<AdminProfile> {
    admin.map(AdminProfile::from)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self, v: &mut Violations) {
        v.email("email", &self.email);
        v.not_empty("password", &self.password);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("name", &self.name);
        v.email("email", &self.email);
        v.min_len("password", &self.password, MIN_PASSWORD_LEN);
    }
}

/// The `admin` block of a login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginAdmin {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub admin: LoginAdmin,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Validate for UpdateProfileRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("name", self.name.as_deref());
        if let Some(email) = &self.email {
            v.email("email", email);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl Validate for ChangePasswordRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("currentPassword", &self.current_password);
        v.min_len("newPassword", &self.new_password, MIN_PASSWORD_LEN);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    pub is_valid: bool,
}
