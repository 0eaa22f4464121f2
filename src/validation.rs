use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Validate
///
/// Implemented by every request body. Rules push their messages into the
/// collector so a client sees all problems at once.
pub trait Validate {
    fn validate(&self, v: &mut Violations);

    fn check(&self) -> Result<(), AppError> {
        let mut v = Violations::default();
        self.validate(&mut v);
        v.into_result()
    }
}

/// Collected rule violations for one request body.
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.messages))
        }
    }

    pub fn not_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(format!("{field} should not be empty"));
        }
    }

    /// Same as `not_empty` but only when the field was sent.
    pub fn not_empty_opt(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.not_empty(field, value);
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !is_email(value) {
            self.push(format!("{field} must be an email"));
        }
    }

    pub fn phone(&mut self, field: &str, value: &str) {
        if !is_phone(value) {
            self.push(format!("{field} must be a valid phone number"));
        }
    }

    pub fn date(&mut self, field: &str, value: &str) {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            self.push(format!("{field} must be a date in YYYY-MM-DD format"));
        }
    }

    pub fn min_items<T>(&mut self, field: &str, items: &[T], min: usize) {
        if items.len() < min {
            self.push(format!("{field} must contain at least {min} elements"));
        }
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) {
        if value.chars().count() < min {
            self.push(format!("{field} must be longer than or equal to {min} characters"));
        }
    }

    pub fn non_negative(&mut self, field: &str, value: i64) {
        if value < 0 {
            self.push(format!("{field} must not be less than 0"));
        }
    }
}

/// Loose structural check: one `@`, a non-empty local part and a dotted domain.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Digits with optional leading `+` and common separators, 7 to 15 digits.
pub fn is_phone(value: &str) -> bool {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'))
    {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}

/// ValidatedJson
///
/// JSON extractor that runs `Validate` after deserializing. Malformed bodies,
/// unknown fields and rule violations are all rejected with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;
        value.check()?;
        Ok(Self(value))
    }
}

/// ValidatedPath
///
/// `Path` whose rejection (e.g. a malformed id) is an `AppError`, so it
/// carries the usual JSON error body.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// ValidatedQuery
///
/// Query string counterpart of `ValidatedPath`.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        assert!(is_email("admin@academy.edu"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(!is_email("admin@localhost"));
        assert!(!is_email("no-at-sign.com"));
        assert!(!is_email("two@@at.com"));
        assert!(!is_email("spaced name@x.com"));
    }

    #[test]
    fn phones() {
        assert!(is_phone("+971 50 123 4567"));
        assert!(is_phone("(02) 555-0199"));
        assert!(!is_phone("123"));
        assert!(!is_phone("call me"));
    }

    #[test]
    fn collects_every_violation() {
        let mut v = Violations::default();
        v.not_empty("title", " ");
        v.date("date", "12/01/2025");
        v.min_items::<String>("features", &[], 1);
        match v.into_result() {
            Err(AppError::Validation(messages)) => assert_eq!(messages.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
