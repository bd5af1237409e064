use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::users::dto::{CreateUserRequest, LoginRequest};
use crate::users::password;
use crate::users::repo_types::User;

pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Presence check for a required field. Blank input counts as missing.
fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("{field} is required"))),
    }
}

#[derive(Debug)]
pub(crate) struct Credentials {
    pub email: String,
    pub password: String,
}

/// Shared validation for sign-up and sign-in. Emails are compared in
/// normalized form everywhere, so `A@B.com ` and `a@b.com` are the same
/// identity.
fn validate_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<Credentials, ApiError> {
    let email = normalize_email(&required(email, "email")?);
    let password = required(password, "password")?;
    if !is_valid_email(&email) {
        return Err(ApiError::Validation("invalid email".into()));
    }
    Ok(Credentials { email, password })
}

/// Sign up: validate, normalize, hash, persist. Hashing happens here as an
/// explicit step, not as a side effect of saving, and only because a new
/// password is being set. Duplicate emails are not pre-checked; the store's
/// unique index decides atomically and the violation maps to a conflict.
pub async fn register(db: &PgPool, payload: CreateUserRequest) -> Result<User, ApiError> {
    let creds = validate_credentials(payload.email, payload.password)?;
    let name = payload
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let hash = password::hash_password(&creds.password)?;
    let user = User::insert(db, name.as_deref(), &creds.email, &hash).await?;
    Ok(user)
}

/// Sign in: look up by normalized email, then verify against the stored
/// hash. "user not found" vs "incorrect password" is the only detail the
/// failure exposes.
pub async fn login(db: &PgPool, payload: LoginRequest) -> Result<User, ApiError> {
    let creds = validate_credentials(payload.email, payload.password)?;

    let user = User::find_by_email(db, &creds.email)
        .await?
        .ok_or_else(|| ApiError::Auth("user not found".into()))?;

    if !password::verify_password(&creds.password, &user.password_hash)? {
        return Err(ApiError::Auth("incorrect password".into()));
    }
    Ok(user)
}

pub async fn list(db: &PgPool) -> Result<Vec<User>, ApiError> {
    Ok(User::list(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@B.com "), "a@b.com");
        assert_eq!(normalize_email("USER@Example.COM"), "user@example.com");
    }

    #[test]
    fn email_format_check() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("a@nodot"));
    }

    #[test]
    fn missing_email_is_a_validation_error() {
        let err = validate_credentials(None, Some("secret".into())).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn missing_password_is_a_validation_error() {
        let err = validate_credentials(Some("a@x.com".into()), None).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let err = validate_credentials(Some("   ".into()), Some("secret".into())).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = validate_credentials(Some("a@x.com".into()), Some("".into())).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn credentials_come_back_normalized() {
        let creds =
            validate_credentials(Some("  A@X.com ".into()), Some("secret".into())).unwrap();
        assert_eq!(creds.email, "a@x.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err =
            validate_credentials(Some("not-an-email".into()), Some("secret".into())).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
