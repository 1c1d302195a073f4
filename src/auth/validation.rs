//! Registration field validation.

use thiserror::Error;

/// Minimum login name length.
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum login name length.
pub const MAX_NAME_LENGTH: usize = 32;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validation errors for registration input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is too short.
    #[error("name must be at least {MIN_NAME_LENGTH} characters")]
    NameTooShort,

    /// Name is too long.
    #[error("name must be at most {MAX_NAME_LENGTH} characters")]
    NameTooLong,

    /// Name contains characters outside [a-zA-Z0-9_].
    #[error("name may only contain letters, digits and underscores")]
    NameInvalidChars,

    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    PasswordTooLong,

    /// Email address is not plausible.
    #[error("email address is not valid")]
    EmailInvalid,
}

/// Validate a login name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::NameInvalidChars);
    }
    Ok(())
}

/// Validate a password.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Validate an email address.
///
/// Only a plausibility check: one `@` with non-empty local and domain parts.
/// The address is display-only, never used for lookup or delivery here.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::EmailInvalid),
    }
}

/// Validate all registration fields at once.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_password(password)?;
    Ok(())
}
