use crate::server::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Checks the shape of an email address: one `@`, non-empty local part and a dotted
/// domain without whitespace.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::BadRequest("Please enter a valid email address".to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

    if local.is_empty()
        || domain.contains('@')
        || email.chars().any(char::is_whitespace)
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), AppError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Username must be at most {} characters long",
            MAX_USERNAME_LENGTH
        )));
    }

    Ok(())
}
