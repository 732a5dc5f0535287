//! Client-side credential checks applied before calling the backend
//!
//! These mirror what the backend enforces so the forms can fail fast with a
//! readable message.

/// Maximum username length
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters a password may (and must) contain
pub const PASSWORD_SPECIALS: &str = "@$!%*?&#^";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error(
        "Password must be at least 8 characters and include uppercase, lowercase, number, and special character"
    )]
    WeakPassword,

    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must be at most {max} characters")]
    UsernameTooLong { max: usize },

    #[error("{0} is required")]
    Required(&'static str),
}

/// Accepts `local@domain.tld` with no whitespace and exactly one `@`
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::InvalidEmail);
    };
    if local.is_empty() {
        return Err(ValidationError::InvalidEmail);
    }

    // The domain needs a dot with something on both sides of the last one
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// At least 8 characters from letters, digits and [`PASSWORD_SPECIALS`], with
/// one of each class present
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);

    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let strong = password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special);

    if allowed && strong {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooLong {
            max: MAX_USERNAME_LENGTH,
        });
    }
    Ok(())
}

/// Rejects blank values for the named field
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}
