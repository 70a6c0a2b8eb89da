use crate::server::error::AppError;

/// bcrypt work factor. Tests use the minimum so hashing stays fast.
const HASH_COST: u32 = if cfg!(test) { 4 } else { bcrypt::DEFAULT_COST };

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Verifies a password against a stored hash.
///
/// Legacy `$2y$` hashes are accepted. A stored value that is not a bcrypt hash never
/// matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
