use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         0123456789";

/// Length of email confirmation and password reset tokens.
pub const TOKEN_LENGTH: usize = 64;

/// Generates a cryptographically secure random alphanumeric string.
///
/// Used for email confirmation tokens, password reset tokens, legacy activation codes
/// and the unusable passwords of accounts created through OAuth.
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
