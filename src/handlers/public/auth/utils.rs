use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::auth::{generate_jwt, token_fingerprint, Claims};
use crate::database::models::user::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Hash a password with Argon2id for storage
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            ApiError::internal_server_error("An error occurred while processing your request")
        })?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash. An unparseable hash counts as a
/// mismatch rather than an error so login never leaks storage details.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Sign a token for the user and record its session so it can be revoked
pub async fn issue_token(state: &AppState, user: &User) -> Result<String, ApiError> {
    let claims = Claims::new(user.id, user.email.clone());
    let token = generate_jwt(claims)?;

    state
        .sessions
        .insert(user.id, &token_fingerprint(&token))
        .await?;

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("correct-horse").expect("hash");
        assert!(verify_password("correct-horse", &hash));
        assert!(!verify_password("wrong-horse", &hash));
    }

    #[test]
    fn garbage_hash_is_a_mismatch() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
