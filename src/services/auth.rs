use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::error::{AppError, AppResult, AuthFailure};
use crate::models::{normalize_email, Identity};
use crate::repositories::UserRepository;

pub struct AuthService;

impl AuthService {
    /// Hash a password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a hash (constant-time comparison)
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        let result = Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();

        Ok(result)
    }

    /// Check credentials and return the caller's identity. Stateless: no token is issued.
    pub async fn login(db: &DatabaseConnection, email: &str, password: &str) -> AppResult<Identity> {
        let user = UserRepository::find_by_email(db, &normalize_email(email))
            .await?
            .ok_or(AppError::Auth(AuthFailure::UnknownEmail))?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::Auth(AuthFailure::BadCredential));
        }

        tracing::info!(user_id = %user.id, role = ?user.role, "User logged in");
        Ok(user.into())
    }
}
