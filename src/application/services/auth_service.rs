//! Authentication service: login and bearer token handling.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Claims carried by an issued token: subject user id, issue time, expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Service for credential checks and stateless bearer tokens.
///
/// Tokens are HS256-signed JWTs; validity is determined purely by signature
/// and expiry against the server secret, with no server-side session state
/// and no revocation.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository used to resolve token subjects
    /// - `secret` - HS256 signing secret shared by issue and verify
    /// - `token_ttl_hours` - token lifetime in hours
    pub fn new(repository: Arc<R>, secret: &str, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    /// Checks credentials and issues a token for the matching user.
    ///
    /// Unknown email and wrong password produce identical errors so a caller
    /// cannot probe which addresses are registered. The bcrypt verification
    /// itself compares in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any credential mismatch.
    /// Returns [`AppError::Internal`] on database or hashing failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Err(AppError::unauthorized("Invalid credentials"));
        };

        let hash = user.password_hash.clone();
        let password = password.to_string();

        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "password verification task failed");
                AppError::internal("Password verification failed")
            })?
            // A malformed stored hash must look like any other bad credential.
            .unwrap_or(false);

        if !verified {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        self.issue_token(user.id)
    }

    /// Issues a signed token whose subject is `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            AppError::internal("Token signing failed")
        })
    }

    /// Verifies a bearer token and resolves its subject to a live user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature is invalid, the
    /// token has expired, or the subject user no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::unauthorized("Token is invalid or expired"))?;

        self.repository
            .find_by_id(data.claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))
    }
}
