//! Short link creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, generate_code};
use crate::utils::validation::is_valid_url;

/// Attempts per code length before the code space is considered congested.
const MAX_ATTEMPTS_PER_LENGTH: usize = 10;

/// Hard ceiling for the widening fallback.
const MAX_CODE_LENGTH: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Every URL gets a fresh code; the same URL shortened twice yields two
/// independent entries.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
    base_url: String,
}

impl<S: LinkStore> LinkService<S> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix used when rendering short URLs.
    pub fn new(store: Arc<S>, base_url: String) -> Self {
        Self { store, base_url }
    }

    /// Validates a URL and stores it under a fresh code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the URL is not an acceptable
    /// absolute URL; nothing is stored in that case.
    /// Returns [`AppError::Internal`] if no unique code could be claimed.
    pub fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        if !is_valid_url(long_url) {
            return Err(AppError::bad_request("Invalid URL"));
        }

        self.claim_fresh_code(long_url)
    }

    /// Returns the long URL for a code, counting the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.store
            .resolve(code)
            .ok_or_else(|| AppError::not_found("Short code not found"))
    }

    /// Returns the stored entry for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub fn stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.store
            .stats(code)
            .ok_or_else(|| AppError::not_found("Short code not found"))
    }

    /// Renders the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Generates codes until one is claimed, bounded per length.
    ///
    /// The store's atomic insert doubles as the collision check, so two
    /// concurrent calls can never both claim one code. If a length keeps
    /// colliding the code widens by one character, up to [`MAX_CODE_LENGTH`].
    fn claim_fresh_code(&self, long_url: &str) -> Result<String, AppError> {
        let mut length = CODE_LENGTH;

        loop {
            for _ in 0..MAX_ATTEMPTS_PER_LENGTH {
                let code = generate_code(length);

                if self.store.insert(&code, long_url) {
                    return Ok(code);
                }
            }

            if length >= MAX_CODE_LENGTH {
                tracing::error!("giving up on short code generation, space saturated");
                return Err(AppError::internal("Failed to generate a unique short code"));
            }

            length += 1;
            tracing::warn!(length, "short code space congested, widening code length");
        }
    }
}
