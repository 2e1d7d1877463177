// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Identity-token verification and ownership checks.
//!
//! Verification returns a typed outcome instead of raising: every caller
//! matches on [`AuthDenied`] rather than string-matching error messages.

use crate::error::AppError;
use axum::http::HeaderValue;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user uid)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Subject extracted from a successfully verified token.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub uid: String,
}

/// Why a request was denied, distinguished for caller diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDenied {
    MissingToken,
    ExpiredToken,
    InvalidToken,
    UidMismatch,
}

impl From<AuthDenied> for AppError {
    fn from(denied: AuthDenied) -> Self {
        match denied {
            AuthDenied::MissingToken => AppError::Unauthorized,
            AuthDenied::ExpiredToken => AppError::TokenExpired,
            AuthDenied::InvalidToken => AppError::InvalidToken,
            AuthDenied::UidMismatch => {
                AppError::Forbidden("Profile does not belong to the caller".to_string())
            }
        }
    }
}

/// Verifier for session identity tokens (HS256).
pub struct IdentityVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl IdentityVerifier {
    pub fn new(signing_key: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(signing_key),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify a raw token string.
    pub fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthDenied> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthDenied::ExpiredToken,
                _ => AuthDenied::InvalidToken,
            })?;

        let uid = token_data.claims.sub;
        if uid.is_empty() {
            return Err(AuthDenied::InvalidToken);
        }

        Ok(VerifiedIdentity { uid })
    }

    /// Verify the Bearer token carried in an Authorization header.
    pub fn verify_bearer(
        &self,
        auth_header: Option<&HeaderValue>,
    ) -> Result<VerifiedIdentity, AuthDenied> {
        let token = extract_bearer_token(auth_header)?;
        self.verify(token)
    }

    /// Allow only when the verified subject is exactly `target_uid`.
    ///
    /// A user may trigger synchronization of their own profile, never
    /// another's.
    pub fn authorize(
        &self,
        auth_header: Option<&HeaderValue>,
        target_uid: &str,
    ) -> Result<VerifiedIdentity, AuthDenied> {
        let identity = self.verify_bearer(auth_header)?;

        if identity.uid != target_uid {
            return Err(AuthDenied::UidMismatch);
        }

        Ok(identity)
    }
}

fn extract_bearer_token(auth_header: Option<&HeaderValue>) -> Result<&str, AuthDenied> {
    let value = auth_header
        .ok_or(AuthDenied::MissingToken)?
        .to_str()
        .map_err(|_| AuthDenied::MissingToken)?;

    let token = value.strip_prefix("Bearer ").ok_or(AuthDenied::MissingToken)?;

    if token.is_empty() {
        return Err(AuthDenied::MissingToken);
    }

    Ok(token)
}

/// Create a session token for a user.
///
/// Issued after the external identity provider authenticates the user;
/// also used by tests to mint tokens the verifier accepts.
pub fn create_session_token(uid: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: uid.to_string(),
        iat: now,
        exp: now + 30 * 24 * 60 * 60, // 30 days
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}
