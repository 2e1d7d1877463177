// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Session authentication middleware for the `/api` routes.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Session cookie set by the web frontend after login.
pub const SESSION_COOKIE: &str = "vitrine_token";

/// Authenticated user extracted from the session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub uid: String,
}

/// Middleware that requires a valid session token.
///
/// Accepts the session cookie or an `Authorization: Bearer` header; the
/// verified uid is inserted as a request extension. The sync endpoints do
/// their own verification in-handler because they distinguish deny reasons.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let identity = if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.identity.verify(cookie.value())?
    } else {
        state
            .identity
            .verify_bearer(request.headers().get(header::AUTHORIZATION))?
    };

    let auth_user = AuthUser { uid: identity.uid };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
