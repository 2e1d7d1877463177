// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Synchronization endpoints.
//!
//! Both endpoints verify the caller's bearer token in-handler (not via the
//! session middleware) so that deny reasons stay distinguishable: missing
//! vs expired vs invalid token vs ownership mismatch.

use crate::error::{AppError, Result};
use crate::models::PrivateProfile;
use crate::services::AuthDenied;
use crate::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Sync routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sync-profile", post(sync_profile))
        .route("/republish-profile", post(republish_profile))
}

// ─── Sync Profile ────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SyncProfileResponse {
    pub message: String,
    pub uid: String,
}

/// Synchronize a caller-supplied private record into its public projection.
///
/// Server-side mutation paths call the orchestrator directly; this endpoint
/// is the same operation exposed to authenticated clients. The caller may
/// only sync their own record: the verified token subject must equal
/// `body.uid`.
async fn sync_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<PrivateProfile>,
) -> Result<Json<SyncProfileResponse>> {
    let identity = state
        .identity
        .verify_bearer(headers.get(header::AUTHORIZATION))?;

    // Absent required fields are validation problems (400), reported
    // before the ownership check; the orchestrator re-checks presence
    // before any store call.
    if body.uid.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Missing required field: uid".to_string(),
        ));
    }
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Missing required field: name".to_string(),
        ));
    }

    if identity.uid != body.uid {
        return Err(AuthDenied::UidMismatch.into());
    }

    state.profile_sync.synchronize(&body).await?;

    Ok(Json(SyncProfileResponse {
        message: "Profile synchronized".to_string(),
        uid: identity.uid,
    }))
}

// ─── Republish Profile ───────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RepublishResponse {
    pub message: String,
    pub uid: String,
    pub timestamp: String,
}

/// Re-run the synchronization for the caller's own profile.
///
/// The target uid comes from the verified token, never from the request;
/// the current private record is loaded server-side and pushed through the
/// same orchestrator as the automatic path.
async fn republish_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<RepublishResponse>> {
    let identity = state
        .identity
        .verify_bearer(headers.get(header::AUTHORIZATION))?;

    let profile = state
        .db
        .get_private_profile(&identity.uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile found for uid {}", identity.uid)))?;

    state.profile_sync.synchronize(&profile).await?;

    tracing::info!(uid = %identity.uid, "Profile republished");

    Ok(Json(RepublishResponse {
        message: "Profile republished".to_string(),
        uid: identity.uid,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
