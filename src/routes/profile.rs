// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Profile routes: the caller's own record, profile editing, and the
//! public read side.
//!
//! `PUT /api/profile` is the automatic sync trigger: a committed mutation
//! of the private record is followed directly by a trusted synchronization
//! call, with no authorization gate beyond the session middleware.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{PrivateProfile, PublicProfile};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Authenticated profile routes (session middleware applied in routes/mod.rs).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/profile", put(update_profile))
}

/// Unauthenticated read of the public projection.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/public-profiles/{uid}", get(get_public_profile))
}

// ─── Own Profile ─────────────────────────────────────────────

/// Get the caller's own private profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PrivateProfile>> {
    let profile = state
        .db
        .get_private_profile(&user.uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", user.uid)))?;

    Ok(Json(profile))
}

// ─── Profile Editing ─────────────────────────────────────────

/// Partial profile update. Provided fields overwrite, absent fields stay
/// untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(length(max = 20))]
    pub tags: Option<Vec<String>>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(max = 120))]
    pub location: Option<String>,
    #[validate(length(min = 3, max = 30))]
    pub username: Option<String>,
    #[validate(length(max = 120))]
    pub artistic_name: Option<String>,
    pub profile_completed: Option<bool>,
    pub email_notifications: Option<bool>,
}

/// Update the caller's private profile, then synchronize the public
/// projection.
///
/// The private write commits before the sync runs; if the sync fails the
/// response is 500 and `/republish-profile` is the recovery path (the
/// upsert is idempotent, so retrying is safe).
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> Result<Json<PrivateProfile>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut profile = state
        .db
        .get_private_profile(&user.uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", user.uid)))?;

    apply_update(&mut profile, payload);
    profile.updated_at = Some(chrono::Utc::now().to_rfc3339());

    state.db.upsert_private_profile(&profile).await?;

    tracing::info!(uid = %user.uid, "Private profile updated");

    if let Err(e) = state.profile_sync.synchronize(&profile).await {
        tracing::warn!(
            uid = %user.uid,
            error = %e,
            "Profile updated but public sync failed"
        );
        return Err(e);
    }

    Ok(Json(profile))
}

fn apply_update(profile: &mut PrivateProfile, payload: ProfileUpdateRequest) {
    if let Some(name) = payload.name {
        profile.name = name;
    }
    if let Some(email) = payload.email {
        profile.email = Some(email);
    }
    if let Some(photo_url) = payload.photo_url {
        profile.photo_url = Some(photo_url);
    }
    if let Some(bio) = payload.bio {
        profile.bio = Some(bio);
    }
    if let Some(tags) = payload.tags {
        profile.tags = Some(tags);
    }
    if let Some(website) = payload.website {
        profile.website = Some(website);
    }
    if let Some(location) = payload.location {
        profile.location = Some(location);
    }
    if let Some(username) = payload.username {
        profile.username = Some(username);
    }
    if let Some(artistic_name) = payload.artistic_name {
        profile.artistic_name = Some(artistic_name);
    }
    if let Some(profile_completed) = payload.profile_completed {
        profile.profile_completed = profile_completed;
    }
    if let Some(email_notifications) = payload.email_notifications {
        profile.email_notifications = email_notifications;
    }
}

// ─── Public Read ─────────────────────────────────────────────

/// Get a public profile by uid.
async fn get_public_profile(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<PublicProfile>> {
    let profile = state
        .db
        .get_public_profile(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Public profile {} not found", uid)))?;

    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> PrivateProfile {
        PrivateProfile {
            uid: "u1".to_string(),
            name: "Ana".to_string(),
            email: None,
            photo_url: None,
            bio: Some("old bio".to_string()),
            tags: None,
            website: None,
            location: None,
            username: None,
            artistic_name: None,
            profile_completed: false,
            created_at: Some("2025-11-02T10:00:00Z".to_string()),
            updated_at: None,
            email_notifications: false,
        }
    }

    #[test]
    fn apply_update_overwrites_provided_fields_only() {
        let mut profile = base_profile();
        let payload: ProfileUpdateRequest = serde_json::from_value(serde_json::json!({
            "name": "Ana Silva",
            "tags": ["pintura"],
        }))
        .unwrap();

        apply_update(&mut profile, payload);

        assert_eq!(profile.name, "Ana Silva");
        assert_eq!(profile.tags, Some(vec!["pintura".to_string()]));
        // Untouched fields survive
        assert_eq!(profile.bio.as_deref(), Some("old bio"));
        assert_eq!(profile.created_at.as_deref(), Some("2025-11-02T10:00:00Z"));
    }

    #[test]
    fn update_request_rejects_malformed_urls() {
        let payload: ProfileUpdateRequest = serde_json::from_value(serde_json::json!({
            "website": "not a url",
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }
}
