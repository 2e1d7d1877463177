// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Profile synchronization: validate, project, upsert.
//!
//! Writes to the public collection go through [`ProfileSync`] and nowhere
//! else. The orchestrator never reads the public record before writing: the
//! private profile is the source of truth, so the upsert is a blind
//! overwrite-by-merge of the full projection. Concurrent syncs for the same
//! uid are last-write-wins, which both entry points accept.

use crate::error::AppError;
use crate::models::{PrivateProfile, PublicProfile};
use crate::services::projection;
use async_trait::async_trait;

/// Write seam over the public profile collection.
///
/// Implementations must provide merge-semantics upsert keyed by uid:
/// repeating a write with identical input leaves identical stored state.
#[async_trait]
pub trait PublicProfileStore: Send + Sync {
    async fn upsert_public_profile(
        &self,
        uid: &str,
        profile: &PublicProfile,
    ) -> Result<(), AppError>;
}

/// Orchestrates the private-to-public synchronization.
///
/// The store is injected at construction; handlers share one instance via
/// `AppState`.
pub struct ProfileSync<S> {
    store: S,
}

impl<S: PublicProfileStore> ProfileSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Synchronize one private profile into its public projection.
    ///
    /// Fails fast on a missing `uid` or `name` before any store call;
    /// store failures propagate verbatim. No retries here — republish is
    /// the caller's idempotent recovery path.
    pub async fn synchronize(&self, source: &PrivateProfile) -> Result<PublicProfile, AppError> {
        if source.uid.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Missing required field: uid".to_string(),
            ));
        }
        if source.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Missing required field: name".to_string(),
            ));
        }

        let projected = projection::project(source);

        self.store
            .upsert_public_profile(&source.uid, &projected)
            .await?;

        tracing::info!(uid = %source.uid, "Public profile synchronized");

        Ok(projected)
    }
}
