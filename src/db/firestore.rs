// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Private profiles (authoritative records, `profiles` collection)
//! - Public profiles (projections, `public_profiles` collection)
//!
//! The public collection is only ever written through the sync
//! orchestrator's [`PublicProfileStore`] implementation below.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{PrivateProfile, PublicProfile};
use crate::services::PublicProfileStore;
use async_trait::async_trait;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Private Profile Operations ──────────────────────────────

    /// Get a private profile by uid.
    pub async fn get_private_profile(
        &self,
        uid: &str,
    ) -> Result<Option<PrivateProfile>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PROFILES)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a private profile.
    pub async fn upsert_private_profile(&self, profile: &PrivateProfile) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::PROFILES)
            .document_id(&profile.uid)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Public Profile Operations ───────────────────────────────

    /// Get a public profile by uid.
    pub async fn get_public_profile(&self, uid: &str) -> Result<Option<PublicProfile>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PUBLIC_PROFILES)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[async_trait]
impl PublicProfileStore for FirestoreDb {
    /// Merge-upsert the public projection under the source uid.
    ///
    /// The update patches exactly the fields in `profile`; since the
    /// projection serializes every allow-listed field (absent ones as
    /// nulls), each sync rewrites the full public state. Repeating the
    /// write with identical input is a no-op at the store level.
    async fn upsert_public_profile(
        &self,
        uid: &str,
        profile: &PublicProfile,
    ) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::PUBLIC_PROFILES)
            .document_id(uid)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
