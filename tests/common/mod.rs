// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

use std::sync::Arc;
use vitrine_api::config::Config;
use vitrine_api::db::FirestoreDb;
use vitrine_api::routes::create_router;
use vitrine_api::services::{create_session_token, IdentityVerifier, ProfileSync};
use vitrine_api::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a session token the test app's verifier accepts.
#[allow(dead_code)]
pub fn create_test_jwt(uid: &str, signing_key: &[u8]) -> String {
    create_session_token(uid, signing_key).expect("Failed to create session token")
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_db(test_db_offline())
}

/// Create a test app around an arbitrary database (offline mock or
/// emulator-backed).
#[allow(dead_code)]
pub fn create_test_app_with_db(db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let identity = IdentityVerifier::new(&config.jwt_signing_key);
    let profile_sync = ProfileSync::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        identity,
        profile_sync,
    });

    (create_router(state.clone()), state)
}
