// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Vitrine: backend API for the artist/cultural-business marketplace.
//!
//! This crate owns the profile service: private profile storage and the
//! synchronization of each private profile into its public, field-limited
//! projection ("vitrine").

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{IdentityVerifier, ProfileSync};

/// Shared application state.
///
/// Every external client lives here and is constructed once in `main`;
/// handlers receive it via `State` rather than reaching for globals.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub identity: IdentityVerifier,
    pub profile_sync: ProfileSync<FirestoreDb>,
}
