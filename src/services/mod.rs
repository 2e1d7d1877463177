// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Services module - business logic layer.

pub mod identity;
pub mod projection;
pub mod sync;

pub use identity::{create_session_token, AuthDenied, IdentityVerifier, VerifiedIdentity};
pub use sync::{ProfileSync, PublicProfileStore};
