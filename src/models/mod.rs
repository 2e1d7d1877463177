// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Data models for the application.

pub mod profile;

pub use profile::{PrivateProfile, PublicProfile};
