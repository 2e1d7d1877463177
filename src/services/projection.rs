// SPDX-License-Identifier: MIT
// Copyright 2026 Vitrine <dev@vitrine.art.br>

//! Projection of a private profile into its public, field-limited record.
//!
//! The projection is allow-list based: a field reaches the public record
//! only if it is enumerated here. Fields added to [`PrivateProfile`] later
//! stay private until someone deliberately widens the list.

use crate::models::{PrivateProfile, PublicProfile};

/// Wire names of every field a public profile may carry.
///
/// This is the explicit enumeration the projection tests close over; it must
/// stay in lockstep with the [`PublicProfile`] struct.
pub const PUBLIC_FIELDS: &[&str] = &[
    "uid",
    "name",
    "email",
    "photoURL",
    "bio",
    "tags",
    "website",
    "location",
    "username",
    "artisticName",
    "profileCompleted",
];

/// Compute the public projection of a private profile.
///
/// Pure and total: any `PrivateProfile` value maps to a `PublicProfile`.
/// Fields absent on the source stay `None` and are written as explicit
/// nulls downstream.
pub fn project(source: &PrivateProfile) -> PublicProfile {
    PublicProfile {
        uid: source.uid.clone(),
        name: source.name.clone(),
        email: source.email.clone(),
        photo_url: source.photo_url.clone(),
        bio: source.bio.clone(),
        tags: source.tags.clone(),
        website: source.website.clone(),
        location: source.location.clone(),
        username: source.username.clone(),
        artistic_name: source.artistic_name.clone(),
        profile_completed: source.profile_completed,
    }
}
