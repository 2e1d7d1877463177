//! Profile models for storage and API.
//!
//! Field names on the wire are camelCase to match the documents written by
//! the web frontend (`photoURL` keeps its historical capitalization).

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Authoritative profile record, stored in the `profiles` collection and
/// keyed by the auth provider's uid.
///
/// `uid` and `name` are the only mandatory fields; both default to an empty
/// string on deserialization so that a missing field surfaces as a
/// validation failure instead of a body-rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PrivateProfile {
    /// Auth provider uid (also the document ID)
    #[serde(default)]
    pub uid: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Contact email (shown on the public profile)
    pub email: Option<String>,
    /// Profile picture URL
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    /// Free-text biography
    pub bio: Option<String>,
    /// Skill/category tags (e.g. "pintura", "mural")
    pub tags: Option<Vec<String>>,
    /// Personal website URL
    pub website: Option<String>,
    /// City/region
    pub location: Option<String>,
    /// Unique human-readable handle, unset until chosen
    pub username: Option<String>,
    /// Display alias ("nome artístico")
    pub artistic_name: Option<String>,
    /// Whether onboarding was completed
    #[serde(default)]
    pub profile_completed: bool,

    // Private-only fields below; these never reach the public projection.
    /// When the account was created (RFC 3339)
    pub created_at: Option<String>,
    /// Last profile mutation (RFC 3339)
    pub updated_at: Option<String>,
    /// Marketing/notification e-mail opt-in
    #[serde(default)]
    pub email_notifications: bool,
}

/// Public, read-optimized projection of a [`PrivateProfile`], stored in the
/// `public_profiles` collection under the same uid.
///
/// Absent fields serialize as explicit nulls on purpose: the sync always
/// writes the full intended state, so a field cleared on the private record
/// must overwrite its stale public value rather than be skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PublicProfile {
    pub uid: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub tags: Option<Vec<String>>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub username: Option<String>,
    pub artistic_name: Option<String>,
    pub profile_completed: bool,
}
