//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// Authoritative private profiles (keyed by uid)
    pub const PROFILES: &str = "profiles";
    /// Public, read-optimized projections (keyed by the same uid)
    pub const PUBLIC_PROFILES: &str = "public_profiles";
}
