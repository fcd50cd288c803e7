//! Record types for the `artist_signups` table.
//!
//! Field names match the table columns one-to-one, so no serde renaming is
//! needed. The request/response split mirrors the table lifecycle: callers
//! build a [`NewSubmission`], the server assigns `id` and `created_at`, and
//! reads come back as [`ArtistSubmission`] rows. There is no update
//! operation — rows are created, listed, and deleted, nothing else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a registration is for a solo act or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistType {
    Solo,
    Group,
}

/// Insert payload for one artist registration.
///
/// Optional fields are omitted from the request body when `None` so the
/// table defaults (NULL) apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSubmission {
    pub artist_name: String,
    pub artist_type: ArtistType,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    pub bio: String,
    pub terms_agreed: bool,
    pub privacy_agreed: bool,
}

/// One stored registration, as returned by PostgREST.
///
/// `#[serde(default)]` on the optional columns keeps deserialization
/// resilient if the live table grows columns this client does not model —
/// `deny_unknown_fields` is intentionally not used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSubmission {
    /// Server-assigned row id.
    pub id: Uuid,
    pub artist_name: String,
    pub artist_type: ArtistType,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub soundcloud: Option<String>,
    #[serde(default)]
    pub spotify: Option<String>,
    pub bio: String,
    pub terms_agreed: bool,
    pub privacy_agreed: bool,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}
