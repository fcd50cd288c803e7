//! # mothership-signups — Typed Supabase gateway for artist registrations
//!
//! Mediates every record operation against the hosted `artist_signups`
//! table: submit, list, delete-by-id, and a connectivity probe. Each
//! operation is one non-blocking remote exchange; persistence, querying,
//! and transport belong to Supabase.
//!
//! The primary API is an explicit service object: build a [`SignupsClient`]
//! from a validated [`AppConfig`](mothership_config::AppConfig) during
//! startup and pass it by reference. For embedders that want one
//! process-wide handle instead, [`shared`] constructs it lazily, exactly
//! once, and keeps it for the process lifetime — there is no teardown path.

pub mod client;
pub mod error;
pub mod submission;

pub use client::{SignupsClient, SIGNUPS_TABLE};
pub use error::SignupsError;
pub use submission::{ArtistSubmission, ArtistType, NewSubmission};

use std::sync::OnceLock;

use mothership_config::AppConfig;
use parking_lot::Mutex;

static SHARED: OnceLock<SignupsClient> = OnceLock::new();
static SHARED_INIT: Mutex<()> = Mutex::new(());

/// Process-wide client handle, constructed on first access.
///
/// Concurrent first access yields exactly one constructed client; later
/// calls return the same reference and ignore the passed configuration.
/// The handle lives until process exit.
pub fn shared(config: &AppConfig) -> Result<&'static SignupsClient, SignupsError> {
    if let Some(client) = SHARED.get() {
        return Ok(client);
    }

    // Serialize first-access construction so racing callers cannot build a
    // second transient client before one is published.
    let _guard = SHARED_INIT.lock();
    if let Some(client) = SHARED.get() {
        return Ok(client);
    }
    let client = SignupsClient::new(config)?;
    Ok(SHARED.get_or_init(|| client))
}
