//! Typed client for the Supabase `artist_signups` table.
//!
//! All paths follow the PostgREST convention
//! `{SUPABASE_URL}/rest/v1/{table}` with filters and ordering expressed as
//! query parameters.
//!
//! | Method | Path (relative to project URL)                      | Operation |
//! |--------|-----------------------------------------------------|-----------|
//! | POST   | `/rest/v1/artist_signups`                           | `submit` |
//! | GET    | `/rest/v1/artist_signups?select=*&order=created_at.desc` | `list_all` |
//! | DELETE | `/rest/v1/artist_signups?id=eq.{id}`                | `delete_by_id` |
//! | GET    | `/rest/v1/artist_signups?select=id&limit=1`         | `check_connection` |

use mothership_config::AppConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use url::Url;
use uuid::Uuid;

use crate::error::SignupsError;
use crate::submission::{ArtistSubmission, NewSubmission};

/// PostgREST path prefix for Supabase projects.
const REST_PREFIX: &str = "rest/v1";

/// Table holding one row per artist registration.
pub const SIGNUPS_TABLE: &str = "artist_signups";

/// PostgREST media type that collapses a one-row response to a bare object.
const PGRST_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for the artist-signups store.
///
/// Holds one `reqwest::Client` with the project credentials bound as default
/// headers. Construction performs no network I/O; cloning shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct SignupsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SignupsClient {
    /// Build a client from a validated configuration.
    ///
    /// Fails only if the anon key cannot be expressed as an HTTP header
    /// value; no remote call is made here.
    pub fn new(config: &AppConfig) -> Result<Self, SignupsError> {
        let mut api_key = HeaderValue::from_str(config.supabase_anon_key.as_str())
            .map_err(|_| SignupsError::InvalidKey)?;
        api_key.set_sensitive(true);
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.supabase_anon_key.as_str()))
                .map_err(|_| SignupsError::InvalidKey)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SignupsError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        if config.environment.is_development() {
            tracing::debug!(url = %config.supabase_url, "Supabase client initialized");
        }

        Ok(Self {
            http,
            base_url: config.supabase_url.clone(),
        })
    }

    fn table_url(&self) -> String {
        // The project URL may carry a path (self-hosted deployments behind a
        // prefix), with or without a trailing slash; always insert exactly
        // one separator.
        format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            REST_PREFIX,
            SIGNUPS_TABLE
        )
    }

    /// Submit one artist registration.
    ///
    /// Calls `POST {base_url}/rest/v1/artist_signups` asking PostgREST to
    /// return the inserted row, so the caller gets the server-assigned `id`
    /// and `created_at` back.
    pub async fn submit(
        &self,
        submission: &NewSubmission,
    ) -> Result<ArtistSubmission, SignupsError> {
        let endpoint = "POST /artist_signups";
        let url = self.table_url();

        let resp = self
            .http
            .post(&url)
            .header("Prefer", "return=representation")
            .header(ACCEPT, PGRST_OBJECT)
            .json(submission)
            .send()
            .await
            .map_err(|e| SignupsError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SignupsError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let row: ArtistSubmission =
            resp.json().await.map_err(|e| SignupsError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        // Success log carries the server-assigned id only — no PII.
        tracing::info!(id = %row.id, "artist submission stored");
        Ok(row)
    }

    /// List all registrations, newest first.
    ///
    /// Calls `GET {base_url}/rest/v1/artist_signups?select=*&order=created_at.desc`.
    /// An empty store yields `Ok(vec![])`, never an absent value.
    pub async fn list_all(&self) -> Result<Vec<ArtistSubmission>, SignupsError> {
        let endpoint = "GET /artist_signups";
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SignupsError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SignupsError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| SignupsError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Delete the registration matching `id`.
    ///
    /// Calls `DELETE {base_url}/rest/v1/artist_signups?id=eq.{id}`.
    /// PostgREST reports success whether or not a row matched, so a
    /// non-existent id completes without error.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), SignupsError> {
        let endpoint = format!("DELETE /artist_signups/{id}");
        let url = format!("{}?id=eq.{id}", self.table_url());

        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| SignupsError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SignupsError::Api {
                endpoint,
                status,
                body,
            });
        }

        // Audit entry for the deletion.
        tracing::info!(%id, "artist submission deleted");
        Ok(())
    }

    /// Connectivity probe: a minimal read of at most one row, one column.
    ///
    /// Calls `GET {base_url}/rest/v1/artist_signups?select=id&limit=1` and
    /// reports whether it completed with a success status. Every failure —
    /// transport or remote — becomes `false`; nothing propagates.
    pub async fn check_connection(&self) -> bool {
        let url = format!("{}?select=id&limit=1", self.table_url());
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Raw HTTP client, for operations this gateway does not model.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Configured project base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
