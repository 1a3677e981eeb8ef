// Hand-crafted async HTTP client for the listing backend.
//
// Base path: /api/
// Read-only: the backend exposes no mutating endpoints to this client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{Agent, HouseType, Listing};

/// Async client for the listing API.
///
/// Thin wrapper over `reqwest::Client` with a normalized base URL.
/// Every call is a single attempt; callers decide what a failure means.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for the given backend URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("homeport/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (used by tests).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Normalize the base URL so joining `api/...` paths always works.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Join a relative path (e.g. `"api/houses"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining `api/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // char-wise so a multi-byte body cannot split mid-character
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            let raw = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            })
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Listings ─────────────────────────────────────────────────────

    /// Featured listings, at most `limit` entries, backend-ordered.
    pub async fn top_listings(&self, limit: u32) -> Result<Vec<Listing>, Error> {
        self.get_with_params("api/houses/top", &[("limit", limit.to_string())])
            .await
    }

    /// The complete listing set.
    pub async fn list_listings(&self) -> Result<Vec<Listing>, Error> {
        self.get("api/houses").await
    }

    /// A single listing by id. `Err(e)` with `e.is_not_found()` when
    /// the id does not exist.
    pub async fn get_listing(&self, id: i64) -> Result<Listing, Error> {
        self.get(&format!("api/houses/{id}")).await
    }

    // ── Agents ───────────────────────────────────────────────────────

    pub async fn list_agents(&self) -> Result<Vec<Agent>, Error> {
        self.get("api/agents").await
    }

    // ── House types ──────────────────────────────────────────────────

    pub async fn list_house_types(&self) -> Result<Vec<HouseType>, Error> {
        self.get("api/house-types").await
    }
}
