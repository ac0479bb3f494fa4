//! Pure Snyk REST API client.
//!
//! A minimal client for the Snyk REST API. Supports listing the organizations
//! of a group and the projects of an organization, following JSON:API
//! pagination links until the collection is exhausted.
//!
//! # Example
//!
//! ```rust,ignore
//! use snyk_client::SnykClient;
//!
//! let client = SnykClient::new("your-api-token");
//!
//! for org in client.list_group_orgs("group-id").await? {
//!     let projects = client.list_org_projects(&org.id).await?;
//!     println!("{}: {} projects", org.name(), projects.len());
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SnykError};
pub use types::{Links, Organization, Page, Project};

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.snyk.io";

/// Date-stamped REST API version sent with every request.
pub const API_VERSION: &str = "2024-08-22";

/// Page size requested from collection endpoints.
pub const PAGE_LIMIT: u32 = 100;

/// Pause after every page to stay under the API rate limit.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(200);

const JSON_API: &str = "application/vnd.api+json";

pub struct SnykClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
    page_delay: Duration,
}

impl SnykClient {
    /// Create a client authenticating with `token`. The token is sent as-is in
    /// the `Authorization` header.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: SecretString::from(token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Set a custom API origin (regional deployments, proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the pause taken after every page (defaults to 200ms).
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Get the API origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every organization in a group.
    pub async fn list_group_orgs(&self, group_id: &str) -> Result<Vec<Organization>> {
        let url = self.endpoint(&format!("/rest/groups/{}/orgs", group_id))?;
        self.get_paginated(url).await
    }

    /// List every project in an organization.
    pub async fn list_org_projects(&self, org_id: &str) -> Result<Vec<Project>> {
        let url = self.endpoint(&format!("/rest/orgs/{}/projects", org_id))?;
        self.get_paginated(url).await
    }

    /// Fetch a collection starting at `start`, following `links.next` until
    /// the API stops returning one. Items are returned in page order.
    ///
    /// Any non-2xx response aborts the whole fetch; there is no retry.
    pub async fn get_paginated<T: DeserializeOwned>(&self, start: Url) -> Result<Vec<T>> {
        let base = Url::parse(&self.base_url)?;
        let mut items = Vec::new();
        let mut next = Some(start);

        while let Some(url) = next.take() {
            debug!(%url, "Requesting page");
            let resp = self
                .client
                .get(url.as_str())
                .header(ACCEPT, JSON_API)
                .header(AUTHORIZATION, self.token.expose_secret())
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(SnykError::Api {
                    status: status.as_u16(),
                    url: url.to_string(),
                    message: body,
                });
            }

            let body = resp.text().await?;
            let page: Page<T> = serde_json::from_str(&body)?;
            info!("Response Code: {} - Request URL: {}", status.as_u16(), url);

            next = page
                .next_link()
                .map(|link| resolve_link(&base, link))
                .transpose()?;
            items.extend(page.data);

            tokio::time::sleep(self.page_delay).await;
        }

        Ok(items)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join(path)?;
        url.query_pairs_mut()
            .append_pair("version", API_VERSION)
            .append_pair("limit", &PAGE_LIMIT.to_string());
        Ok(url)
    }
}

/// Resolve a pagination link. The API returns origin-relative links
/// (`/rest/...`); those are anchored at `base`. Absolute links pass through.
pub fn resolve_link(base: &Url, link: &str) -> Result<Url> {
    Ok(base.join(link)?)
}
