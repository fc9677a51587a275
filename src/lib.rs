pub mod cli;
pub mod error;
pub mod player;
pub mod util;

use std::time::Duration;

use serde_json::{Map, Value};
use tracing::Level;
use url::Url;

pub use crate::{
    error::{Lookup, LookupError},
    player::Player,
};

pub const URL: &str = "http://api.mihomo.me/sr_info_parsed";
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL for lookups; `MIHOMO_BASE_URL` overrides the public endpoint,
/// e.g. to point at a local mirror.
pub fn base_url() -> String {
    base_url_from(std::env::var("MIHOMO_BASE_URL").ok())
}

/// Blank or unset falls back to [`URL`].
pub fn base_url_from(var: Option<String>) -> String {
    match var.as_deref().map(str::trim) {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => URL.to_string(),
    }
}

/// HTTP client settings for lookups: redirects are not followed (a 3xx is
/// reported like any other non-200) and the whole request is bounded by
/// `timeout`.
pub fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
}

#[derive(Debug, Clone)]
pub struct MihomoClient {
    base_url: String,
    client: reqwest::Client,
}

impl MihomoClient {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(&base_url())
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, LookupError> {
        let client = client_builder(TIMEOUT).build()?;
        Ok(Self::with_http_client(base_url, client))
    }

    pub fn with_http_client(base_url: &str, client: reqwest::Client) -> Self {
        MihomoClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// `<base>/<uid>`, with the identifier taken verbatim as the last segment.
    pub fn request_url(&self, uid: &str) -> Result<Url, LookupError> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, uid))?)
    }

    /// Performs the single GET for `uid`. Never fails: every error ends up in
    /// [`Lookup::Failure`].
    pub async fn lookup(&self, uid: &str) -> Lookup {
        match self.fetch(uid).await {
            Ok(payload) => {
                let lookup = Lookup::Success(payload);
                if tracing::enabled!(Level::DEBUG) {
                    if let Some(player) = lookup.player_view() {
                        tracing::debug!(
                            uid = player.uid(),
                            nickname = player.nickname(),
                            level = player.level(),
                            world_level = player.world_level(),
                            "player found"
                        );
                    }
                }
                lookup
            }
            Err(err) => {
                tracing::debug!("lookup for {uid} failed: {err:?}");
                Lookup::Failure(err)
            }
        }
    }

    async fn fetch(&self, uid: &str) -> Result<Map<String, Value>, LookupError> {
        let url = self.request_url(uid)?;
        tracing::debug!("requesting {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("response status {}", status.as_u16());

        if status != reqwest::StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: Map<String, Value> = serde_json::from_slice(&body)?;
        Ok(payload)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
