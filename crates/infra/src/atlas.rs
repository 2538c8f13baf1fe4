// crates/infra/src/atlas.rs
//! HTTP adapter for the Atlas Academy API and static script host.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use script_lines_ports::{QuestDto, ScriptCatalog, ScriptFetcher, WarDto};
use script_lines_shared_kernel::{InfraResult, InfrastructureError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.atlasacademy.io";
pub const DEFAULT_STATIC_BASE: &str = "https://static.atlasacademy.io";
pub const DEFAULT_REGION: &str = "JP";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Base URLs and query settings for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasEndpoints {
    pub api_base: String,
    pub static_base: String,
    pub region: String,
    pub language: String,
}

impl Default for AtlasEndpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            static_base: DEFAULT_STATIC_BASE.to_string(),
            region: DEFAULT_REGION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AtlasEndpoints {
    pub fn war_url(&self, id: &str) -> String {
        self.nice_url("war", id)
    }

    pub fn quest_url(&self, id: &str) -> String {
        self.nice_url("quest", id)
    }

    /// Scripts are sharded by the first two characters of their id.
    pub fn script_url(&self, id: &str) -> String {
        let shard: String = id.chars().take(2).collect();
        format!("{}/{}/Script/{shard}/{id}.txt", self.static_base.trim_end_matches('/'), self.region)
    }

    fn nice_url(&self, kind: &str, id: &str) -> String {
        format!(
            "{}/nice/{}/{kind}/{id}?lang={}",
            self.api_base.trim_end_matches('/'),
            self.region,
            self.language
        )
    }
}

/// [`ScriptCatalog`] and [`ScriptFetcher`] backed by `reqwest`. One attempt per request.
#[derive(Debug, Clone)]
pub struct AtlasClient {
    http: Client,
    endpoints: AtlasEndpoints,
}

impl AtlasClient {
    pub fn new(endpoints: AtlasEndpoints, timeout: Duration) -> InfraResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("script-lines/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| InfrastructureError::Transport {
                url: endpoints.api_base.clone(),
                details: format!("failed to build HTTP client: {err}"),
            })?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &AtlasEndpoints {
        &self.endpoints
    }

    async fn get_text(&self, url: &str, kind: &str, id: &str) -> InfraResult<String> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await.map_err(|err| transport(url, &err))?;
        check_status(response.status(), url, kind, id)?;
        response.text().await.map_err(|err| transport(url, &err))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, kind: &str, id: &str) -> InfraResult<T> {
        let body = self.get_text(url, kind, id).await?;
        decode(url, &body)
    }
}

#[async_trait]
impl ScriptCatalog for AtlasClient {
    async fn war(&self, id: &str) -> Result<WarDto> {
        Ok(self.get_json(&self.endpoints.war_url(id), "war", id).await?)
    }

    async fn quest(&self, id: &str) -> Result<QuestDto> {
        Ok(self.get_json(&self.endpoints.quest_url(id), "quest", id).await?)
    }

    fn script_locator(&self, id: &str) -> String {
        self.endpoints.script_url(id)
    }
}

#[async_trait]
impl ScriptFetcher for AtlasClient {
    async fn fetch(&self, locator: &str) -> Result<String> {
        Ok(self.get_text(locator, "script", script_id_from_url(locator)).await?)
    }
}

/// Map a response status onto the error taxonomy: 404 is "not found", anything else
/// outside 2xx is a transport failure.
pub fn check_status(status: StatusCode, url: &str, kind: &str, id: &str) -> InfraResult<()> {
    if status == StatusCode::NOT_FOUND {
        return Err(InfrastructureError::NotFound { kind: kind.to_string(), id: id.to_string() });
    }
    if !status.is_success() {
        return Err(InfrastructureError::Transport {
            url: url.to_string(),
            details: format!("unexpected status {status}"),
        });
    }
    Ok(())
}

pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> InfraResult<T> {
    serde_json::from_str(body)
        .map_err(|err| InfrastructureError::Decode { url: url.to_string(), details: err.to_string() })
}

/// `.../Script/01/0100000111.txt` → `0100000111`.
pub fn script_id_from_url(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    last.strip_suffix(".txt").unwrap_or(last)
}

fn transport(url: &str, err: &reqwest::Error) -> InfrastructureError {
    InfrastructureError::Transport { url: url.to_string(), details: err.to_string() }
}
