use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

/// Append-only access log. Rows are `[username, "DD/MM/YYYY HH:MM"]`.
pub trait AccessLog {
    async fn append_login(&self, username: &str, timestamp: &str) -> Result<()>;
}

/// Configuration for the remote spreadsheet log
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Row-append endpoint (from ACCESS_LOG_URL env var)
    pub append_url: String,
    /// Worksheet the rows land in
    pub worksheet: String,
}

impl SheetConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let append_url = std::env::var("ACCESS_LOG_URL")
            .context("ACCESS_LOG_URL environment variable not set")?;
        let worksheet =
            std::env::var("ACCESS_LOG_WORKSHEET").unwrap_or_else(|_| "acessos".to_string());

        Ok(Self {
            append_url,
            worksheet,
        })
    }
}

/// Remote spreadsheet client that appends one row per login
pub struct RemoteSheet {
    client: Client,
    config: SheetConfig,
}

impl RemoteSheet {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl AccessLog for RemoteSheet {
    async fn append_login(&self, username: &str, timestamp: &str) -> Result<()> {
        let request = AppendRowRequest {
            worksheet: &self.config.worksheet,
            row: vec![username, timestamp],
        };

        let response = self
            .client
            .post(&self.config.append_url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to reach access-log endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Access-log append rejected: {} - {}", status, body);
        }

        Ok(())
    }
}

/// Stand-in used when no append endpoint is configured. Every append
/// fails, which the login path downgrades to a warning.
pub struct DisabledLog;

impl AccessLog for DisabledLog {
    async fn append_login(&self, _username: &str, _timestamp: &str) -> Result<()> {
        anyhow::bail!("access-log endpoint not configured")
    }
}

#[derive(Debug, Serialize)]
struct AppendRowRequest<'a> {
    worksheet: &'a str,
    row: Vec<&'a str>,
}
