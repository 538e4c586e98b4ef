use std::collections::HashMap;

use anyhow::{bail, Result};
use chrono::Local;
use tracing::{info, warn};

use crate::dates::format_log_timestamp;
use crate::sheets::AccessLog;

/// Credential check seam. The static in-memory table below is the only
/// implementation today; a real identity provider can slot in here without
/// touching the rest of the pipeline.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed username/password table, not configurable at runtime.
pub struct StaticCredentials {
    credentials: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            credentials: pairs.into_iter().collect(),
        }
    }

    /// The built-in office accounts.
    pub fn builtin() -> Self {
        Self::new([
            ("vereador".to_string(), "gabinete2024".to_string()),
            ("assessoria".to_string(), "oficios#123".to_string()),
        ])
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.credentials
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

/// Authenticate a user and record the login.
///
/// Invalid credentials are a hard error and leave no trace. The access-log
/// append is best-effort: its failure is reported as a warning and never
/// blocks the login.
pub async fn login(
    verifier: &impl CredentialVerifier,
    access_log: &impl AccessLog,
    username: &str,
    password: &str,
) -> Result<()> {
    if !verifier.verify(username, password) {
        bail!("Invalid username or password");
    }

    let timestamp = format_log_timestamp(Local::now());
    match access_log.append_login(username, &timestamp).await {
        Ok(()) => info!("Access logged for {}", username),
        Err(e) => warn!("Access log append failed (login proceeds): {}", e),
    }

    Ok(())
}
