// src/config/models.rs
use serde::Deserialize;
use std::time::Duration;

/// Global checkup settings. Read-only input established before a run
/// begins; the runner never consults ambient state.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckupConfig {
    /// Identifier of the application being checked, merged into the
    /// serialized document by the transport layer.
    pub app: String,

    #[serde(default)]
    pub version: Option<String>,

    /// Status code answered when every check passes.
    #[serde(default = "default_success_status")]
    pub success_status: u16,

    /// Status code answered when any check fails or times out.
    #[serde(default = "default_failure_status")]
    pub failure_status: u16,

    /// Timeout applied to descriptors that do not carry their own, in
    /// milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,
}

fn default_success_status() -> u16 {
    200
}

fn default_failure_status() -> u16 {
    503
}

fn default_timeout_ms() -> u64 {
    crate::check::DEFAULT_TIMEOUT.as_millis() as u64
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No target application specified")]
    MissingApp,

    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),

    #[error("Conflicting status codes: success and failure both map to {0}")]
    ConflictingStatuses(u16),
}

impl CheckupConfig {
    /// Reject invalid global configuration before any check runs. This is
    /// the only fatal error class in the crate; per-check misbehavior is
    /// always converted into outcome data instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.trim().is_empty() {
            return Err(ConfigError::MissingApp);
        }
        for code in [self.success_status, self.failure_status] {
            if !(100..=599).contains(&code) {
                return Err(ConfigError::InvalidStatus(code));
            }
        }
        if self.success_status == self.failure_status {
            return Err(ConfigError::ConflictingStatuses(self.success_status));
        }
        Ok(())
    }

    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}
