// src/check/outcome.rs
use serde_json::Value;
use std::time::Duration;

/// Fixed payload reported for a check that did not answer in time.
pub const NO_RESPONSE: &str = "No response";

/// What an invocable hands back. Checks are expected to return a tagged
/// success or failure; any other shape lands in `Other` and is classified
/// as a failure carrying a readable rendering of the raw value, so nothing
/// downstream ever matches on unconstrained shapes.
#[derive(Debug, Clone)]
pub enum CheckOutput {
    Ok(Value),
    Error(Value),
    Other(Value),
}

impl CheckOutput {
    pub fn ok(value: impl Into<Value>) -> Self {
        CheckOutput::Ok(value.into())
    }

    pub fn error(value: impl Into<Value>) -> Self {
        CheckOutput::Error(value.into())
    }

    pub fn other(value: impl Into<Value>) -> Self {
        CheckOutput::Other(value.into())
    }
}

/// The three possible dispositions of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Failure,
    Timeout,
}

/// The classified result of running one check in one report cycle.
/// Created once per check per run; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub id: String,
    pub timeout: Duration,
    pub classification: Classification,
    pub payload: Value,
}

impl Outcome {
    pub fn success(id: &str, timeout: Duration, payload: Value) -> Self {
        Self {
            id: id.to_string(),
            timeout,
            classification: Classification::Success,
            payload,
        }
    }

    pub fn failure(id: &str, timeout: Duration, payload: Value) -> Self {
        Self {
            id: id.to_string(),
            timeout,
            classification: Classification::Failure,
            payload,
        }
    }

    pub fn timed_out(id: &str, timeout: Duration) -> Self {
        Self {
            id: id.to_string(),
            timeout,
            classification: Classification::Timeout,
            payload: Value::String(NO_RESPONSE.to_string()),
        }
    }

    /// Render the payload display-safe for a text wire format: strings pass
    /// through as-is, anything else becomes its compact JSON text.
    pub fn render_payload(&self) -> String {
        match &self.payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
