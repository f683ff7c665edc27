// src/report/builder.rs
use crate::check::{Classification, Outcome};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ok,
    Failures,
}

/// One failing or timed-out check as it appears on the wire. `timeout` is
/// the configured deadline in milliseconds, `result` the rendered payload.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub result: String,
    pub timeout: u64,
}

impl From<Outcome> for ReportEntry {
    fn from(outcome: Outcome) -> Self {
        let result = outcome.render_payload();
        Self {
            id: outcome.id,
            result,
            timeout: outcome.timeout.as_millis() as u64,
        }
    }
}

/// Aggregated result of one run. The `failures` and `timeouts` keys are
/// omitted from the serialized form entirely when empty; existing consumers
/// depend on their absence, not on empty arrays.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ReportEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub timeouts: Vec<ReportEntry>,
}

impl Report {
    /// Merge the caller-provided identity fields into the serialized
    /// document. Transport glue for the layer that owns serialization;
    /// the core contract is the `(status code, Report)` pair from `build`.
    pub fn to_document(&self, app: &str, version: Option<&str>) -> serde_json::Result<Value> {
        let mut doc = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut doc {
            map.insert("app".to_string(), Value::String(app.to_string()));
            if let Some(version) = version {
                map.insert("version".to_string(), Value::String(version.to_string()));
            }
        }
        Ok(doc)
    }
}

/// Partition outcomes by classification and derive the overall status plus
/// the status code to answer with. Successful checks only prove the absence
/// of problems; they carry no report entry. Entries keep the runner's order.
pub fn build(outcomes: Vec<Outcome>, success_status: u16, failure_status: u16) -> (u16, Report) {
    let mut failures = Vec::new();
    let mut timeouts = Vec::new();

    for outcome in outcomes {
        match outcome.classification {
            Classification::Success => {}
            Classification::Failure => failures.push(ReportEntry::from(outcome)),
            Classification::Timeout => timeouts.push(ReportEntry::from(outcome)),
        }
    }

    let status = if failures.is_empty() && timeouts.is_empty() {
        ReportStatus::Ok
    } else {
        ReportStatus::Failures
    };
    let code = match status {
        ReportStatus::Ok => success_status,
        ReportStatus::Failures => failure_status,
    };

    (code, Report {
        status,
        failures,
        timeouts,
    })
}
