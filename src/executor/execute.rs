// src/executor/execute.rs
use crate::check::{CheckDescriptor, CheckOutput, Classification, Outcome};
use serde_json::Value;
use tokio::task::JoinError;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Run one check to completion or its deadline, whichever fires first.
///
/// The invocable is spawned so the caller never blocks on it while it runs.
/// A check that overruns its timeout is aborted (best effort: the wait
/// stops, side effects already in flight may not) and reported as a
/// Timeout. Every other kind of misbehavior, an explicit failure, a panic,
/// an unrecognized result shape, becomes a Failure outcome; this function
/// never propagates a check's error as control flow.
pub async fn execute(descriptor: &CheckDescriptor) -> Outcome {
    let check = descriptor.check();
    let mut handle = tokio::spawn(async move { check.invoke().await });

    let outcome = match timeout(descriptor.timeout, &mut handle).await {
        Ok(Ok(output)) => classify(descriptor, output),
        Ok(Err(join_err)) => Outcome::failure(
            &descriptor.id,
            descriptor.timeout,
            Value::String(abort_reason(join_err)),
        ),
        Err(_) => {
            handle.abort();
            Outcome::timed_out(&descriptor.id, descriptor.timeout)
        }
    };

    match outcome.classification {
        Classification::Success => debug!("Check {} passed", outcome.id),
        Classification::Failure => {
            warn!("Check {} failed: {}", outcome.id, outcome.render_payload())
        }
        Classification::Timeout => {
            warn!("Check {} timed out after {:?}", outcome.id, outcome.timeout)
        }
    }

    outcome
}

fn classify(descriptor: &CheckDescriptor, output: CheckOutput) -> Outcome {
    match output {
        CheckOutput::Ok(value) => Outcome::success(&descriptor.id, descriptor.timeout, value),
        CheckOutput::Error(value) => Outcome::failure(&descriptor.id, descriptor.timeout, value),
        // Unrecognized shape: a failure carrying the raw value, rendered
        // readable here so the report passes it straight through.
        CheckOutput::Other(value) => Outcome::failure(
            &descriptor.id,
            descriptor.timeout,
            Value::String(value.to_string()),
        ),
    }
}

fn abort_reason(err: JoinError) -> String {
    if err.is_panic() {
        let panic = err.into_panic();
        if let Some(s) = panic.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "check panicked".to_string()
        }
    } else {
        "check was cancelled".to_string()
    }
}
