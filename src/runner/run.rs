// src/runner/run.rs
use crate::check::{CheckDescriptor, Classification, Outcome};
use crate::executor;
use futures::future::join_all;
use tracing::info;

/// Run every descriptor concurrently and collect exactly one outcome per
/// descriptor, in descriptor order.
///
/// Each check's work is spawned by the executor, so total wall-clock time
/// is bounded by the largest per-check timeout rather than the sum, and a
/// slow or failing check never holds up its siblings. There is no
/// short-circuiting: every check runs to completion or timeout.
pub async fn run(descriptors: &[CheckDescriptor]) -> Vec<Outcome> {
    let outcomes = join_all(descriptors.iter().map(executor::execute)).await;

    let mut passed = 0;
    let mut failed = 0;
    let mut timed_out = 0;
    for outcome in &outcomes {
        match outcome.classification {
            Classification::Success => passed += 1,
            Classification::Failure => failed += 1,
            Classification::Timeout => timed_out += 1,
        }
    }
    info!(
        "Checkup complete: {} passed, {} failed, {} timed out",
        passed, failed, timed_out
    );

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckOutput;
    use std::time::{Duration, Instant};
    use tokio::time::sleep;

    #[tokio::test]
    async fn one_outcome_per_descriptor_in_descriptor_order() {
        let descriptors = vec![
            CheckDescriptor::from_fn("a", || async { CheckOutput::ok("fine") }),
            CheckDescriptor::from_fn("b", || async { CheckOutput::error("broken") }),
            CheckDescriptor::from_fn("c", || async { CheckOutput::ok("fine") }),
        ];

        let outcomes = run(&descriptors).await;

        assert_eq!(outcomes.len(), 3);
        let ids: Vec<&str> = outcomes.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn duplicate_ids_are_not_deduplicated() {
        let descriptors = vec![
            CheckDescriptor::from_fn("dup", || async { CheckOutput::ok("fine") }),
            CheckDescriptor::from_fn("dup", || async { CheckOutput::error("broken") }),
        ];

        let outcomes = run(&descriptors).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].classification, Classification::Success);
        assert_eq!(outcomes[1].classification, Classification::Failure);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn wall_time_is_bounded_by_max_timeout_not_sum() {
        let descriptors: Vec<CheckDescriptor> = (0..4)
            .map(|i| {
                CheckDescriptor::from_fn(format!("sleepy-{i}"), || async {
                    sleep(Duration::from_millis(150)).await;
                    CheckOutput::ok("fine")
                })
                .with_timeout(Duration::from_millis(1000))
            })
            .collect();

        let start = Instant::now();
        let outcomes = run(&descriptors).await;

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes
            .iter()
            .all(|o| o.classification == Classification::Success));
        // Sequential execution would take at least 600ms.
        assert!(start.elapsed() < Duration::from_millis(450));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn timed_out_check_does_not_block_siblings() {
        let descriptors = vec![
            CheckDescriptor::from_fn("stuck", || async {
                sleep(Duration::from_secs(60)).await;
                CheckOutput::ok("never")
            })
            .with_timeout(Duration::from_millis(100)),
            CheckDescriptor::from_fn("quick", || async { CheckOutput::ok("fine") }),
        ];

        let start = Instant::now();
        let outcomes = run(&descriptors).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].classification, Classification::Timeout);
        assert_eq!(outcomes[1].classification, Classification::Success);
        assert!(start.elapsed() < Duration::from_millis(400));
    }
}
