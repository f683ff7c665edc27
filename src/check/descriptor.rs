// src/check/descriptor.rs
use crate::check::CheckOutput;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Timeout applied to descriptors that do not specify their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// One unit of health verification. Implementations receive no shared state
/// and must not depend on sibling checks.
#[async_trait]
pub trait Check: Send + Sync {
    async fn invoke(&self) -> CheckOutput;
}

struct FnCheck<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> Check for FnCheck<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = CheckOutput> + Send,
{
    async fn invoke(&self) -> CheckOutput {
        (self.f)().await
    }
}

/// Static definition of one check: id, invocable, per-check timeout.
/// Built before a run starts and never modified mid-run.
#[derive(Clone)]
pub struct CheckDescriptor {
    pub id: String,
    pub timeout: Duration,
    check: Arc<dyn Check>,
}

impl CheckDescriptor {
    pub fn new(id: impl Into<String>, check: Arc<dyn Check>) -> Self {
        Self {
            id: id.into(),
            timeout: DEFAULT_TIMEOUT,
            check,
        }
    }

    /// Build a descriptor from a zero-argument async closure. Named
    /// functions that take arguments are captured into a closure here,
    /// at construction time, so the executor only ever sees one shape.
    pub fn from_fn<F, Fut>(id: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CheckOutput> + Send + 'static,
    {
        Self::new(id, Arc::new(FnCheck { f }))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn check(&self) -> Arc<dyn Check> {
        self.check.clone()
    }
}

impl fmt::Debug for CheckDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckDescriptor")
            .field("id", &self.id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
