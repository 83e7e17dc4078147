//! Health port — probing one collaborator service.

use std::future::Future;

use sandman_web_domain::health::HealthStatus;

/// Probes the liveness of a single external service.
///
/// Probing never fails: any error on the way (unreachable host, missing
/// binary, timeout) is reported as [`HealthStatus::Unhealthy`].
pub trait HealthProbe {
    /// Run the probe once and report what it saw.
    fn check(&self) -> impl Future<Output = HealthStatus> + Send;
}

impl<T: HealthProbe + Send + Sync> HealthProbe for std::sync::Arc<T> {
    fn check(&self) -> impl Future<Output = HealthStatus> + Send {
        (**self).check()
    }
}
