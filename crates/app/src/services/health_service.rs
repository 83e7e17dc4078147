//! Health service — reduce two probes to one snapshot.

use sandman_web_domain::health::HealthSnapshot;

use crate::ports::HealthProbe;

/// Application service aggregating the sandman and rhasspy probes.
pub struct HealthService<S, R> {
    sandman: S,
    rhasspy: R,
}

impl<S: HealthProbe, R: HealthProbe> HealthService<S, R> {
    /// Create a new service backed by the two given probes.
    pub fn new(sandman: S, rhasspy: R) -> Self {
        Self { sandman, rhasspy }
    }

    /// Probe both services and return a fresh snapshot.
    ///
    /// The probes are quick local checks; they run sequentially, matching
    /// how the hub has always evaluated them.
    pub async fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            sandman: self.sandman.check().await,
            rhasspy: self.rhasspy.check().await,
        }
    }
}
