//! Shared application state for axum handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use sandman_web_app::ports::{ConfigStore, ElevatedCopy, HealthProbe, ReportStore};
use sandman_web_app::services::config_service::ConfigService;
use sandman_web_app::services::health_service::HealthService;
use sandman_web_app::services::report_service::ReportService;

/// Application state shared across all axum handlers.
///
/// Generic over the probe and store types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SP, RP, CS, EC, RS> {
    /// Health aggregation over the two collaborator probes.
    pub health_service: Arc<HealthService<SP, RP>>,
    /// Config download/reset service.
    pub config_service: Arc<ConfigService<CS, EC>>,
    /// Report archive service.
    pub report_service: Arc<ReportService<RS>>,
    /// Key the flash cookie is signed with.
    pub cookie_key: Key,
}

impl<SP, RP, CS, EC, RS> Clone for AppState<SP, RP, CS, EC, RS> {
    fn clone(&self) -> Self {
        Self {
            health_service: Arc::clone(&self.health_service),
            config_service: Arc::clone(&self.config_service),
            report_service: Arc::clone(&self.report_service),
            cookie_key: self.cookie_key.clone(),
        }
    }
}

impl<SP, RP, CS, EC, RS> AppState<SP, RP, CS, EC, RS>
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        health_service: HealthService<SP, RP>,
        config_service: ConfigService<CS, EC>,
        report_service: ReportService<RS>,
        cookie_key: Key,
    ) -> Self {
        Self {
            health_service: Arc::new(health_service),
            config_service: Arc::new(config_service),
            report_service: Arc::new(report_service),
            cookie_key,
        }
    }
}

impl<SP, RP, CS, EC, RS> FromRef<AppState<SP, RP, CS, EC, RS>> for Key {
    fn from_ref(state: &AppState<SP, RP, CS, EC, RS>) -> Self {
        state.cookie_key.clone()
    }
}
