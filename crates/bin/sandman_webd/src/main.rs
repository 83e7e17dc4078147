//! # sandman-webd — sandman web front-end daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct probe, config store, and report store adapters
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use sandman_web_adapter_config_fs::{FsConfigStore, SudoCopy};
use sandman_web_adapter_http_axum::state::AppState;
use sandman_web_adapter_probe::{CommandProbe, TcpProbe};
use sandman_web_adapter_reports_file::FileReportStore;
use sandman_web_app::services::config_service::ConfigService;
use sandman_web_app::services::health_service::HealthService;
use sandman_web_app::services::report_service::ReportService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Probes
    let sandman_probe = CommandProbe::systemd_unit(&config.health.sandman_unit);
    let rhasspy_probe = TcpProbe::new(
        config.health.rhasspy_address.clone(),
        Duration::from_millis(config.health.probe_timeout_ms),
    );

    // Stores
    let config_store = FsConfigStore::new(
        &config.paths.config_file,
        &config.paths.default_config_file,
    );
    let elevated_copy = SudoCopy::new(
        &config.paths.default_config_file,
        &config.paths.config_file,
    );
    let report_store = FileReportStore::new(&config.paths.reports_dir);

    // Services
    let health_service = HealthService::new(sandman_probe, rhasspy_probe);
    let config_service = ConfigService::new(config_store, elevated_copy);
    let report_service = ReportService::new(report_store);

    // HTTP
    let state = AppState::new(
        health_service,
        config_service,
        report_service,
        config.secret.cookie_key(),
    );
    let app = sandman_web_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "sandman-webd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
