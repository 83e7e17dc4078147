//! Axum router assembly.

use axum::Router;
use axum::http::{HeaderMap, header};
use axum::response::Redirect;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sandman_web_app::ports::{ConfigStore, ElevatedCopy, HealthProbe, ReportStore};

use crate::state::AppState;

/// Port rhasspy's own web interface listens on.
const RHASSPY_PORT: u16 = 12101;

/// Build the top-level axum [`Router`].
///
/// The route table is assembled once at startup: dashboard pages at the
/// root, settings and status as nested sub-routers. A middleware layer
/// computes the health snapshot for every request, and a [`TraceLayer`]
/// logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<SP, RP, CS, EC, RS>(state: AppState<SP, RP, CS, EC, RS>) -> Router
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::dashboard::home::index::<SP, RP, CS, EC, RS>))
        .route(
            "/reports/{date}",
            get(crate::dashboard::home::report::<SP, RP, CS, EC, RS>),
        )
        .route("/rhasspy", get(rhasspy))
        .route("/health", get(health_check))
        .nest("/settings/", crate::dashboard::settings::routes())
        .nest("/status/", crate::dashboard::status::routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::health_context::<SP, RP, CS, EC, RS>,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// `GET /rhasspy` — redirect to the rhasspy admin page on the same
/// interface the client reached us through.
async fn rhasspy(headers: HeaderMap) -> Redirect {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let host = strip_port(host);
    Redirect::to(&format!("http://{host}:{RHASSPY_PORT}"))
}

/// Drop a trailing `:port` from a host header value. Bracketed IPv6 hosts
/// keep their brackets.
fn strip_port(host: &str) -> &str {
    if let Some(end) = host.rfind(']') {
        return &host[..=end];
    }
    match host.split_once(':') {
        Some((name, _port)) => name,
        None => host,
    }
}
