//! Status page — per-service health of the two collaborators.

use askama::Template;
use axum::Extension;
use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use sandman_web_app::ports::{ConfigStore, ElevatedCopy, HealthProbe, ReportStore};
use sandman_web_domain::health::HealthSnapshot;

use crate::state::AppState;

/// Build the `/status` sub-router.
pub fn routes<SP, RP, CS, EC, RS>() -> Router<AppState<SP, RP, CS, EC, RS>>
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

/// Status page template.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    health_issue: bool,
    sandman_healthy: bool,
    rhasspy_healthy: bool,
}

impl IntoResponse for StatusTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /status/` — per-service health, from the same snapshot the banner
/// uses.
pub async fn index(Extension(health): Extension<HealthSnapshot>) -> StatusTemplate {
    StatusTemplate {
        health_issue: health.health_issue(),
        sandman_healthy: health.sandman.is_healthy(),
        rhasspy_healthy: health.rhasspy.is_healthy(),
    }
}
