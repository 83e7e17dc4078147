//! Settings pages — config download and factory reset.

use askama::Template;
use axum::Extension;
use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum_extra::extract::SignedCookieJar;

use sandman_web_app::ports::{ConfigStore, ElevatedCopy, HealthProbe, ReportStore};
use sandman_web_domain::health::HealthSnapshot;

use crate::error::PageError;
use crate::flash;
use crate::state::AppState;

/// User-facing text shown when the reset could not be completed. The exact
/// wording matches what the hub has always shown.
pub const RESET_FAILED_MESSAGE: &str = "The config file could not be reset.";

/// Build the `/settings` sub-router.
pub fn routes<SP, RP, CS, EC, RS>() -> Router<AppState<SP, RP, CS, EC, RS>>
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/downloadconfig", get(download_config::<SP, RP, CS, EC, RS>))
        .route("/resetconfig", get(reset_config::<SP, RP, CS, EC, RS>))
}

/// Settings page template.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    health_issue: bool,
    messages: Vec<String>,
}

impl IntoResponse for SettingsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /settings/` — settings page, consuming pending flash messages.
pub async fn index(
    Extension(health): Extension<HealthSnapshot>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, SettingsTemplate) {
    let (jar, messages) = flash::take(jar);
    (
        jar,
        SettingsTemplate {
            health_issue: health.health_issue(),
            messages,
        },
    )
}

/// `GET /settings/downloadconfig` — stream the live config as an attachment.
pub async fn download_config<SP, RP, CS, EC, RS>(
    State(state): State<AppState<SP, RP, CS, EC, RS>>,
) -> Result<Response, PageError>
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    let download = state.config_service.download().await?;
    let disposition = format!("attachment; filename=\"{}\"", download.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.bytes,
    )
        .into_response())
}

/// `GET /settings/resetconfig` — overwrite the config with defaults (PRG).
///
/// Failures never surface as error responses: the redirect always happens,
/// with a one-shot notice on the next settings page when the copy failed.
pub async fn reset_config<SP, RP, CS, EC, RS>(
    State(state): State<AppState<SP, RP, CS, EC, RS>>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect)
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    let jar = match state.config_service.reset().await {
        Ok(()) => jar,
        Err(err) => {
            tracing::warn!(error = %err, "config reset failed");
            flash::push(jar, RESET_FAILED_MESSAGE)
        }
    };

    (jar, Redirect::to("/settings/"))
}
