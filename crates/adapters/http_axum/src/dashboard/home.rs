//! Dashboard home page and per-day report view.

use askama::Template;
use axum::Extension;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDate;

use sandman_web_app::ports::{ConfigStore, ElevatedCopy, HealthProbe, ReportStore};
use sandman_web_domain::error::NotFoundError;
use sandman_web_domain::health::HealthSnapshot;
use sandman_web_domain::report::ReportItem;

use crate::error::PageError;
use crate::state::AppState;

/// Home page template — the report archive.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    health_issue: bool,
    dates: Vec<String>,
    latest: Option<LatestSummary>,
}

struct LatestSummary {
    date: String,
    item_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Single-day report template.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    health_issue: bool,
    date: String,
    starting_time: String,
    items: Vec<ReportItem>,
}

impl IntoResponse for ReportTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — report archive overview, newest first.
pub async fn index<SP, RP, CS, EC, RS>(
    State(state): State<AppState<SP, RP, CS, EC, RS>>,
    Extension(health): Extension<HealthSnapshot>,
) -> Result<HomeTemplate, PageError>
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    let dates = state.report_service.list_dates().await?;
    let latest = state.report_service.latest().await?;

    Ok(HomeTemplate {
        health_issue: health.health_issue(),
        dates: dates.iter().rev().map(ToString::to_string).collect(),
        latest: latest.map(|report| LatestSummary {
            date: report.date.to_string(),
            item_count: report.items.len(),
        }),
    })
}

/// `GET /reports/{date}` — one day's activity.
pub async fn report<SP, RP, CS, EC, RS>(
    State(state): State<AppState<SP, RP, CS, EC, RS>>,
    Extension(health): Extension<HealthSnapshot>,
    Path(date): Path<String>,
) -> Result<ReportTemplate, PageError>
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| NotFoundError {
        resource: "report",
        key: date.clone(),
    })?;
    let report = state.report_service.get(parsed).await?;

    Ok(ReportTemplate {
        health_issue: health.health_issue(),
        date: report.date.to_string(),
        starting_time: report.header.starting_time,
        items: report.items,
    })
}
