//! Per-request health context.
//!
//! Every rendered page shows the `health_issue` indicator, so the snapshot
//! is computed once per request here and handed to handlers through request
//! extensions, instead of each handler probing on its own.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use sandman_web_app::ports::{ConfigStore, ElevatedCopy, HealthProbe, ReportStore};

use crate::state::AppState;

/// Probe both collaborator services and stash the snapshot for handlers.
pub async fn health_context<SP, RP, CS, EC, RS>(
    State(state): State<AppState<SP, RP, CS, EC, RS>>,
    mut request: Request,
    next: Next,
) -> Response
where
    SP: HealthProbe + Send + Sync + 'static,
    RP: HealthProbe + Send + Sync + 'static,
    CS: ConfigStore + Send + Sync + 'static,
    EC: ElevatedCopy + Send + Sync + 'static,
    RS: ReportStore + Send + Sync + 'static,
{
    let snapshot = state.health_service.snapshot().await;
    request.extensions_mut().insert(snapshot);
    next.run(request).await
}
