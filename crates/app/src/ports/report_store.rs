//! Report store port — reading the daemon's daily report files.

use std::future::Future;

use chrono::NaiveDate;
use sandman_web_domain::error::SandmanError;
use sandman_web_domain::report::Report;

/// Read-only access to the daemon's report archive.
pub trait ReportStore {
    /// All days a report exists for, sorted ascending.
    fn list_dates(&self) -> impl Future<Output = Result<Vec<NaiveDate>, SandmanError>> + Send;

    /// Load one day's report, or `None` when no file exists for that day.
    fn load(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<Report>, SandmanError>> + Send;
}

impl<T: ReportStore + Send + Sync> ReportStore for std::sync::Arc<T> {
    fn list_dates(&self) -> impl Future<Output = Result<Vec<NaiveDate>, SandmanError>> + Send {
        (**self).list_dates()
    }

    fn load(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<Report>, SandmanError>> + Send {
        (**self).load(date)
    }
}
