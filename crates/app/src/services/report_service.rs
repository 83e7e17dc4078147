//! Report service — use-cases for browsing the report archive.

use chrono::NaiveDate;
use sandman_web_domain::error::{NotFoundError, SandmanError};
use sandman_web_domain::report::Report;

use crate::ports::ReportStore;

/// Application service for listing and loading daily reports.
pub struct ReportService<R> {
    store: R,
}

impl<R: ReportStore> ReportService<R> {
    /// Create a new service backed by the given store.
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// All days a report exists for, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_dates(&self) -> Result<Vec<NaiveDate>, SandmanError> {
        self.store.list_dates().await
    }

    /// Load one day's report, returning an error if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SandmanError::NotFound`] when no report covers `date`, or a
    /// storage error from the store.
    pub async fn get(&self, date: NaiveDate) -> Result<Report, SandmanError> {
        self.store.load(date).await?.ok_or_else(|| {
            NotFoundError {
                resource: "report",
                key: date.to_string(),
            }
            .into()
        })
    }

    /// The most recent report, or `None` when the archive is empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn latest(&self) -> Result<Option<Report>, SandmanError> {
        let Some(date) = self.store.list_dates().await?.pop() else {
            return Ok(None);
        };
        self.store.load(date).await
    }
}
