//! # sandman-web-adapter-reports-file
//!
//! Report store reading the daemon's report archive from disk.
//!
//! The daemon writes one file per day, named `sandman<YYYY-MM-DD>.rpt`:
//! a JSON header object on the first line, then one JSON item per line.
//! Malformed lines are skipped with a warning — the daemon does the same
//! when writing.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use sandman_web_app::ports::ReportStore;
use sandman_web_domain::error::{SandmanError, StorageError};
use sandman_web_domain::report::{Report, ReportHeader, ReportItem};

const FILE_PREFIX: &str = "sandman";
const FILE_EXTENSION: &str = "rpt";

/// Report store backed by the daemon's reports directory.
pub struct FileReportStore {
    dir: PathBuf,
}

impl FileReportStore {
    /// Create a store reading from the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{date}.{FILE_EXTENSION}"))
    }
}

/// Extract the report date from a file name like `sandman2024-03-10.rpt`.
fn date_from_file_name(name: &str) -> Option<NaiveDate> {
    let stem = name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(&format!(".{FILE_EXTENSION}"))?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// Parse a whole report file. The header is required on the first line;
/// a file that starts with garbage still yields its parsable items.
fn parse_report(date: NaiveDate, path: &Path, contents: &str) -> Report {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let header = match lines.next().map(serde_json::from_str::<ReportHeader>) {
        Some(Ok(header)) => header,
        Some(Err(err)) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed report header");
            ReportHeader::default()
        }
        None => ReportHeader::default(),
    };

    let mut items = Vec::new();
    for line in lines {
        match serde_json::from_str::<ReportItem>(line) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping malformed report line");
            }
        }
    }

    Report {
        date,
        header,
        items,
    }
}

impl ReportStore for FileReportStore {
    async fn list_dates(&self) -> Result<Vec<NaiveDate>, SandmanError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            // A hub that has not produced a report yet has no directory
            // either; the dashboard just shows an empty archive.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StorageError {
                    path: self.dir.clone(),
                    source: err,
                }
                .into());
            }
        };

        let mut dates = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|err| StorageError {
            path: self.dir.clone(),
            source: err,
        })? {
            if let Some(date) = entry.file_name().to_str().and_then(date_from_file_name) {
                dates.push(date);
            }
        }

        dates.sort_unstable();
        Ok(dates)
    }

    async fn load(&self, date: NaiveDate) -> Result<Option<Report>, SandmanError> {
        let path = self.file_path(date);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StorageError {
                    path,
                    source: err,
                }
                .into());
            }
        };

        Ok(Some(parse_report(date, &path, &contents)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandman_web_domain::report::ReportEvent;
    use tempfile::TempDir;

    const SAMPLE: &str = concat!(
        "{\"version\":3,\"startingTime\":\"2024/03/10 06:59:58 CDT\"}\n",
        "{\"dateTime\":\"2024/03/10 07:00:01 CDT\",\"event\":{\"type\":\"schedule\",\"action\":\"wake\"}}\n",
        "{\"dateTime\":\"2024/03/10 07:02:13 CDT\",\"event\":{\"type\":\"control\",\"control\":\"back\",\"action\":\"move up\",\"source\":\"voice\"}}\n",
    );

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn should_list_dates_sorted_and_ignore_foreign_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sandman2024-03-12.rpt"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("sandman2024-03-10.rpt"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a report").unwrap();
        std::fs::write(dir.path().join("sandmanbogus.rpt"), "junk").unwrap();

        let dates = FileReportStore::new(dir.path()).list_dates().await.unwrap();
        assert_eq!(dates, vec![date(2024, 3, 10), date(2024, 3, 12)]);
    }

    #[tokio::test]
    async fn should_list_nothing_when_directory_missing() {
        let store = FileReportStore::new("/nonexistent/reports");
        assert!(store.list_dates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_load_header_and_items() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sandman2024-03-10.rpt"), SAMPLE).unwrap();

        let report = FileReportStore::new(dir.path())
            .load(date(2024, 3, 10))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.header.version, 3);
        assert_eq!(report.items.len(), 2);
        assert_eq!(
            report.items[1].event,
            ReportEvent::Control {
                control: "back".to_string(),
                action: "move up".to_string(),
                source: "voice".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn should_return_none_for_missing_report() {
        let dir = TempDir::new().unwrap();

        let report = FileReportStore::new(dir.path()).load(date(2024, 3, 10)).await.unwrap();
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn should_skip_malformed_lines_but_keep_the_rest() {
        let dir = TempDir::new().unwrap();
        let contents = concat!(
            "{\"version\":3,\"startingTime\":\"2024/03/10 06:59:58 CDT\"}\n",
            "this line is not json\n",
            "{\"dateTime\":\"2024/03/10 07:00:01 CDT\",\"event\":{\"type\":\"status\"}}\n",
        );
        std::fs::write(dir.path().join("sandman2024-03-10.rpt"), contents).unwrap();

        let report = FileReportStore::new(dir.path())
            .load(date(2024, 3, 10))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].event, ReportEvent::Status);
    }

    #[test]
    fn should_parse_date_from_file_name() {
        assert_eq!(
            date_from_file_name("sandman2024-03-10.rpt"),
            Some(date(2024, 3, 10))
        );
        assert_eq!(date_from_file_name("sandman.conf"), None);
        assert_eq!(date_from_file_name("report2024-03-10.rpt"), None);
    }
}
