//! Per-run generation outcomes.
//!
//! A [`GenerationReport`] records what happened to every directory and file
//! of one plan. Generation never stops at the first failure, so the report
//! is the only place a caller learns which entries did not make it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::{domain::Layer, error::StrataError};

/// What happened to one planned directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DirectoryStatus {
    Created,
    Existed,
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: StrataError,
    },
}

/// What happened to one planned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    Created,
    /// Already present; never overwritten.
    Skipped,
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: StrataError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: DirectoryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Outcome of generating one layer (or the skeleton).
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    run_id: Uuid,
    generated_at: DateTime<Utc>,
    /// `None` for the architecture skeleton.
    layer: Option<Layer>,
    feature: Option<String>,
    root: PathBuf,
    directories: Vec<DirectoryOutcome>,
    files: Vec<FileOutcome>,
}

fn serialize_display<S: Serializer>(error: &StrataError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

impl GenerationReport {
    pub fn new(layer: Option<Layer>, feature: Option<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            layer,
            feature,
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn record_directory(&mut self, path: impl Into<PathBuf>, status: DirectoryStatus) {
        self.directories.push(DirectoryOutcome {
            path: path.into(),
            status,
        });
    }

    pub fn record_file(&mut self, path: impl Into<PathBuf>, status: FileStatus) {
        self.files.push(FileOutcome {
            path: path.into(),
            status,
        });
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn layer(&self) -> Option<Layer> {
        self.layer
    }

    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> &[DirectoryOutcome] {
        &self.directories
    }

    pub fn files(&self) -> &[FileOutcome] {
        &self.files
    }

    pub fn file_status(&self, path: &Path) -> Option<&FileStatus> {
        self.files.iter().find(|f| f.path == path).map(|f| &f.status)
    }

    pub fn created_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Created)
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Skipped)
            .count()
    }

    /// Every failed directory and file, in plan order.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &StrataError)> {
        let dirs = self.directories.iter().filter_map(|d| match &d.status {
            DirectoryStatus::Failed { error } => Some((d.path.as_path(), error)),
            _ => None,
        });
        let files = self.files.iter().filter_map(|f| match &f.status {
            FileStatus::Failed { error } => Some((f.path.as_path(), error)),
            _ => None,
        });
        dirs.chain(files)
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// One-line description of every failure, `; `-separated.
    pub fn failure_summary(&self) -> String {
        self.failures()
            .map(|(_, e)| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;

    fn write_error(path: &str) -> StrataError {
        ApplicationError::Write {
            path: path.into(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn counts_and_failures() {
        let mut report = GenerationReport::new(Some(Layer::Data), Some("todo".into()), "/p/lib");
        report.record_directory("/p/lib/data", DirectoryStatus::Created);
        report.record_file("/p/lib/data/a.dart", FileStatus::Created);
        report.record_file("/p/lib/data/b.dart", FileStatus::Skipped);
        report.record_file(
            "/p/lib/data/c.dart",
            FileStatus::Failed {
                error: write_error("/p/lib/data/c.dart"),
            },
        );

        assert_eq!(report.created_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.is_success());
        assert!(report.failure_summary().contains("permission denied"));
        assert_eq!(
            report.file_status(Path::new("/p/lib/data/b.dart")),
            Some(&FileStatus::Skipped)
        );
    }

    #[test]
    fn serializes_status_inline() {
        let mut report = GenerationReport::new(None, None, "/p/lib");
        report.record_directory("/p/lib/data", DirectoryStatus::Existed);
        report.record_file(
            "/p/lib/x.dart",
            FileStatus::Failed {
                error: write_error("/p/lib/x.dart"),
            },
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["layer"], serde_json::Value::Null);
        assert_eq!(json["directories"][0]["status"], "existed");
        assert_eq!(json["files"][0]["status"], "failed");
        assert!(
            json["files"][0]["error"]
                .as_str()
                .unwrap()
                .contains("permission denied")
        );
        assert!(json["run_id"].is_string());
    }

    #[test]
    fn empty_report_is_success() {
        let report = GenerationReport::new(Some(Layer::Domain), None, "lib");
        assert!(report.is_success());
        assert_eq!(report.failure_summary(), "");
    }
}
