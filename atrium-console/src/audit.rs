//! Operator action log
//!
//! Records every admin operation the console performs, in a bounded
//! in-memory window and optionally as JSONL for retention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

/// In-memory window size
const MAX_RECENT: usize = 1000;

/// How an operation ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

/// One admin operation as seen from the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: Uuid,
    /// When the operation finished
    pub timestamp: DateTime<Utc>,
    /// Signed-in username, if any
    pub operator: Option<String>,
    /// Operation name, e.g. "articles.create"
    pub operation: String,
    /// Affected record id or path
    pub target: Option<String>,
    pub outcome: Outcome,
    /// How long the operation took, including the refetch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Error text for failed operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ActionRecord {
    pub fn new(operation: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operator: None,
            operation: operation.into(),
            target: None,
            outcome,
            duration_ms: None,
            detail: None,
        }
    }

    /// Set the operator username
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Set the affected record
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Set the failure detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Convert to JSONL line
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

struct ActionLogInner {
    recent: VecDeque<ActionRecord>,
    writer: Option<BufWriter<File>>,
}

/// Bounded action log with an optional JSONL sink
#[derive(Clone)]
pub struct ActionLog {
    inner: Arc<Mutex<ActionLogInner>>,
}

impl ActionLog {
    /// In-memory only
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ActionLogInner {
                recent: VecDeque::new(),
                writer: None,
            })),
        }
    }

    /// Also append one JSON line per record to `path`
    pub async fn init_file(&self, path: PathBuf) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let writer = BufWriter::new(file);

        let mut inner = self.inner.lock().await;
        inner.writer = Some(writer);

        info!("Action logging initialized to {}", path.display());
        Ok(())
    }

    /// Record an operation
    pub async fn log(&self, record: ActionRecord) {
        let mut inner = self.inner.lock().await;

        if let Some(ref mut writer) = inner.writer {
            match record.to_jsonl() {
                Ok(line) => {
                    if let Err(e) = writeln!(writer, "{}", line) {
                        error!("Failed to write action record: {}", e);
                    }
                    if let Err(e) = writer.flush() {
                        error!("Failed to flush action log: {}", e);
                    }
                }
                Err(e) => error!("Failed to serialize action record: {}", e),
            }
        }

        inner.recent.push_front(record);
        while inner.recent.len() > MAX_RECENT {
            inner.recent.pop_back();
        }
    }

    /// Record a successful operation
    pub async fn log_success(
        &self,
        operator: Option<&str>,
        operation: &str,
        target: Option<&str>,
        duration_ms: u64,
    ) {
        let mut record =
            ActionRecord::new(operation, Outcome::Success).with_duration(duration_ms);
        if let Some(op) = operator {
            record = record.with_operator(op);
        }
        if let Some(t) = target {
            record = record.with_target(t);
        }
        self.log(record).await;
    }

    /// Record a failed operation with its error text
    pub async fn log_failure(
        &self,
        operator: Option<&str>,
        operation: &str,
        target: Option<&str>,
        duration_ms: u64,
        detail: &str,
    ) {
        let mut record = ActionRecord::new(operation, Outcome::Failure)
            .with_duration(duration_ms)
            .with_detail(detail);
        if let Some(op) = operator {
            record = record.with_operator(op);
        }
        if let Some(t) = target {
            record = record.with_target(t);
        }
        self.log(record).await;
    }

    /// Most recent records, newest first
    pub async fn recent(&self, limit: usize) -> Vec<ActionRecord> {
        let inner = self.inner.lock().await;
        inner.recent.iter().take(limit).cloned().collect()
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new("articles.create", Outcome::Success)
            .with_operator("amara")
            .with_target("a42");

        let jsonl = record.to_jsonl().unwrap();
        assert!(jsonl.contains("articles.create"));
        assert!(jsonl.contains("amara"));
        assert!(jsonl.contains("success"));
        assert!(!jsonl.contains("detail"));
    }

    #[test]
    fn test_failure_record_keeps_detail() {
        let record =
            ActionRecord::new("popup.save_order", Outcome::Failure).with_detail("order rejected");

        let jsonl = record.to_jsonl().unwrap();
        assert!(jsonl.contains("failure"));
        assert!(jsonl.contains("order rejected"));
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_bounded() {
        let log = ActionLog::new();
        for i in 0..1005 {
            log.log_success(None, &format!("op.{}", i), None, 1).await;
        }

        let recent = log.recent(10).await;
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].operation, "op.1004");

        let all = log.recent(usize::MAX).await;
        assert_eq!(all.len(), 1000);
    }

    #[tokio::test]
    async fn test_jsonl_file_gets_one_line_per_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("actions.jsonl");

        let log = ActionLog::new();
        log.init_file(path.clone()).await.expect("init file");

        log.log_success(Some("amara"), "articles.create", Some("a1"), 120)
            .await;
        log.log_failure(Some("amara"), "articles.delete", Some("a1"), 45, "boom")
            .await;

        let contents = std::fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ActionRecord = serde_json::from_str(lines[0]).expect("valid json");
        assert_eq!(first.operation, "articles.create");
        assert_eq!(first.outcome, Outcome::Success);
        assert_eq!(first.duration_ms, Some(120));

        let second: ActionRecord = serde_json::from_str(lines[1]).expect("valid json");
        assert_eq!(second.detail.as_deref(), Some("boom"));
    }
}
