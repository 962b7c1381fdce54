//! Run report and driver lifecycle state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DriverState {
    NotStarted,
    Completed,
    Failed,
}

impl std::fmt::Display for DriverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Summary of a completed run. Logged as JSON, never persisted.
#[derive(Serialize, Clone, Debug)]
pub struct RunReport {
    pub run_id: String,
    pub graph: String,
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
    pub records: usize,
    pub log_calls: usize,
    pub wall_ms: u64,
}

impl RunReport {
    pub fn new(run_id: &str, graph: &str, started: DateTime<Utc>) -> Self {
        Self {
            run_id: run_id.into(),
            graph: graph.into(),
            started,
            ended: started,
            records: 0,
            log_calls: 0,
            wall_ms: 0,
        }
    }

    pub fn finish(&mut self, records: usize, log_calls: usize) {
        self.records = records;
        self.log_calls = log_calls;
        self.ended = Utc::now();
        self.wall_ms = (self.ended - self.started).num_milliseconds().max(0) as u64;
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_finish_sets_counts() {
        let mut r = RunReport::new("run-1", "http", Utc::now());
        r.finish(3, 6);
        assert_eq!(r.records, 3);
        assert_eq!(r.log_calls, 6);
        assert!(r.ended >= r.started);
    }

    #[test]
    fn report_json_contains_fields() {
        let r = RunReport::new("run-42", "http", Utc::now());
        let json = r.to_json();
        assert!(json.contains("run-42"));
        assert!(json.contains("\"log_calls\":0"));
    }

    #[test]
    fn state_display() {
        assert_eq!(DriverState::NotStarted.to_string(), "not_started");
        assert_eq!(
            serde_json::to_string(&DriverState::Completed).unwrap(),
            r#""completed""#
        );
    }
}
