//! Driver: one `add`, one `cognify`, then every record to the sink.
//!
//! The two calls are strictly sequential and the full record sequence is in
//! hand before anything is logged. Failures are not retried; they leave the
//! driver in `Failed` and propagate to the caller.

use crate::report::{DriverState, RunReport};
use crate::sink::RecordSink;
use kgdrive_core::{DriverConfig, Error, InputText, Operation, Result};
use kgdrive_graph::KnowledgeGraph;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Driver {
    graph: Arc<dyn KnowledgeGraph>,
    sink: Arc<dyn RecordSink>,
    text: InputText,
    record_log_repeat: usize,
    state: DriverState,
}

impl Driver {
    /// Driver that writes each record twice, matching the historical output.
    pub fn new(graph: Arc<dyn KnowledgeGraph>, sink: Arc<dyn RecordSink>, text: InputText) -> Self {
        Self {
            graph,
            sink,
            text,
            record_log_repeat: DriverConfig::default().record_log_repeat,
            state: DriverState::NotStarted,
        }
    }

    pub fn with_config(
        graph: Arc<dyn KnowledgeGraph>,
        sink: Arc<dyn RecordSink>,
        config: &DriverConfig,
    ) -> Result<Self> {
        let text = InputText::new(config.text.clone())?;
        if config.record_log_repeat == 0 {
            return Err(Error::InvalidInput(
                "record_log_repeat must be at least 1".into(),
            ));
        }
        Ok(Self::new(graph, sink, text).with_record_log_repeat(config.record_log_repeat))
    }

    /// Sink writes per record; never fewer than one.
    pub fn with_record_log_repeat(mut self, repeat: usize) -> Self {
        self.record_log_repeat = repeat.max(1);
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Run the add → cognify → log sequence once.
    pub async fn run(&mut self) -> Result<RunReport> {
        if self.state != DriverState::NotStarted {
            return Err(Error::AlreadyRun);
        }

        match self.execute().await {
            Ok(report) => {
                self.state = DriverState::Completed;
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "run failed");
                self.state = DriverState::Failed;
                Err(e)
            }
        }
    }

    async fn execute(&self) -> Result<RunReport> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = RunReport::new(&run_id, self.graph.name(), chrono::Utc::now());

        debug!(run_id, graph = self.graph.name(), bytes = self.text.len(), "add");
        self.graph
            .add(&self.text)
            .await
            .map_err(|e| Error::external(Operation::Add, e.to_string()))?;

        debug!(run_id, "cognify");
        let records = self
            .graph
            .cognify()
            .await
            .map_err(|e| Error::external(Operation::Cognify, e.to_string()))?;

        let mut log_calls = 0;
        for record in &records {
            for _ in 0..self.record_log_repeat {
                self.sink.emit(record);
                log_calls += 1;
            }
        }

        report.finish(records.len(), log_calls);
        info!(run_id, report = %report.to_json(), "run complete");
        Ok(report)
    }
}
