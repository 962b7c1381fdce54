//! Logging sink for result records.

use kgdrive_core::ResultRecord;
use tracing::info;

/// Tracing target every record event is emitted on.
pub const RECORD_TARGET: &str = "kgdrive::records";

/// Receives one informational message per call.
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: &ResultRecord);
}

/// Default sink: one `info` event per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn emit(&self, record: &ResultRecord) {
        info!(target: RECORD_TARGET, record = %record);
    }
}
