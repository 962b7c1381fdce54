//! kgdrive driver - sequences `add` then `cognify` against a knowledge graph
//! and forwards every produced record to a logging sink.

pub mod driver;
pub mod report;
pub mod sink;

pub use driver::Driver;
pub use report::{DriverState, RunReport};
pub use sink::{RecordSink, TracingSink, RECORD_TARGET};
