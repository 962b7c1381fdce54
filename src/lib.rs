//! kgdrive - drive a knowledge graph through `add` and `cognify` and log
//! what comes back.

pub mod cli;
pub mod telemetry;
