//! kgdrive graph - the knowledge graph capability and its HTTP client

pub mod graph;
pub mod http;

pub use graph::{GraphError, GraphResult, KnowledgeGraph};
pub use http::HttpKnowledgeGraph;
