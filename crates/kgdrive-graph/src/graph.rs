//! Knowledge graph capability trait

use kgdrive_core::{InputText, ResultRecord};

/// Result type for knowledge graph calls
pub type GraphResult<T> = Result<T, GraphError>;

/// Knowledge graph error types
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// An external knowledge graph: ingest text, then build the graph from it.
///
/// Implementations own all ingestion and inference. Callers only sequence the
/// two calls and forward whatever `cognify` returns.
#[async_trait::async_trait]
pub trait KnowledgeGraph: Send + Sync {
    fn name(&self) -> &str;

    /// Ingest `text` into the graph's pending data.
    async fn add(&self, text: &InputText) -> GraphResult<()>;

    /// Process everything added so far and return the produced records.
    async fn cognify(&self) -> GraphResult<Vec<ResultRecord>>;
}
