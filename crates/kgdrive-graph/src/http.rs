//! HTTP client for a cognee-style knowledge graph REST service

use crate::graph::{GraphError, GraphResult, KnowledgeGraph};
use kgdrive_core::{GraphConfig, InputText, ResultRecord};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, error};

const ADD_PATH: &str = "/api/v1/add";
const COGNIFY_PATH: &str = "/api/v1/cognify";
const UPLOAD_FILENAME: &str = "input.txt";

pub struct HttpKnowledgeGraph {
    client: Client,
    base_url: String,
    dataset: String,
    api_key: Option<String>,
}

impl HttpKnowledgeGraph {
    pub fn new(base_url: impl Into<String>, dataset: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            dataset: dataset.into(),
            api_key: None,
        }
    }

    pub fn from_config(config: &GraphConfig, api_key: Option<String>) -> Self {
        let graph = Self::new(&config.base_url, &config.dataset);
        match api_key {
            Some(key) => graph.with_api_key(key),
            None => graph,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }
}

#[derive(Serialize)]
struct CognifyRequest<'a> {
    datasets: Vec<&'a str>,
}

#[async_trait::async_trait]
impl KnowledgeGraph for HttpKnowledgeGraph {
    fn name(&self) -> &str {
        "http"
    }

    async fn add(&self, text: &InputText) -> GraphResult<()> {
        let part = Part::text(text.as_str().to_string())
            .file_name(UPLOAD_FILENAME)
            .mime_str("text/plain")?;
        let form = Form::new()
            .part("data", part)
            .text("datasetName", self.dataset.clone());

        debug!("add: dataset={} bytes={}", self.dataset, text.len());

        let response = self
            .authorize(self.client.post(self.url(ADD_PATH)))
            .multipart(form)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn cognify(&self) -> GraphResult<Vec<ResultRecord>> {
        let body = CognifyRequest {
            datasets: vec![self.dataset.as_str()],
        };

        debug!("cognify: dataset={}", self.dataset);

        let response = self
            .authorize(self.client.post(self.url(COGNIFY_PATH)))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        let text = response.text().await?;
        records_from_body(&text)
    }
}

async fn check_status(response: Response) -> GraphResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    error!("knowledge graph error {}: {}", status, error_text);

    match status.as_u16() {
        401 | 403 => Err(GraphError::AuthFailed(error_text)),
        _ => Err(GraphError::RequestFailed(format!("{}: {}", status, error_text))),
    }
}

/// Split a cognify response body into records.
///
/// Array → one record per element. Object → one record per value, in sorted
/// key order (not the order the service sent). Null or empty body → none.
/// Any other scalar → one record.
pub fn records_from_body(body: &str) -> GraphResult<Vec<ResultRecord>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GraphError::InvalidResponse(e.to_string()))?;

    Ok(match value {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(items) => items.into_iter().map(ResultRecord::new).collect(),
        serde_json::Value::Object(map) => map.into_values().map(ResultRecord::new).collect(),
        scalar => vec![ResultRecord::new(scalar)],
    })
}
