// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const ENGINE_NAME: &str = "tavily";

#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    topic: &'a str,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    published_date: Option<String>,
}

/// Tavily 新闻搜索引擎实现
pub struct TavilySearchEngine {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl TavilySearchEngine {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SearchError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            endpoint: format!("{}/search", settings.base_url.trim_end_matches('/')),
        })
    }

    /// 解析 Tavily 响应中的结果记录
    ///
    /// 无法解析的记录会被跳过，而不是让整个请求失败
    fn parse_results(records: Vec<Value>) -> Vec<SearchResult> {
        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<TavilyResult>(record) {
                Ok(r) => Some(SearchResult {
                    title: r.title.unwrap_or_default(),
                    url: r.url,
                    description: r.content,
                    engine: ENGINE_NAME.to_string(),
                    score: r.score.unwrap_or(0.0),
                    published_time: r.published_date,
                }),
                Err(e) => {
                    debug!("Skipping malformed Tavily record: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl SearchEngine for TavilySearchEngine {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, SearchError> {
        let request = TavilySearchRequest {
            api_key: &self.api_key,
            query,
            max_results: limit,
            topic: "news",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::EngineError(format!(
                "Tavily API error: {} - {}",
                status, body
            )));
        }

        let body: TavilySearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        Ok(Self::parse_results(body.results))
    }

    fn name(&self) -> &'static str {
        ENGINE_NAME
    }
}
