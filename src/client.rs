// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::application::dto::post_request::{GeneratePostRequestDto, GeneratePostResponseDto};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{detail} (HTTP {status})")]
    Api { status: u16, detail: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// 帖子生成服务的HTTP客户端
pub struct PostClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PostClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, Duration::from_secs(120))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)?;
        let endpoint = base.join("generate-post")?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 请求为给定主题生成帖子
    ///
    /// 非 2xx 响应会转换为 `ClientError::Api`，`detail` 保留服务端返回的原文
    pub async fn get_post(&self, topic: &str) -> Result<GeneratePostResponseDto, ClientError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GeneratePostRequestDto {
                topic: topic.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(s),
            }) => s,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => text,
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}
