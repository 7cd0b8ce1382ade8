// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Instant;

use metrics::{counter, histogram};
use thiserror::Error;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::application::dto::post_request::{GeneratePostRequestDto, GeneratePostResponseDto};
use crate::domain::models::post::{NewsSummary, PostDraft, Topic};
use crate::domain::services::news_fetcher::{NewsFetchError, NewsFetcher};
use crate::domain::services::post_composer::{ComposeError, PostComposer};
use crate::infrastructure::metrics::{
    POSTS_FAILED_TOTAL, POSTS_GENERATED_TOTAL, POST_GENERATION_DURATION_SECONDS,
};

/// Number of news sources requested per post.
pub const DEFAULT_MAX_SOURCES: u32 = 3;

#[derive(Error, Debug)]
pub enum GeneratePostError {
    #[error("{0}")]
    Validation(String),
    #[error("No recent news found")]
    NotFound,
    #[error(transparent)]
    Search(#[from] NewsFetchError),
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

impl GeneratePostError {
    /// 错误类别标识，用于指标标签和响应体中的 `code` 字段
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound => "not_found",
            Self::Search(_) | Self::Compose(_) => "external_service_error",
        }
    }
}

// === Section: Use Case Definition ===

/// 生成帖子用例
///
/// 按顺序执行：获取新闻 → 空结果检查 → 撰写帖子 → 组装响应。
/// 任一步骤失败都会丢弃已完成的工作，不返回部分结果。
pub struct GeneratePostUseCase {
    fetcher: NewsFetcher,
    composer: PostComposer,
    max_sources: u32,
}

// === Section: Implementation ===

impl GeneratePostUseCase {
    pub fn new(fetcher: NewsFetcher, composer: PostComposer) -> Self {
        Self::with_max_sources(fetcher, composer, DEFAULT_MAX_SOURCES)
    }

    pub fn with_max_sources(fetcher: NewsFetcher, composer: PostComposer, max_sources: u32) -> Self {
        Self {
            fetcher,
            composer,
            max_sources,
        }
    }

    pub async fn execute(
        &self,
        request_dto: GeneratePostRequestDto,
    ) -> Result<GeneratePostResponseDto, GeneratePostError> {
        let started = Instant::now();
        let result = self.run(request_dto).await;

        histogram!(POST_GENERATION_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
        match &result {
            Ok(_) => counter!(POSTS_GENERATED_TOTAL).increment(1),
            Err(e) => counter!(POSTS_FAILED_TOTAL, "kind" => e.kind()).increment(1),
        }

        result.map(GeneratePostResponseDto::from)
    }

    #[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), topic = %request_dto.topic))]
    async fn run(&self, request_dto: GeneratePostRequestDto) -> Result<PostDraft, GeneratePostError> {
        let topic = self.validate(request_dto)?;

        // Step 1: fetch news sources
        let news_sources = self.fetcher.fetch(topic.as_str(), self.max_sources).await?;
        if news_sources.is_empty() {
            warn!("No news sources found, skipping composition");
            return Err(GeneratePostError::NotFound);
        }

        // Step 2: compose the post from the joined sources
        let news_summary = NewsSummary::from_sources(&news_sources);
        let linkedin_post = self.composer.compose(&topic, &news_summary).await?;

        info!(sources = news_sources.len(), "Post ready");

        // Step 3: assemble
        Ok(PostDraft {
            topic,
            news_sources,
            linkedin_post,
            image_suggestion: None,
        })
    }

    fn validate(&self, dto: GeneratePostRequestDto) -> Result<Topic, GeneratePostError> {
        dto.validate()
            .map_err(|e| GeneratePostError::Validation(e.to_string()))?;
        Topic::parse(dto.topic).map_err(|e| GeneratePostError::Validation(e.to_string()))
    }
}
