// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::post::{NewsSummary, Topic};
use crate::domain::services::llm_service::{LLMError, LLMServiceTrait};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default sampling temperature for post generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Error, Debug)]
#[error("LLM error: {0}")]
pub struct ComposeError(#[from] pub LLMError);

/// 渲染帖子生成提示词
///
/// 模板是固定的：专业语气、3-5 个短段落、以行动号召结尾
pub fn render_prompt(topic: &Topic, news_summary: &NewsSummary) -> String {
    format!(
        "You are a professional LinkedIn content creator. \
        Write a LinkedIn-style post (engaging, professional tone, 3–5 short paragraphs) \
        based on the topic: {} and recent news: {}. \
        End with a call-to-action.",
        topic.as_str(),
        news_summary.as_str()
    )
}

/// 帖子撰写服务
///
/// 把主题和新闻摘要渲染为提示词并调用文本生成服务，原样返回生成的文本
pub struct PostComposer {
    llm: Arc<dyn LLMServiceTrait>,
    temperature: f32,
}

impl PostComposer {
    pub fn new(llm: Arc<dyn LLMServiceTrait>) -> Self {
        Self::with_temperature(llm, DEFAULT_TEMPERATURE)
    }

    pub fn with_temperature(llm: Arc<dyn LLMServiceTrait>, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub async fn compose(
        &self,
        topic: &Topic,
        news_summary: &NewsSummary,
    ) -> Result<String, ComposeError> {
        let prompt = render_prompt(topic, news_summary);

        let generation = self
            .llm
            .generate(&prompt, self.temperature)
            .await
            .inspect_err(|e| warn!(model = self.llm.model(), error = %e, "Post generation failed"))?;

        info!(
            model = self.llm.model(),
            prompt_tokens = generation.usage.prompt_tokens,
            completion_tokens = generation.usage.completion_tokens,
            "Post generated"
        );
        Ok(generation.text)
    }
}
