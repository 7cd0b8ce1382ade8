// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// 模型单次调用的输出
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Error, Debug, Clone)]
pub enum LLMError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("LLM API returned error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Invalid response format from LLM API: {0}")]
    InvalidResponse(String),
}

/// 文本生成服务接口
///
/// 单轮、非流式调用：给定完整提示词和采样温度，返回模型生成的原始文本
#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<Generation, LLMError>;

    /// 当前使用的模型名称
    fn model(&self) -> &str;
}
