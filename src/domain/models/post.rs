// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;

/// 新闻摘要中链接之间的分隔符
pub const NEWS_SUMMARY_SEPARATOR: &str = "; ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("Topic cannot be empty")]
    Blank,
}

/// 用户提供的帖子主题
///
/// 原样保存调用方输入，不做任何规范化；只拒绝空白主题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: impl Into<String>) -> Result<Self, TopicError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TopicError::Blank);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 拼接后的新闻来源摘要，作为提示词的一部分发送给模型
///
/// 分隔符本身不做转义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSummary(String);

impl NewsSummary {
    pub fn from_sources(sources: &[String]) -> Self {
        Self(sources.join(NEWS_SUMMARY_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 一次请求生成的帖子草稿
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub topic: Topic,
    pub news_sources: Vec<String>,
    pub linkedin_post: String,
    /// Reserved; nothing populates it yet.
    pub image_suggestion: Option<String>,
}
