// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索结果记录
///
/// `url` 为可选字段：提供方返回的格式不完整的记录在提取新闻链接时会被跳过
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub engine: String,
    pub score: f64,
    pub published_time: Option<String>,
}

impl SearchResult {
    pub fn new(title: String, url: String, description: Option<String>, engine: String) -> Self {
        Self {
            title,
            url: Some(url),
            description,
            engine,
            score: 0.0,
            published_time: None,
        }
    }

    /// 返回可用的链接（非空白）
    pub fn usable_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
