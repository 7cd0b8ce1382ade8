// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{SearchEngine, SearchError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
#[error("{engine} error: {source}")]
pub struct NewsFetchError {
    pub engine: &'static str,
    #[source]
    pub source: SearchError,
}

/// 新闻获取服务
///
/// 通过外部搜索服务把主题转换为有限数量的新闻来源链接。
/// 每次调用只发起一次搜索请求，不重试。
pub struct NewsFetcher {
    engine: Arc<dyn SearchEngine>,
}

impl NewsFetcher {
    pub fn new(engine: Arc<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    /// 获取与主题相关的新闻链接
    ///
    /// # 参数
    /// * `topic` - 搜索主题（调用方保证非空）
    /// * `max_results` - 返回链接数量上限
    ///
    /// # 返回值
    /// 按搜索服务返回顺序排列的链接，缺少链接的记录会被跳过
    pub async fn fetch(&self, topic: &str, max_results: u32) -> Result<Vec<String>, NewsFetchError> {
        let engine = self.engine.name();
        let results = self
            .engine
            .search(topic, max_results)
            .await
            .map_err(|source| {
                warn!(engine, error = %source, "News search failed");
                NewsFetchError { engine, source }
            })?;

        let total = results.len();
        let urls: Vec<String> = results
            .iter()
            .filter_map(|result| {
                let url = result.usable_url();
                if url.is_none() {
                    debug!(engine, title = %result.title, "Skipping search result without URL");
                }
                url.map(str::to_string)
            })
            .take(max_results as usize)
            .collect();

        info!(engine, total, kept = urls.len(), "News sources fetched");
        Ok(urls)
    }
}
