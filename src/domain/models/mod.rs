// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 帖子（post）：主题、新闻摘要和生成的帖子草稿
/// - 搜索结果（search_result）：搜索服务返回的单条记录
pub mod post;
pub mod search_result;
