// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供外部搜索服务的客户端实现
pub mod tavily;

pub use tavily::TavilySearchEngine;
