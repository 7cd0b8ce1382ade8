// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：主题、新闻摘要、帖子草稿和搜索结果
/// - 搜索接口（search）：外部搜索服务的抽象
/// - 服务（services）：新闻获取与帖子撰写
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod search;
pub mod services;
