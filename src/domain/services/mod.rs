// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - LLM服务（llm_service）：文本生成服务的抽象接口
/// - 新闻获取服务（news_fetcher）：把主题转换为新闻来源链接
/// - 帖子撰写服务（post_composer）：渲染提示词并调用文本生成服务
///
/// 领域服务只依赖抽象接口，具体的外部服务实现位于基础设施层。
pub mod llm_service;
pub mod news_fetcher;
pub mod post_composer;
