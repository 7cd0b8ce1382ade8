// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部系统的交互，依赖于领域层的抽象接口：
/// - 文本生成（llm）：Gemini 客户端
/// - 指标（metrics）：Prometheus 指标导出
/// - 搜索（search）：Tavily 客户端
pub mod llm;
pub mod metrics;
pub mod search;
