// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含帖子生成用例和数据传输对象
pub mod application;

/// HTTP客户端模块
///
/// 调用帖子生成接口的客户端
pub mod client;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和外部服务接口
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成：搜索、文本生成和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
