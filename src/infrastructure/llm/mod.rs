// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 文本生成服务的客户端实现
pub mod gemini;

pub use gemini::GeminiService;
