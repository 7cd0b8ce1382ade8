// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// 帖子生成表单页面
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
