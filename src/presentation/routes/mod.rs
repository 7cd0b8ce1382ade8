// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::usecases::generate_post::GeneratePostUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::{post_handler, ui_handler};
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载依赖的路由，调用方需要通过 `Extension` 注入 `GeneratePostUseCase`
pub fn routes() -> Router {
    Router::new()
        .route("/", get(ui_handler::index))
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/generate-post", post(post_handler::generate_post))
}

/// 创建完整的应用
///
/// 挂载用例依赖以及请求追踪和 panic 捕获中间件
pub fn app(use_case: Arc<GeneratePostUseCase>) -> Router {
    with_boundary_layers(routes().layer(Extension(use_case)))
}

/// 为路由添加最外层的边界中间件
///
/// 处理器中未捕获的 panic 会被转换为 500 `internal_error` 响应
pub fn with_boundary_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    error!("Handler panicked: {}", detail);
    AppError::Internal(detail).into_response()
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
