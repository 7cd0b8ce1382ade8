// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::rejection::JsonRejection, Extension, Json};
use std::sync::Arc;

use crate::application::dto::post_request::{GeneratePostRequestDto, GeneratePostResponseDto};
use crate::application::usecases::generate_post::GeneratePostUseCase;
use crate::presentation::errors::AppError;

/// 处理帖子生成请求
///
/// # 错误
///
/// - 主题为空或请求体无法解析：422
/// - 没有找到相关新闻：404
/// - 搜索服务或文本生成服务失败：500
pub async fn generate_post(
    Extension(use_case): Extension<Arc<GeneratePostUseCase>>,
    payload: Result<Json<GeneratePostRequestDto>, JsonRejection>,
) -> Result<Json<GeneratePostResponseDto>, AppError> {
    let Json(payload) = payload?;
    let response = use_case.execute(payload).await?;
    Ok(Json(response))
}
