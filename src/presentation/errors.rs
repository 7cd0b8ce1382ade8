// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::usecases::generate_post::GeneratePostError;

/// 应用错误类型
///
/// 每个变体对应一个HTTP状态码；响应体统一为 `{"detail": ..., "code": ...}`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ExternalService(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalService(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ExternalService(_) => "external_service_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), "Request failed: {}", self);
        }

        let body = Json(json!({ "detail": self.to_string(), "code": self.code() }));
        (status, body).into_response()
    }
}

impl From<GeneratePostError> for AppError {
    fn from(err: GeneratePostError) -> Self {
        let message = err.to_string();
        match err {
            GeneratePostError::Validation(_) => AppError::Validation(message),
            GeneratePostError::NotFound => AppError::NotFound(message),
            GeneratePostError::Search(_) | GeneratePostError::Compose(_) => {
                AppError::ExternalService(message)
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
