// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::application::use_cases::{
    favorite_use_case::FavoriteUseCaseError, profile_use_case::ProfileUseCaseError,
};
use crate::domain::repositories::favorite_repository::FavoriteError;
use crate::utils::errors::RepositoryError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 成功响应包装 `{"success": true, "data": ...}`
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (
        status,
        Json(json!({
            "success": true,
            "data": data
        })),
    )
        .into_response()
}

/// API 错误
///
/// 以 `{"success": false, "error": ...}` 形式返回，500 错误不暴露内部细节
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Authentication required")
    }

    pub fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        error!("{}: {}", context, err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message
        }));
        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(e) => Self::internal("Database error", e),
        }
    }
}

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::ItemNotFound(_) | FavoriteError::FavoriteNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
            FavoriteError::AlreadyFavorited(_) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            FavoriteError::Database(e) => Self::internal("Favorite update failed", e),
        }
    }
}

impl From<FavoriteUseCaseError> for ApiError {
    fn from(err: FavoriteUseCaseError) -> Self {
        match err {
            FavoriteUseCaseError::Forbidden(e) => Self::new(StatusCode::FORBIDDEN, e.to_string()),
            FavoriteUseCaseError::ValidationError(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            FavoriteUseCaseError::UserNotFound => {
                Self::new(StatusCode::NOT_FOUND, "User not found")
            }
            FavoriteUseCaseError::Favorite(e) => e.into(),
            FavoriteUseCaseError::Repository(e) => e.into(),
        }
    }
}

impl From<ProfileUseCaseError> for ApiError {
    fn from(err: ProfileUseCaseError) -> Self {
        match err {
            ProfileUseCaseError::Forbidden(e) => Self::new(StatusCode::FORBIDDEN, e.to_string()),
            ProfileUseCaseError::ValidationError(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ProfileUseCaseError::NotFound => Self::new(StatusCode::NOT_FOUND, "User not found"),
            ProfileUseCaseError::Repository(e) => e.into(),
        }
    }
}
