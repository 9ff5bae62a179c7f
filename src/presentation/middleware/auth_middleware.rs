// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::user::CurrentUser;
use crate::domain::repositories::user_repository::UserRepository;
use crate::presentation::errors::ApiError;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 用户仓库
    pub users: Arc<dyn UserRepository>,
}

/// 认证中间件
///
/// 校验 `Authorization: Bearer <token>`，并把 [`CurrentUser`] 注入请求扩展
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(ApiError)` - 缺少或无效的令牌返回 401，数据库错误返回 500
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path();
    debug!("AuthMiddleware processing path: {}", path);
    if path == "/health" || path == "/v1/version" {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(ApiError::unauthorized)?;

    match state.users.find_by_token(&token).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser::from(&user));
            Ok(next.run(req).await)
        }
        Ok(None) => {
            warn!("Rejected request with unknown API token");
            Err(ApiError::unauthorized())
        }
        Err(e) => Err(ApiError::internal("Database error checking API token", e)),
    }
}

#[cfg(test)]
#[path = "auth_middleware_test.rs"]
mod tests;
