// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::user::User;
use crate::utils::errors::RepositoryError;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    /// 根据访问令牌查找用户
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, RepositoryError>;
}
