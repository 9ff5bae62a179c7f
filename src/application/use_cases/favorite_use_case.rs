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

use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::dto::page_query::PageQueryDto,
    domain::{
        models::{
            catalog::{CatalogItem, CatalogKind},
            favorite::Favorite,
            pagination::Page,
            user::CurrentUser,
        },
        repositories::{
            favorite_repository::{FavoriteError, FavoriteRepository},
            user_repository::UserRepository,
        },
        services::access_policy::{AccessDenied, AccessPolicy},
    },
    infrastructure::metrics,
    utils::errors::RepositoryError,
};

#[derive(Error, Debug)]
pub enum FavoriteUseCaseError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 收藏用例
///
/// 先做访问检查，再委托仓库完成事务性写入
pub struct FavoriteUseCase<FR, UR> {
    favorite_repo: Arc<FR>,
    user_repo: Arc<UR>,
}

impl<FR, UR> FavoriteUseCase<FR, UR>
where
    FR: FavoriteRepository + 'static,
    UR: UserRepository + 'static,
{
    pub fn new(favorite_repo: Arc<FR>, user_repo: Arc<UR>) -> Self {
        Self {
            favorite_repo,
            user_repo,
        }
    }

    pub async fn add_favorite(
        &self,
        actor: &CurrentUser,
        user_id: Uuid,
        kind: CatalogKind,
        item_id: Uuid,
    ) -> Result<CatalogItem, FavoriteUseCaseError> {
        self.authorize(actor, user_id).await?;

        let item = self
            .favorite_repo
            .add_favorite(kind, user_id, item_id)
            .await?;

        metrics::record_favorite_added(kind);
        info!("User {} favorited {} {}", user_id, kind, item_id);
        Ok(item)
    }

    pub async fn remove_favorite(
        &self,
        actor: &CurrentUser,
        user_id: Uuid,
        kind: CatalogKind,
        item_id: Uuid,
    ) -> Result<CatalogItem, FavoriteUseCaseError> {
        self.authorize(actor, user_id).await?;

        let item = self
            .favorite_repo
            .remove_favorite(kind, user_id, item_id)
            .await?;

        metrics::record_favorite_removed(kind);
        info!("User {} unfavorited {} {}", user_id, kind, item_id);
        Ok(item)
    }

    pub async fn list_favorites(
        &self,
        actor: &CurrentUser,
        user_id: Uuid,
        kind: CatalogKind,
        query: &PageQueryDto,
    ) -> Result<Page<Favorite>, FavoriteUseCaseError> {
        self.authorize(actor, user_id).await?;

        query
            .validate()
            .map_err(|e| FavoriteUseCaseError::ValidationError(e.to_string()))?;

        let page = query.to_page_request();
        let (favorites, total) = self
            .favorite_repo
            .list_favorites(kind, user_id, page)
            .await?;

        Ok(Page::new(favorites, total, page))
    }

    /// 访问检查；管理员代他人操作时还需确认目标用户存在
    async fn authorize(
        &self,
        actor: &CurrentUser,
        user_id: Uuid,
    ) -> Result<(), FavoriteUseCaseError> {
        AccessPolicy::ensure_can_access(actor, user_id)?;

        if actor.id != user_id && self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(FavoriteUseCaseError::UserNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "favorite_use_case_test.rs"]
mod tests;
