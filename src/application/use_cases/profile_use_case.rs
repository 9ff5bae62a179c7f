// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::dto::{page_query::PageQueryDto, profile_response::ProfileResponseDto},
    domain::{
        models::{
            catalog::{CatalogItem, CatalogKind},
            pagination::Page,
            user::CurrentUser,
        },
        repositories::{
            catalog_repository::CatalogRepository, favorite_repository::FavoriteRepository,
            user_repository::UserRepository,
        },
        services::access_policy::{AccessDenied, AccessPolicy},
    },
    utils::errors::RepositoryError,
};

#[derive(Error, Debug)]
pub enum ProfileUseCaseError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("User not found")]
    NotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 个人资料与作者作品列表用例
pub struct ProfileUseCase<UR, CR, FR> {
    user_repo: Arc<UR>,
    catalog_repo: Arc<CR>,
    favorite_repo: Arc<FR>,
}

impl<UR, CR, FR> ProfileUseCase<UR, CR, FR>
where
    UR: UserRepository + 'static,
    CR: CatalogRepository + 'static,
    FR: FavoriteRepository + 'static,
{
    pub fn new(user_repo: Arc<UR>, catalog_repo: Arc<CR>, favorite_repo: Arc<FR>) -> Self {
        Self {
            user_repo,
            catalog_repo,
            favorite_repo,
        }
    }

    pub async fn get_profile(
        &self,
        actor: &CurrentUser,
        user_id: Uuid,
    ) -> Result<ProfileResponseDto, ProfileUseCaseError> {
        AccessPolicy::ensure_can_access(actor, user_id)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(ProfileUseCaseError::NotFound)?;

        let themes = self
            .favorite_repo
            .count_favorites(CatalogKind::Theme, user_id)
            .await?;
        let plugins = self
            .favorite_repo
            .count_favorites(CatalogKind::Plugin, user_id)
            .await?;

        Ok(ProfileResponseDto::new(user, themes, plugins))
    }

    /// 用户发布的主题或插件
    pub async fn list_authored(
        &self,
        actor: &CurrentUser,
        user_id: Uuid,
        kind: CatalogKind,
        query: &PageQueryDto,
    ) -> Result<Page<CatalogItem>, ProfileUseCaseError> {
        AccessPolicy::ensure_can_access(actor, user_id)?;

        query
            .validate()
            .map_err(|e| ProfileUseCaseError::ValidationError(e.to_string()))?;

        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(ProfileUseCaseError::NotFound);
        }

        let page = query.to_page_request();
        let (items, total) = self
            .catalog_repo
            .list_by_author(kind, user_id, page)
            .await?;

        Ok(Page::new(items, total, page))
    }
}
