// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::page_query::PageQueryDto;
use crate::application::use_cases::favorite_use_case::FavoriteUseCase;
use crate::domain::repositories::{
    favorite_repository::FavoriteRepository, user_repository::UserRepository,
};
use crate::presentation::errors::{success, ApiError};
use crate::presentation::extractors::{catalog_segment::CatalogSegment, current_user::AuthUser};

/// 列出用户收藏的主题或插件
pub async fn list_favorites<FR, UR>(
    Extension(favorite_repo): Extension<Arc<FR>>,
    Extension(user_repo): Extension<Arc<UR>>,
    AuthUser(actor): AuthUser,
    Path((user_id, catalog)): Path<(Uuid, CatalogSegment)>,
    Query(query): Query<PageQueryDto>,
) -> Result<Response, ApiError>
where
    FR: FavoriteRepository + 'static,
    UR: UserRepository + 'static,
{
    let use_case = FavoriteUseCase::new(favorite_repo, user_repo);
    let page = use_case
        .list_favorites(&actor, user_id, catalog.into(), &query)
        .await?;

    Ok(success(StatusCode::OK, page))
}

/// 收藏条目
///
/// 成功时返回 201 以及更新了 `favorites_count` 的条目
pub async fn add_favorite<FR, UR>(
    Extension(favorite_repo): Extension<Arc<FR>>,
    Extension(user_repo): Extension<Arc<UR>>,
    AuthUser(actor): AuthUser,
    Path((user_id, catalog, item_id)): Path<(Uuid, CatalogSegment, Uuid)>,
) -> Result<Response, ApiError>
where
    FR: FavoriteRepository + 'static,
    UR: UserRepository + 'static,
{
    let use_case = FavoriteUseCase::new(favorite_repo, user_repo);
    let item = use_case
        .add_favorite(&actor, user_id, catalog.into(), item_id)
        .await?;

    Ok(success(StatusCode::CREATED, item))
}

/// 取消收藏
pub async fn remove_favorite<FR, UR>(
    Extension(favorite_repo): Extension<Arc<FR>>,
    Extension(user_repo): Extension<Arc<UR>>,
    AuthUser(actor): AuthUser,
    Path((user_id, catalog, item_id)): Path<(Uuid, CatalogSegment, Uuid)>,
) -> Result<Response, ApiError>
where
    FR: FavoriteRepository + 'static,
    UR: UserRepository + 'static,
{
    let use_case = FavoriteUseCase::new(favorite_repo, user_repo);
    let item = use_case
        .remove_favorite(&actor, user_id, catalog.into(), item_id)
        .await?;

    Ok(success(StatusCode::OK, item))
}
