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
use crate::application::use_cases::profile_use_case::ProfileUseCase;
use crate::domain::repositories::{
    catalog_repository::CatalogRepository, favorite_repository::FavoriteRepository,
    user_repository::UserRepository,
};
use crate::presentation::errors::{success, ApiError};
use crate::presentation::extractors::{catalog_segment::CatalogSegment, current_user::AuthUser};

/// 获取用户资料
pub async fn get_profile<UR, CR, FR>(
    Extension(user_repo): Extension<Arc<UR>>,
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(favorite_repo): Extension<Arc<FR>>,
    AuthUser(actor): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Response, ApiError>
where
    UR: UserRepository + 'static,
    CR: CatalogRepository + 'static,
    FR: FavoriteRepository + 'static,
{
    let use_case = ProfileUseCase::new(user_repo, catalog_repo, favorite_repo);
    let profile = use_case.get_profile(&actor, user_id).await?;

    Ok(success(StatusCode::OK, profile))
}

/// 列出用户发布的主题或插件
pub async fn list_authored<UR, CR, FR>(
    Extension(user_repo): Extension<Arc<UR>>,
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(favorite_repo): Extension<Arc<FR>>,
    AuthUser(actor): AuthUser,
    Path((user_id, catalog)): Path<(Uuid, CatalogSegment)>,
    Query(query): Query<PageQueryDto>,
) -> Result<Response, ApiError>
where
    UR: UserRepository + 'static,
    CR: CatalogRepository + 'static,
    FR: FavoriteRepository + 'static,
{
    let use_case = ProfileUseCase::new(user_repo, catalog_repo, favorite_repo);
    let page = use_case
        .list_authored(&actor, user_id, catalog.into(), &query)
        .await?;

    Ok(success(StatusCode::OK, page))
}
