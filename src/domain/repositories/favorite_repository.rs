// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::{
    catalog::{CatalogItem, CatalogKind},
    favorite::{CounterRepair, Favorite},
    pagination::PageRequest,
};
use crate::utils::errors::RepositoryError;

/// 收藏写操作错误
#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("{} not found", .0.label())]
    ItemNotFound(CatalogKind),
    #[error("{} is already in favorites", .0.label())]
    AlreadyFavorited(CatalogKind),
    #[error("{} is not in favorites", .0.label())]
    FavoriteNotFound(CatalogKind),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 收藏仓库特质
///
/// 写操作在单个事务中完成收藏记录的增删和父条目计数的调整
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// 添加收藏并将 `favorites_count` 加一，返回更新后的条目
    async fn add_favorite(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<CatalogItem, FavoriteError>;

    /// 删除收藏并将 `favorites_count` 减一，返回更新后的条目
    async fn remove_favorite(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<CatalogItem, FavoriteError>;

    /// 按收藏时间倒序列出用户收藏
    async fn list_favorites(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<Favorite>, u64), RepositoryError>;

    /// 统计用户的收藏数
    async fn count_favorites(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
    ) -> Result<u64, RepositoryError>;

    /// 按收藏表重算 `favorites_count`，返回被修正的条目
    async fn reconcile_counters(
        &self,
        kind: CatalogKind,
    ) -> Result<Vec<CounterRepair>, RepositoryError>;
}
