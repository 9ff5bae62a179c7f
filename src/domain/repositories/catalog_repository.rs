// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{
    catalog::{CatalogItem, CatalogKind},
    pagination::PageRequest,
};
use crate::utils::errors::RepositoryError;

/// 主题/插件目录仓库特质
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 列出作者发布的条目，按创建时间倒序
    async fn list_by_author(
        &self,
        kind: CatalogKind,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<CatalogItem>, u64), RepositoryError>;
}
