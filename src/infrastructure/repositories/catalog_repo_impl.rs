// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::{
    catalog::{CatalogItem, CatalogKind},
    pagination::PageRequest,
};
use crate::domain::repositories::catalog_repository::CatalogRepository;
use crate::infrastructure::database::entities::{plugin, theme};
use crate::utils::errors::RepositoryError;

/// 目录仓库实现
#[derive(Clone)]
pub struct CatalogRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 在给定连接（或事务）上按类型查找条目
pub(crate) async fn find_item<C>(
    conn: &C,
    kind: CatalogKind,
    id: Uuid,
) -> Result<Option<CatalogItem>, DbErr>
where
    C: ConnectionTrait,
{
    let item = match kind {
        CatalogKind::Theme => theme::Entity::find_by_id(id).one(conn).await?.map(Into::into),
        CatalogKind::Plugin => plugin::Entity::find_by_id(id).one(conn).await?.map(Into::into),
    };
    Ok(item)
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn list_by_author(
        &self,
        kind: CatalogKind,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<CatalogItem>, u64), RepositoryError> {
        let conn = self.db.as_ref();

        let (items, total) = match kind {
            CatalogKind::Theme => {
                let query = theme::Entity::find().filter(theme::Column::AuthorId.eq(author_id));
                let total = query.clone().count(conn).await?;
                let models = query
                    .order_by_desc(theme::Column::CreatedAt)
                    .order_by_asc(theme::Column::Id)
                    .offset(page.offset())
                    .limit(page.per_page)
                    .all(conn)
                    .await?;
                (models.into_iter().map(Into::into).collect(), total)
            }
            CatalogKind::Plugin => {
                let query = plugin::Entity::find().filter(plugin::Column::AuthorId.eq(author_id));
                let total = query.clone().count(conn).await?;
                let models = query
                    .order_by_desc(plugin::Column::CreatedAt)
                    .order_by_asc(plugin::Column::Id)
                    .offset(page.offset())
                    .limit(page.per_page)
                    .all(conn)
                    .await?;
                (models.into_iter().map(Into::into).collect(), total)
            }
        };

        Ok((items, total))
    }
}

impl From<theme::Model> for CatalogItem {
    fn from(model: theme::Model) -> Self {
        Self {
            id: model.id,
            kind: CatalogKind::Theme,
            author_id: model.author_id,
            name: model.name,
            description: model.description,
            favorites_count: model.favorites_count,
            versions_count: model.versions_count,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<plugin::Model> for CatalogItem {
    fn from(model: plugin::Model) -> Self {
        Self {
            id: model.id,
            kind: CatalogKind::Plugin,
            author_id: model.author_id,
            name: model.name,
            description: model.description,
            favorites_count: model.favorites_count,
            versions_count: model.versions_count,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[cfg(test)]
#[path = "catalog_repo_impl_test.rs"]
mod tests;
