// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::models::{
    catalog::{CatalogItem, CatalogKind},
    favorite::{CounterRepair, Favorite},
    pagination::PageRequest,
};
use crate::domain::repositories::favorite_repository::{FavoriteError, FavoriteRepository};
use crate::infrastructure::database::entities::{favorite_plugin, favorite_theme, plugin, theme};
use crate::infrastructure::repositories::catalog_repo_impl::find_item;
use crate::utils::errors::RepositoryError;

/// 收藏仓库实现
///
/// 收藏记录与父条目的 `favorites_count` 总是在同一个事务中修改
#[derive(Clone)]
pub struct FavoriteRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct FavoriteTally {
    item_id: Uuid,
    total: i64,
}

async fn favorite_exists<C>(
    conn: &C,
    kind: CatalogKind,
    user_id: Uuid,
    item_id: Uuid,
) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let exists = match kind {
        CatalogKind::Theme => favorite_theme::Entity::find_by_id((user_id, item_id))
            .one(conn)
            .await?
            .is_some(),
        CatalogKind::Plugin => favorite_plugin::Entity::find_by_id((user_id, item_id))
            .one(conn)
            .await?
            .is_some(),
    };
    Ok(exists)
}

async fn insert_favorite<C>(
    conn: &C,
    kind: CatalogKind,
    user_id: Uuid,
    item_id: Uuid,
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let now = Utc::now().fixed_offset();
    match kind {
        CatalogKind::Theme => {
            let model = favorite_theme::ActiveModel {
                user_id: Set(user_id),
                theme_id: Set(item_id),
                created_at: Set(now),
            };
            favorite_theme::Entity::insert(model)
                .exec_without_returning(conn)
                .await?;
        }
        CatalogKind::Plugin => {
            let model = favorite_plugin::ActiveModel {
                user_id: Set(user_id),
                plugin_id: Set(item_id),
                created_at: Set(now),
            };
            favorite_plugin::Entity::insert(model)
                .exec_without_returning(conn)
                .await?;
        }
    }
    Ok(())
}

async fn delete_favorite<C>(
    conn: &C,
    kind: CatalogKind,
    user_id: Uuid,
    item_id: Uuid,
) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = match kind {
        CatalogKind::Theme => {
            favorite_theme::Entity::delete_by_id((user_id, item_id))
                .exec(conn)
                .await?
        }
        CatalogKind::Plugin => {
            favorite_plugin::Entity::delete_by_id((user_id, item_id))
                .exec(conn)
                .await?
        }
    };
    Ok(result.rows_affected)
}

/// `favorites_count = favorites_count + delta`，在数据库端计算
///
/// 递减时不会低于 0
async fn adjust_counter<C>(
    conn: &C,
    kind: CatalogKind,
    item_id: Uuid,
    delta: i32,
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    match kind {
        CatalogKind::Theme => {
            let mut update = theme::Entity::update_many()
                .col_expr(
                    theme::Column::FavoritesCount,
                    Expr::col(theme::Column::FavoritesCount).add(delta),
                )
                .filter(theme::Column::Id.eq(item_id));
            if delta < 0 {
                update = update.filter(theme::Column::FavoritesCount.gt(0));
            }
            update.exec(conn).await?;
        }
        CatalogKind::Plugin => {
            let mut update = plugin::Entity::update_many()
                .col_expr(
                    plugin::Column::FavoritesCount,
                    Expr::col(plugin::Column::FavoritesCount).add(delta),
                )
                .filter(plugin::Column::Id.eq(item_id));
            if delta < 0 {
                update = update.filter(plugin::Column::FavoritesCount.gt(0));
            }
            update.exec(conn).await?;
        }
    }
    Ok(())
}

async fn tally_favorites<C>(conn: &C, kind: CatalogKind) -> Result<HashMap<Uuid, i64>, DbErr>
where
    C: ConnectionTrait,
{
    let tallies = match kind {
        CatalogKind::Theme => {
            favorite_theme::Entity::find()
                .select_only()
                .column_as(favorite_theme::Column::ThemeId, "item_id")
                .column_as(Expr::col(favorite_theme::Column::ThemeId).count(), "total")
                .group_by(favorite_theme::Column::ThemeId)
                .into_model::<FavoriteTally>()
                .all(conn)
                .await?
        }
        CatalogKind::Plugin => {
            favorite_plugin::Entity::find()
                .select_only()
                .column_as(favorite_plugin::Column::PluginId, "item_id")
                .column_as(Expr::col(favorite_plugin::Column::PluginId).count(), "total")
                .group_by(favorite_plugin::Column::PluginId)
                .into_model::<FavoriteTally>()
                .all(conn)
                .await?
        }
    };

    Ok(tallies.into_iter().map(|t| (t.item_id, t.total)).collect())
}

async fn recorded_counters<C>(conn: &C, kind: CatalogKind) -> Result<Vec<(Uuid, i32)>, DbErr>
where
    C: ConnectionTrait,
{
    match kind {
        CatalogKind::Theme => {
            theme::Entity::find()
                .select_only()
                .column(theme::Column::Id)
                .column(theme::Column::FavoritesCount)
                .into_tuple::<(Uuid, i32)>()
                .all(conn)
                .await
        }
        CatalogKind::Plugin => {
            plugin::Entity::find()
                .select_only()
                .column(plugin::Column::Id)
                .column(plugin::Column::FavoritesCount)
                .into_tuple::<(Uuid, i32)>()
                .all(conn)
                .await
        }
    }
}

/// 仅当计数仍为 `recorded` 时写入 `actual`
async fn overwrite_counter<C>(
    conn: &C,
    kind: CatalogKind,
    item_id: Uuid,
    recorded: i32,
    actual: i32,
) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = match kind {
        CatalogKind::Theme => {
            theme::Entity::update_many()
                .col_expr(theme::Column::FavoritesCount, Expr::value(actual))
                .filter(theme::Column::Id.eq(item_id))
                .filter(theme::Column::FavoritesCount.eq(recorded))
                .exec(conn)
                .await?
        }
        CatalogKind::Plugin => {
            plugin::Entity::update_many()
                .col_expr(plugin::Column::FavoritesCount, Expr::value(actual))
                .filter(plugin::Column::Id.eq(item_id))
                .filter(plugin::Column::FavoritesCount.eq(recorded))
                .exec(conn)
                .await?
        }
    };
    Ok(result.rows_affected)
}

fn counter_value(total: i64) -> Result<i32, DbErr> {
    i32::try_from(total)
        .map_err(|_| DbErr::Custom(format!("Favorite tally {} exceeds counter range", total)))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryImpl {
    async fn add_favorite(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<CatalogItem, FavoriteError> {
        let txn = self.db.begin().await?;

        if find_item(&txn, kind, item_id).await?.is_none() {
            return Err(FavoriteError::ItemNotFound(kind));
        }

        if favorite_exists(&txn, kind, user_id, item_id).await? {
            return Err(FavoriteError::AlreadyFavorited(kind));
        }

        // A concurrent insert that slipped past the existence check trips the primary key
        insert_favorite(&txn, kind, user_id, item_id)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    FavoriteError::AlreadyFavorited(kind)
                } else {
                    FavoriteError::Database(e)
                }
            })?;

        adjust_counter(&txn, kind, item_id, 1).await?;

        let item = find_item(&txn, kind, item_id)
            .await?
            .ok_or(FavoriteError::ItemNotFound(kind))?;

        txn.commit().await?;

        debug!(
            "User {} added {} {} to favorites ({} total)",
            user_id, kind, item_id, item.favorites_count
        );
        Ok(item)
    }

    async fn remove_favorite(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<CatalogItem, FavoriteError> {
        let txn = self.db.begin().await?;

        if find_item(&txn, kind, item_id).await?.is_none() {
            return Err(FavoriteError::ItemNotFound(kind));
        }

        if delete_favorite(&txn, kind, user_id, item_id).await? == 0 {
            return Err(FavoriteError::FavoriteNotFound(kind));
        }

        adjust_counter(&txn, kind, item_id, -1).await?;

        let item = find_item(&txn, kind, item_id)
            .await?
            .ok_or(FavoriteError::ItemNotFound(kind))?;

        txn.commit().await?;

        debug!(
            "User {} removed {} {} from favorites ({} total)",
            user_id, kind, item_id, item.favorites_count
        );
        Ok(item)
    }

    async fn list_favorites(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<Favorite>, u64), RepositoryError> {
        let conn = self.db.as_ref();

        let (favorites, total) = match kind {
            CatalogKind::Theme => {
                let query = favorite_theme::Entity::find()
                    .filter(favorite_theme::Column::UserId.eq(user_id));
                let total = query.clone().count(conn).await?;
                let rows = query
                    .order_by_desc(favorite_theme::Column::CreatedAt)
                    .order_by_asc(favorite_theme::Column::ThemeId)
                    .find_also_related(theme::Entity)
                    .offset(page.offset())
                    .limit(page.per_page)
                    .all(conn)
                    .await?;

                let favorites = rows
                    .into_iter()
                    .filter_map(|(fav, item)| {
                        item.map(|item| Favorite {
                            user_id: fav.user_id,
                            item: item.into(),
                            favorited_at: fav.created_at.into(),
                        })
                    })
                    .collect();
                (favorites, total)
            }
            CatalogKind::Plugin => {
                let query = favorite_plugin::Entity::find()
                    .filter(favorite_plugin::Column::UserId.eq(user_id));
                let total = query.clone().count(conn).await?;
                let rows = query
                    .order_by_desc(favorite_plugin::Column::CreatedAt)
                    .order_by_asc(favorite_plugin::Column::PluginId)
                    .find_also_related(plugin::Entity)
                    .offset(page.offset())
                    .limit(page.per_page)
                    .all(conn)
                    .await?;

                let favorites = rows
                    .into_iter()
                    .filter_map(|(fav, item)| {
                        item.map(|item| Favorite {
                            user_id: fav.user_id,
                            item: item.into(),
                            favorited_at: fav.created_at.into(),
                        })
                    })
                    .collect();
                (favorites, total)
            }
        };

        Ok((favorites, total))
    }

    async fn count_favorites(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        let conn = self.db.as_ref();
        let total = match kind {
            CatalogKind::Theme => {
                favorite_theme::Entity::find()
                    .filter(favorite_theme::Column::UserId.eq(user_id))
                    .count(conn)
                    .await?
            }
            CatalogKind::Plugin => {
                favorite_plugin::Entity::find()
                    .filter(favorite_plugin::Column::UserId.eq(user_id))
                    .count(conn)
                    .await?
            }
        };
        Ok(total)
    }

    async fn reconcile_counters(
        &self,
        kind: CatalogKind,
    ) -> Result<Vec<CounterRepair>, RepositoryError> {
        let txn = self.db.begin().await?;

        // Counters must be read before the tally. A favorite write committed in between
        // then moves the counter off `recorded` and the conditional overwrite skips it.
        let recorded = recorded_counters(&txn, kind).await?;
        let tallies = tally_favorites(&txn, kind).await?;

        let mut repairs = Vec::new();
        for (item_id, recorded) in recorded {
            let actual = counter_value(tallies.get(&item_id).copied().unwrap_or(0))?;
            if actual == recorded {
                continue;
            }

            // Zero rows means a favorite write landed in between; the next run picks it up
            if overwrite_counter(&txn, kind, item_id, recorded, actual).await? == 0 {
                continue;
            }

            warn!(
                "Repaired favorites_count for {} {}: {} -> {}",
                kind, item_id, recorded, actual
            );
            repairs.push(CounterRepair {
                kind,
                item_id,
                recorded,
                actual,
            });
        }

        txn.commit().await?;
        Ok(repairs)
    }
}

#[cfg(test)]
#[path = "favorite_repo_impl_test.rs"]
mod tests;
