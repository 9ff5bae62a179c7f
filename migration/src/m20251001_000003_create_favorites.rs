use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_users::Users;
use crate::m20251001_000002_create_catalog::{Plugins, Themes};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key doubles as the duplicate-favorite guard
        manager
            .create_table(
                Table::create()
                    .table(FavoriteThemes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FavoriteThemes::UserId).uuid().not_null())
                    .col(ColumnDef::new(FavoriteThemes::ThemeId).uuid().not_null())
                    .col(
                        ColumnDef::new(FavoriteThemes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoriteThemes::UserId)
                            .col(FavoriteThemes::ThemeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_themes_user")
                            .from(FavoriteThemes::Table, FavoriteThemes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_themes_theme")
                            .from(FavoriteThemes::Table, FavoriteThemes::ThemeId)
                            .to(Themes::Table, Themes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritePlugins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FavoritePlugins::UserId).uuid().not_null())
                    .col(ColumnDef::new(FavoritePlugins::PluginId).uuid().not_null())
                    .col(
                        ColumnDef::new(FavoritePlugins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoritePlugins::UserId)
                            .col(FavoritePlugins::PluginId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_plugins_user")
                            .from(FavoritePlugins::Table, FavoritePlugins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_plugins_plugin")
                            .from(FavoritePlugins::Table, FavoritePlugins::PluginId)
                            .to(Plugins::Table, Plugins::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reconciliation counts by parent id
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_themes_theme")
                    .table(FavoriteThemes::Table)
                    .col(FavoriteThemes::ThemeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_plugins_plugin")
                    .table(FavoritePlugins::Table)
                    .col(FavoritePlugins::PluginId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlugins::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteThemes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FavoriteThemes {
    Table,
    UserId,
    ThemeId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FavoritePlugins {
    Table,
    UserId,
    PluginId,
    CreatedAt,
}
