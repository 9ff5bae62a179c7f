use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Themes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Themes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Themes::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Themes::Name).string().not_null())
                    .col(ColumnDef::new(Themes::Description).text().not_null())
                    .col(
                        ColumnDef::new(Themes::FavoritesCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Themes::VersionsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Themes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Themes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_themes_author")
                            .from(Themes::Table, Themes::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Plugins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Plugins::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Plugins::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Plugins::Name).string().not_null())
                    .col(ColumnDef::new(Plugins::Description).text().not_null())
                    .col(
                        ColumnDef::new(Plugins::FavoritesCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Plugins::VersionsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Plugins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Plugins::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plugins_author")
                            .from(Plugins::Table, Plugins::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Author listings are ordered by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_themes_author_created")
                    .table(Themes::Table)
                    .col(Themes::AuthorId)
                    .col(Themes::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_plugins_author_created")
                    .table(Plugins::Table)
                    .col(Plugins::AuthorId)
                    .col(Plugins::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plugins::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Themes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Themes {
    Table,
    Id,
    AuthorId,
    Name,
    Description,
    FavoritesCount,
    VersionsCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Plugins {
    Table,
    Id,
    AuthorId,
    Name,
    Description,
    FavoritesCount,
    VersionsCount,
    CreatedAt,
    UpdatedAt,
}
