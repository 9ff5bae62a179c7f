// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 迁移命令行入口
///
/// 通过 `DATABASE_URL` 连接数据库，支持 `up`、`down`、`status`、`fresh` 等子命令
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
