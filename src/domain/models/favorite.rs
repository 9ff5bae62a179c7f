// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{CatalogItem, CatalogKind};

/// 用户收藏的一条记录，附带被收藏的目录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: Uuid,
    pub item: CatalogItem,
    pub favorited_at: DateTime<Utc>,
}

/// 计数校正结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterRepair {
    pub kind: CatalogKind,
    pub item_id: Uuid,
    /// 校正前缓存的计数
    pub recorded: i32,
    /// 收藏表中的实际记录数
    pub actual: i32,
}
