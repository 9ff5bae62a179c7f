// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 目录条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Theme,
    Plugin,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Theme, CatalogKind::Plugin];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Theme => "theme",
            CatalogKind::Plugin => "plugin",
        }
    }

    /// 用于错误信息的展示名称
    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Theme => "Theme",
            CatalogKind::Plugin => "Plugin",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 市场中的主题或插件
///
/// `favorites_count` 是收藏记录数的缓存值，只能在写入收藏记录的同一事务中调整
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub kind: CatalogKind,
    pub author_id: Uuid,
    pub name: String,
    pub description: String,
    pub favorites_count: i32,
    pub versions_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
