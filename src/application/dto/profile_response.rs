// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::user::User;

/// 个人资料响应DTO
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub favorite_themes_count: u64,
    pub favorite_plugins_count: u64,
}

impl ProfileResponseDto {
    pub fn new(user: User, favorite_themes_count: u64, favorite_plugins_count: u64) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
            favorite_themes_count,
            favorite_plugins_count,
        }
    }
}
