// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::user::CurrentUser;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("You do not have permission to access this user's data")]
pub struct AccessDenied;

/// 用户数据访问策略
///
/// 只有用户本人或管理员可以读取/修改某个用户的个人资料和收藏
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn ensure_can_access(actor: &CurrentUser, target_user_id: Uuid) -> Result<(), AccessDenied> {
        if actor.is_admin || actor.id == target_user_id {
            Ok(())
        } else {
            Err(AccessDenied)
        }
    }
}
