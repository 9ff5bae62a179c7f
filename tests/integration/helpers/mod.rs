// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use themehub::infrastructure::database::connection;
use themehub::infrastructure::database::entities::{api_token, plugin, theme, user};
use themehub::presentation::routes;
use uuid::Uuid;

/// 测试用户及其 API 令牌
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
}

impl TestApp {
    pub async fn create_user(&self, username: &str) -> TestUser {
        create_user(&self.db, username, false).await
    }

    pub async fn create_admin(&self, username: &str) -> TestUser {
        create_user(&self.db, username, true).await
    }

    pub async fn create_theme(&self, author_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        theme::ActiveModel {
            id: Set(id),
            author_id: Set(author_id),
            name: Set(name.to_string()),
            description: Set(format!("{} theme", name)),
            favorites_count: Set(0),
            versions_count: Set(1),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        }
        .insert(self.db.as_ref())
        .await
        .unwrap();
        id
    }

    pub async fn create_plugin(&self, author_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        plugin::ActiveModel {
            id: Set(id),
            author_id: Set(author_id),
            name: Set(name.to_string()),
            description: Set(format!("{} plugin", name)),
            favorites_count: Set(0),
            versions_count: Set(2),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        }
        .insert(self.db.as_ref())
        .await
        .unwrap();
        id
    }

    pub async fn theme_favorites_count(&self, theme_id: Uuid) -> i32 {
        theme::Entity::find_by_id(theme_id)
            .one(self.db.as_ref())
            .await
            .unwrap()
            .unwrap()
            .favorites_count
    }

    pub async fn plugin_favorites_count(&self, plugin_id: Uuid) -> i32 {
        plugin::Entity::find_by_id(plugin_id)
            .one(self.db.as_ref())
            .await
            .unwrap()
            .unwrap()
            .favorites_count
    }
}

async fn create_user(db: &DatabaseConnection, username: &str, is_admin: bool) -> TestUser {
    let id = Uuid::new_v4();
    user::ActiveModel {
        id: Set(id),
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        is_admin: Set(is_admin),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();

    let token = format!("tok-{}", Uuid::new_v4());
    api_token::ActiveModel {
        token: Set(token.clone()),
        user_id: Set(id),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();

    TestUser { id, token }
}

pub async fn create_test_app() -> TestApp {
    let db = Arc::new(connection::create_in_memory().await.unwrap());
    let app = routes::build_router(db.clone());
    let server = TestServer::new(app).unwrap();

    TestApp { server, db }
}
