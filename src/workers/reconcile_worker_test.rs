use crate::domain::models::catalog::CatalogKind;
use crate::domain::repositories::favorite_repository::FavoriteRepository;
use crate::infrastructure::database::connection;
use crate::infrastructure::database::entities::{favorite_plugin, plugin, theme, user};
use crate::infrastructure::repositories::favorite_repo_impl::FavoriteRepositoryImpl;
use crate::workers::reconcile_worker::CounterReconcileWorker;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

async fn setup_db() -> Arc<DatabaseConnection> {
    Arc::new(connection::create_in_memory().await.unwrap())
}

async fn create_user(db: &DatabaseConnection) -> Uuid {
    let id = Uuid::new_v4();
    user::ActiveModel {
        id: Set(id),
        username: Set(format!("user-{}", id)),
        email: Set(format!("{}@example.com", id)),
        is_admin: Set(false),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

async fn create_theme(db: &DatabaseConnection, author_id: Uuid, favorites_count: i32) -> Uuid {
    let id = Uuid::new_v4();
    theme::ActiveModel {
        id: Set(id),
        author_id: Set(author_id),
        name: Set("Solarized".to_string()),
        description: Set("Light and dark".to_string()),
        favorites_count: Set(favorites_count),
        versions_count: Set(1),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

async fn create_plugin(db: &DatabaseConnection, author_id: Uuid, favorites_count: i32) -> Uuid {
    let id = Uuid::new_v4();
    plugin::ActiveModel {
        id: Set(id),
        author_id: Set(author_id),
        name: Set("git-blame".to_string()),
        description: Set("Inline blame".to_string()),
        favorites_count: Set(favorites_count),
        versions_count: Set(4),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

#[tokio::test]
async fn test_run_once_repairs_both_kinds() {
    let db = setup_db().await;
    let author = create_user(&db).await;
    let fan = create_user(&db).await;

    // 计数偏高：没有任何收藏记录
    let theme_id = create_theme(&db, author, 5).await;
    // 计数偏低：有一条收藏记录
    let plugin_id = create_plugin(&db, author, 0).await;
    favorite_plugin::ActiveModel {
        user_id: Set(fan),
        plugin_id: Set(plugin_id),
        created_at: Set(Utc::now().into()),
    }
    .insert(db.as_ref())
    .await
    .unwrap();

    let repo = Arc::new(FavoriteRepositoryImpl::new(db.clone()));
    let worker = CounterReconcileWorker::new(repo.clone(), Duration::from_secs(60));

    let repairs = worker.run_once().await.unwrap();
    assert_eq!(repairs.len(), 2);

    let theme = theme::Entity::find_by_id(theme_id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(theme.favorites_count, 0);

    let plugin = plugin::Entity::find_by_id(plugin_id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(plugin.favorites_count, 1);

    // 再次运行无需校正
    assert!(worker.run_once().await.unwrap().is_empty());
    assert!(repo
        .reconcile_counters(CatalogKind::Theme)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_run_once_leaves_consistent_counters() {
    let db = setup_db().await;
    let author = create_user(&db).await;
    create_theme(&db, author, 0).await;
    create_plugin(&db, author, 0).await;

    let worker = CounterReconcileWorker::new(
        Arc::new(FavoriteRepositoryImpl::new(db)),
        Duration::from_secs(60),
    );

    assert!(worker.run_once().await.unwrap().is_empty());
}
