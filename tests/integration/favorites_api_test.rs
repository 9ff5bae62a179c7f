// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

/// 收藏主题后计数加一，返回 201 与更新后的条目
#[tokio::test]
async fn test_add_theme_favorite() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let theme_id = app.create_theme(author.id, "dracula").await;

    let response = app
        .server
        .post(&format!("/v1/users/{}/favorites/themes/{}", fan.id, theme_id))
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], theme_id.to_string());
    assert_eq!(body["data"]["kind"], "theme");
    assert_eq!(body["data"]["favorites_count"], 1);
    assert_eq!(app.theme_favorites_count(theme_id).await, 1);
}

/// 重复收藏返回 400，计数不变
#[tokio::test]
async fn test_duplicate_favorite_is_rejected() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let plugin_id = app.create_plugin(author.id, "linter").await;
    let path = format!("/v1/users/{}/favorites/plugins/{}", fan.id, plugin_id);

    let first = app
        .server
        .post(&path)
        .add_header("Authorization", fan.bearer())
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = app
        .server
        .post(&path)
        .add_header("Authorization", fan.bearer())
        .await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = second.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Plugin is already in favorites");
    assert_eq!(app.plugin_favorites_count(plugin_id).await, 1);
}

/// 收藏不存在的条目返回 404
#[tokio::test]
async fn test_favorite_missing_item() {
    let app = create_test_app().await;
    let fan = app.create_user("fan").await;

    let response = app
        .server
        .post(&format!(
            "/v1/users/{}/favorites/themes/{}",
            fan.id,
            Uuid::new_v4()
        ))
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

/// 取消不存在的收藏返回 404，计数不变
#[tokio::test]
async fn test_remove_missing_favorite() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let theme_id = app.create_theme(author.id, "nord").await;

    let response = app
        .server
        .delete(&format!("/v1/users/{}/favorites/themes/{}", fan.id, theme_id))
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(app.theme_favorites_count(theme_id).await, 0);
}

/// 取消收藏后计数减一
#[tokio::test]
async fn test_remove_favorite_decrements_counter() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let other = app.create_user("other").await;
    let theme_id = app.create_theme(author.id, "gruvbox").await;

    for user in [&fan, &other] {
        let response = app
            .server
            .post(&format!("/v1/users/{}/favorites/themes/{}", user.id, theme_id))
            .add_header("Authorization", user.bearer())
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }
    assert_eq!(app.theme_favorites_count(theme_id).await, 2);

    let response = app
        .server
        .delete(&format!("/v1/users/{}/favorites/themes/{}", fan.id, theme_id))
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["favorites_count"], 1);
    assert_eq!(app.theme_favorites_count(theme_id).await, 1);
}

/// 操作他人的收藏返回 403
#[tokio::test]
async fn test_cannot_modify_other_users_favorites() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let intruder = app.create_user("intruder").await;
    let theme_id = app.create_theme(author.id, "tokyo-night").await;
    let path = format!("/v1/users/{}/favorites/themes/{}", fan.id, theme_id);

    let add = app
        .server
        .post(&path)
        .add_header("Authorization", intruder.bearer())
        .await;
    assert_eq!(add.status_code(), StatusCode::FORBIDDEN);

    let remove = app
        .server
        .delete(&path)
        .add_header("Authorization", intruder.bearer())
        .await;
    assert_eq!(remove.status_code(), StatusCode::FORBIDDEN);

    let list = app
        .server
        .get(&format!("/v1/users/{}/favorites/themes", fan.id))
        .add_header("Authorization", intruder.bearer())
        .await;
    assert_eq!(list.status_code(), StatusCode::FORBIDDEN);

    assert_eq!(app.theme_favorites_count(theme_id).await, 0);
}

/// 管理员可以代替其他用户收藏
#[tokio::test]
async fn test_admin_can_manage_favorites() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let admin = app.create_admin("admin").await;
    let plugin_id = app.create_plugin(author.id, "formatter").await;

    let response = app
        .server
        .post(&format!("/v1/users/{}/favorites/plugins/{}", fan.id, plugin_id))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let unknown = app
        .server
        .post(&format!(
            "/v1/users/{}/favorites/plugins/{}",
            Uuid::new_v4(),
            plugin_id
        ))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);

    assert_eq!(app.plugin_favorites_count(plugin_id).await, 1);
}

/// 收藏列表分页并按类型区分
#[tokio::test]
async fn test_list_favorites() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;

    for name in ["one", "two", "three"] {
        let theme_id = app.create_theme(author.id, name).await;
        let response = app
            .server
            .post(&format!("/v1/users/{}/favorites/themes/{}", fan.id, theme_id))
            .add_header("Authorization", fan.bearer())
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = app
        .server
        .get(&format!("/v1/users/{}/favorites/themes", fan.id))
        .add_query_param("page", 2)
        .add_query_param("per_page", 2)
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["page"], 2);
    assert_eq!(body["data"]["per_page"], 2);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

    let plugins = app
        .server
        .get(&format!("/v1/users/{}/favorites/plugins", fan.id))
        .add_header("Authorization", fan.bearer())
        .await;
    assert_eq!(plugins.status_code(), StatusCode::OK);
    let body: Value = plugins.json();
    assert_eq!(body["data"]["total"], 0);
}

/// 分页参数越界返回 400
#[tokio::test]
async fn test_list_favorites_rejects_bad_pagination() {
    let app = create_test_app().await;
    let fan = app.create_user("fan").await;

    let response = app
        .server
        .get(&format!("/v1/users/{}/favorites/themes", fan.id))
        .add_query_param("per_page", 1000)
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
