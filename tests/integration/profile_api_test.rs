// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

/// 用户可以读取自己的资料，包含收藏数量
#[tokio::test]
async fn test_get_own_profile() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let fan = app.create_user("fan").await;
    let theme_id = app.create_theme(author.id, "ayu").await;
    let plugin_id = app.create_plugin(author.id, "prettier").await;

    for path in [
        format!("/v1/users/{}/favorites/themes/{}", fan.id, theme_id),
        format!("/v1/users/{}/favorites/plugins/{}", fan.id, plugin_id),
    ] {
        let response = app
            .server
            .post(&path)
            .add_header("Authorization", fan.bearer())
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = app
        .server
        .get(&format!("/v1/users/{}/profile", fan.id))
        .add_header("Authorization", fan.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], fan.id.to_string());
    assert_eq!(body["data"]["username"], "fan");
    assert_eq!(body["data"]["favorite_themes_count"], 1);
    assert_eq!(body["data"]["favorite_plugins_count"], 1);
}

/// 读取他人资料返回 403
#[tokio::test]
async fn test_profile_of_other_user_is_forbidden() {
    let app = create_test_app().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;

    let response = app
        .server
        .get(&format!("/v1/users/{}/profile", alice.id))
        .add_header("Authorization", bob.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

/// 管理员读取不存在的用户返回 404
#[tokio::test]
async fn test_admin_profile_lookup() {
    let app = create_test_app().await;
    let alice = app.create_user("alice").await;
    let admin = app.create_admin("admin").await;

    let found = app
        .server
        .get(&format!("/v1/users/{}/profile", alice.id))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(found.status_code(), StatusCode::OK);

    let missing = app
        .server
        .get(&format!("/v1/users/{}/profile", Uuid::new_v4()))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

/// 列出用户发布的主题
#[tokio::test]
async fn test_list_user_themes() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let other = app.create_user("other").await;
    app.create_theme(author.id, "light").await;
    app.create_theme(author.id, "dark").await;
    app.create_theme(other.id, "someone-else").await;
    app.create_plugin(author.id, "not-a-theme").await;

    let response = app
        .server
        .get(&format!("/v1/users/{}/themes", author.id))
        .add_header("Authorization", author.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["total"], 2);

    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["author_id"], author.id.to_string());
        assert_eq!(item["kind"], "theme");
    }

    let plugins = app
        .server
        .get(&format!("/v1/users/{}/plugins", author.id))
        .add_header("Authorization", author.bearer())
        .await;
    assert_eq!(plugins.status_code(), StatusCode::OK);
    let body: Value = plugins.json();
    assert_eq!(body["data"]["total"], 1);
}

/// 列出他人发布的主题返回 403
#[tokio::test]
async fn test_list_other_users_themes_is_forbidden() {
    let app = create_test_app().await;
    let author = app.create_user("author").await;
    let other = app.create_user("other").await;

    let response = app
        .server
        .get(&format!("/v1/users/{}/themes", author.id))
        .add_header("Authorization", other.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}
