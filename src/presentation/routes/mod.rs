// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use crate::infrastructure::repositories::favorite_repo_impl::FavoriteRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crate::presentation::handlers::{favorite_handler, profile_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `db` - 数据库连接
///
/// # 返回值
///
/// 返回配置好的路由，`/health` 与 `/v1/version` 之外的端点都需要认证
pub fn build_router(db: Arc<DatabaseConnection>) -> Router {
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let catalog_repo = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let favorite_repo = Arc::new(FavoriteRepositoryImpl::new(db));

    let auth_state = AuthState {
        users: user_repo.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route(
            "/v1/users/{user_id}/profile",
            get(profile_handler::get_profile::<
                UserRepositoryImpl,
                CatalogRepositoryImpl,
                FavoriteRepositoryImpl,
            >),
        )
        .route(
            "/v1/users/{user_id}/{catalog}",
            get(profile_handler::list_authored::<
                UserRepositoryImpl,
                CatalogRepositoryImpl,
                FavoriteRepositoryImpl,
            >),
        )
        .route(
            "/v1/users/{user_id}/favorites/{catalog}",
            get(favorite_handler::list_favorites::<FavoriteRepositoryImpl, UserRepositoryImpl>),
        )
        .route(
            "/v1/users/{user_id}/favorites/{catalog}/{item_id}",
            post(favorite_handler::add_favorite::<FavoriteRepositoryImpl, UserRepositoryImpl>)
                .delete(
                    favorite_handler::remove_favorite::<FavoriteRepositoryImpl, UserRepositoryImpl>,
                ),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(user_repo))
        .layer(Extension(catalog_repo))
        .layer(Extension(favorite_repo))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
