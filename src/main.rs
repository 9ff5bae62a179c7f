// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::time::Duration;
use themehub::config::settings::Settings;
use themehub::infrastructure::database::connection;
use themehub::infrastructure::metrics;
use themehub::infrastructure::repositories::favorite_repo_impl::FavoriteRepositoryImpl;
use themehub::presentation::routes;
use themehub::workers::CounterReconcileWorker;
use tokio::net::TcpListener;
use tracing::info;

use migration::{Migrator, MigratorTrait};
use themehub::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting themehub...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics)?;

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Start workers
    if settings.reconciliation.enabled {
        let worker = CounterReconcileWorker::new(
            Arc::new(FavoriteRepositoryImpl::new(db.clone())),
            Duration::from_secs(settings.reconciliation.interval_secs.max(1)),
        );
        worker.start();
    }

    // 5. Start HTTP server
    let app = routes::build_router(db);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
