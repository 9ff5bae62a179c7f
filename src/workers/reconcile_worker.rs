// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::CatalogKind;
use crate::domain::models::favorite::CounterRepair;
use crate::domain::repositories::favorite_repository::FavoriteRepository;
use crate::infrastructure::metrics;
use crate::utils::errors::RepositoryError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 收藏计数校正工作器
///
/// 定期将 `favorites_count` 与收藏表中的实际记录数对齐
pub struct CounterReconcileWorker<R>
where
    R: FavoriteRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
    interval: Duration,
}

impl<R> CounterReconcileWorker<R>
where
    R: FavoriteRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>, interval: Duration) -> Self {
        Self {
            repository,
            interval,
        }
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(
            "Favorite counter reconcile worker started, interval {:?}",
            self.interval
        );

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;

            match self.run_once().await {
                Ok(repairs) => {
                    if !repairs.is_empty() {
                        info!("Repaired {} favorite counters", repairs.len());
                    }
                }
                Err(e) => {
                    error!("Failed to reconcile favorite counters: {}", e);
                }
            }
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// 对所有目录类型执行一次校正
    pub async fn run_once(&self) -> Result<Vec<CounterRepair>, RepositoryError> {
        let mut repairs = Vec::new();

        for kind in CatalogKind::ALL {
            let repaired = self.repository.reconcile_counters(kind).await?;
            metrics::record_counter_repairs(kind, repaired.len() as u64);
            repairs.extend(repaired);
        }

        Ok(repairs)
    }
}

#[cfg(test)]
#[path = "reconcile_worker_test.rs"]
mod tests;
