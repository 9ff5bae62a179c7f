// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

use crate::config::settings::MetricsSettings;
use crate::domain::models::catalog::CatalogKind;

pub const FAVORITES_ADDED: &str = "themehub_favorites_added_total";
pub const FAVORITES_REMOVED: &str = "themehub_favorites_removed_total";
pub const COUNTER_REPAIRS: &str = "themehub_favorite_counter_repairs_total";

/// 安装 Prometheus 导出器
///
/// 未启用时不安装记录器，所有指标调用为空操作
pub fn init_metrics(settings: &MetricsSettings) -> anyhow::Result<()> {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return Ok(());
    }

    let addr: SocketAddr = settings
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid metrics address: {}", settings.listen_addr))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("Failed to install Prometheus recorder")?;

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

pub fn record_favorite_added(kind: CatalogKind) {
    metrics::counter!(FAVORITES_ADDED, "kind" => kind.as_str()).increment(1);
}

pub fn record_favorite_removed(kind: CatalogKind) {
    metrics::counter!(FAVORITES_REMOVED, "kind" => kind.as_str()).increment(1);
}

pub fn record_counter_repairs(kind: CatalogKind, repaired: u64) {
    metrics::counter!(COUNTER_REPAIRS, "kind" => kind.as_str()).increment(repaired);
}
