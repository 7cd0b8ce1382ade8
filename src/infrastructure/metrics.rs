// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const POSTS_GENERATED_TOTAL: &str = "posts_generated_total";
pub const POSTS_FAILED_TOTAL: &str = "posts_failed_total";
pub const POST_GENERATION_DURATION_SECONDS: &str = "post_generation_duration_seconds";

/// 初始化指标系统
///
/// 未启用时不安装导出器，指标宏调用会被静默丢弃
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(POSTS_GENERATED_TOTAL, "Total number of posts generated");
    describe_counter!(
        POSTS_FAILED_TOTAL,
        "Total number of post generation requests that failed, by error kind"
    );
    describe_histogram!(
        POST_GENERATION_DURATION_SECONDS,
        "End-to-end duration of post generation in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
}
