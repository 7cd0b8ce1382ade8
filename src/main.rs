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

use newsposter::application::usecases::generate_post::GeneratePostUseCase;
use newsposter::config::settings::Settings;
use newsposter::domain::services::news_fetcher::NewsFetcher;
use newsposter::domain::services::post_composer::PostComposer;
use newsposter::infrastructure::llm::GeminiService;
use newsposter::infrastructure::search::TavilySearchEngine;
use newsposter::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use newsposter::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration; missing API keys abort startup
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting newsposter...");

    // Initialize Prometheus Metrics
    newsposter::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Initialize external clients
    let search_engine = Arc::new(TavilySearchEngine::new(&settings.search)?);
    let llm = Arc::new(GeminiService::new(&settings.llm)?);
    info!(
        model = %settings.llm.model,
        search_timeout_secs = settings.search.timeout_secs,
        llm_timeout_secs = settings.llm.timeout_secs,
        "External clients initialized"
    );

    // 4. Wire the use case
    let use_case = Arc::new(GeneratePostUseCase::with_max_sources(
        NewsFetcher::new(search_engine),
        PostComposer::with_temperature(llm, settings.llm.temperature),
        settings.search.max_results,
    ));

    // 5. Start HTTP server
    let app = routes::app(use_case);

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
