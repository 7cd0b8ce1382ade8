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

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// 搜索服务密钥的环境变量名
pub const SEARCH_API_KEY_VAR: &str = "TAVILY_API_KEY";
/// 文本生成服务密钥的环境变量名
pub const LLM_API_KEY_VAR: &str = "GEMINI_API_KEY";

const ENV_PREFIX: &str = "NEWSPOSTER";

/// 配置加载错误
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Please set {0} in the environment or .env file")]
    MissingSecret(&'static str),
    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 应用程序配置设置
///
/// 包含服务器、搜索服务、文本生成服务和指标导出的所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 新闻搜索服务配置
    pub search: SearchSettings,
    /// 文本生成服务配置
    pub llm: LlmSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 新闻搜索服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 搜索服务API密钥
    pub api_key: String,
    /// 搜索服务API基础URL
    pub base_url: String,
    /// 每次请求返回的最大新闻链接数
    pub max_results: u32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 文本生成服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// 文本生成服务API密钥
    pub api_key: String,
    /// 模型名称
    pub model: String,
    /// 文本生成服务API基础URL
    pub base_url: String,
    /// 采样温度
    pub temperature: f32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// Prometheus 监听地址
    pub listen_addr: String,
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 先加载 `.env` 文件（如果存在），再从进程环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 配置加载失败或缺少必需的密钥
    pub fn new() -> Result<Self, SettingsError> {
        // A missing .env file is fine; real deployments inject the environment directly
        let _ = dotenvy::dotenv();
        Self::from_env(std::env::vars().collect())
    }

    /// 从给定的环境变量集合加载配置
    ///
    /// 优先级从低到高：内置默认值、`config/default.toml`、`config/{APP_ENVIRONMENT}.toml`、
    /// `NEWSPOSTER__*` 环境变量、`TAVILY_API_KEY` / `GEMINI_API_KEY`
    pub fn from_env(vars: Map<String, String>) -> Result<Self, SettingsError> {
        let env = vars
            .get("APP_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "default".to_string());

        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("search.api_key", "")?
            .set_default("search.base_url", "https://api.tavily.com")?
            .set_default("search.max_results", 3)?
            .set_default("search.timeout_secs", 30)?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gemini-2.5-pro")?
            .set_default(
                "llm.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("llm.temperature", 0.7)?
            .set_default("llm.timeout_secs", 30)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(Some(vars.clone())),
            )
            .set_override_option("search.api_key", vars.get(SEARCH_API_KEY_VAR).cloned())?
            .set_override_option("llm.api_key", vars.get(LLM_API_KEY_VAR).cloned())?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.search.api_key.trim().is_empty() {
            return Err(SettingsError::MissingSecret(SEARCH_API_KEY_VAR));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingSecret(LLM_API_KEY_VAR));
        }

        if self.search.max_results == 0 {
            return Err(SettingsError::Invalid {
                key: "search.max_results",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(SettingsError::Invalid {
                key: "llm.temperature",
                reason: format!("{} is outside 0.0..=2.0", self.llm.temperature),
            });
        }
        if self.search.timeout_secs == 0 || self.llm.timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                key: "timeout_secs",
                reason: "timeouts must be positive".to_string(),
            });
        }

        for (key, raw) in [
            ("search.base_url", &self.search.base_url),
            ("llm.base_url", &self.llm.base_url),
        ] {
            Url::parse(raw).map_err(|e| SettingsError::Invalid {
                key,
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// 服务器监听地址
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
