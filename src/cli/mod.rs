use crate::config::{Config, LLMProvider};
use crate::generator::workflow::LaunchMode;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// 未指定配置文件时在当前目录查找的文件名
const DEFAULT_CONFIG_FILE: &str = "youtravel.toml";

/// YouTravel - 基于免费公开API的目的地调研与旅行指南生成服务
#[derive(Parser, Debug)]
#[command(name = "youtravel")]
#[command(
    about = "Researches a travel destination through free public APIs and streams the progress and the finished travel guide as newline-delimited JSON."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 监听地址
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口
    #[arg(short, long)]
    pub port: Option<u16>,

    /// 单次调研的目的地；指定后不启动HTTP服务
    #[arg(short, long)]
    pub destination: Option<String>,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 任务之间的停顿（毫秒）
    #[arg(long)]
    pub step_delay_ms: Option<u64>,

    /// LLM Provider (openai, anthropic, deepseek, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 润色使用的模型
    #[arg(long)]
    pub llm_model: Option<String>,

    /// 禁用摘要润色
    #[arg(long)]
    pub no_llm: bool,

    /// Unsplash访问密钥
    #[arg(long)]
    pub unsplash_access_key: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 运行方式：指定目的地时为单次调研
    pub fn launch_mode(&self) -> LaunchMode {
        match &self.destination {
            Some(destination) => LaunchMode::Once(destination.clone()),
            None => LaunchMode::Serve,
        }
    }

    /// 读取配置文件之前使用的默认日志级别
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "youtravel=debug"
        } else {
            "youtravel=info"
        }
    }

    /// 将CLI参数转换为配置：配置文件 → 默认值，命令行参数覆盖文件
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(config_path) => Config::from_file(config_path)?,
            None => {
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_CONFIG_FILE);

                if default_config_path.exists() {
                    Config::from_file(&default_config_path)?
                } else {
                    Config::default()
                }
            }
        };

        // 服务配置
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            match provider_str.parse::<LLMProvider>() {
                Ok(provider) => config.llm.provider = provider,
                Err(_) => warn!("⚠️ 未知的provider: {}，使用默认provider", provider_str),
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.enabled = !llm_api_key.trim().is_empty();
            config.llm.api_key = llm_api_key;
        }
        if let Some(llm_model) = self.llm_model {
            config.llm.model = llm_model;
        }
        if self.no_llm {
            config.llm.enabled = false;
        }

        // 调研与上游配置
        if let Some(step_delay_ms) = self.step_delay_ms {
            config.research.step_delay_ms = step_delay_ms;
        }
        if let Some(unsplash_access_key) = self.unsplash_access_key {
            config.apis.unsplash_access_key = Some(unsplash_access_key);
        }

        // 缓存配置
        if self.no_cache {
            config.cache.enabled = false;
        }

        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
