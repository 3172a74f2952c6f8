//! LLM客户端 - 只用于目的地概述的可选润色

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::LLMConfig;

mod providers;

use providers::ProviderClient;

/// LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        info!(
            "🤖 LLM润色已启用: provider={}, model={}",
            config.provider, config.model
        );
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &LLMConfig {
        &self.config
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let max_retries = self.config.retry_attempts.max(1);
        let retry_delay_ms = self.config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    warn!(
                        "❌ 调用模型服务出错 (第 {} / {} 次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 单轮对话，整体受 `timeout_seconds` 约束
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self.client.create_agent(system_prompt, &self.config);
        let timeout = Duration::from_secs(self.config.timeout_seconds);

        tokio::time::timeout(
            timeout,
            self.retry_with_backoff(|| async { agent.prompt(user_prompt).await }),
        )
        .await
        .map_err(|_| anyhow::anyhow!("LLM call timed out after {:?}", timeout))?
    }
}
