use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::apis::ApiGateway;
use crate::cache::CacheManager;
use crate::config::Config;
use crate::generator::research::registry::ToolRegistry;
use crate::generator::synthesize::enhance::SummaryEnhancer;
use crate::llm::client::LLMClient;

/// 进程级共享状态，每个调研请求克隆一份
#[derive(Clone)]
pub struct GeneratorContext {
    /// 配置
    pub config: Config,
    /// 外部接口响应缓存
    pub cache: Arc<CacheManager>,
    /// 外部接口网关
    pub gateway: Arc<ApiGateway>,
    /// 工具注册表
    pub registry: Arc<ToolRegistry>,
    /// 摘要润色，LLM未启用时为空
    pub enhancer: Option<Arc<SummaryEnhancer>>,
}

impl GeneratorContext {
    /// 创建新的生成器上下文
    pub fn new(config: Config) -> Result<Self> {
        let cache = Arc::new(CacheManager::new(config.cache.clone()));
        let gateway = Arc::new(
            ApiGateway::new(&config, cache.clone()).context("Failed to build API gateway")?,
        );
        let registry = Arc::new(ToolRegistry::standard(gateway.clone(), &config.research));
        let enhancer = Self::build_enhancer(&config);

        info!(
            "🧰 已注册 {} 个调研工具，摘要润色: {}",
            registry.len(),
            if enhancer.is_some() { "开启" } else { "关闭" }
        );

        Ok(Self {
            config,
            cache,
            gateway,
            registry,
            enhancer,
        })
    }

    /// 使用自定义工具注册表，不启用润色
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Result<Self> {
        let cache = Arc::new(CacheManager::new(config.cache.clone()));
        let gateway = Arc::new(ApiGateway::new(&config, cache.clone())?);

        Ok(Self {
            config,
            cache,
            gateway,
            registry: Arc::new(registry),
            enhancer: None,
        })
    }

    fn build_enhancer(config: &Config) -> Option<Arc<SummaryEnhancer>> {
        if !config.llm.is_usable() {
            return None;
        }

        match LLMClient::new(config.llm.clone()) {
            Ok(client) => Some(Arc::new(SummaryEnhancer::new(
                Arc::new(client),
                config.llm.min_summary_length,
            ))),
            Err(e) => {
                warn!("⚠️ LLM客户端初始化失败，禁用摘要润色: {:#}", e);
                None
            }
        }
    }
}
