use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP服务配置
    pub server: ServerConfig,

    /// 出站HTTP请求配置
    pub http: HttpConfig,

    /// 上游API地址配置
    pub apis: ApiEndpoints,

    /// 缓存配置
    pub cache: CacheConfig,

    /// 调研流程配置
    pub research: ResearchConfig,

    /// LLM模型配置（仅用于概述润色）
    pub llm: LLMConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// HTTP服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,

    /// 监听端口
    pub port: u16,
}

/// 出站HTTP请求配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    /// 请求头中的User-Agent，Nominatim和Wikipedia要求必须带上
    pub user_agent: String,

    /// 常规上游超时时间（秒）
    pub default_timeout_secs: u64,

    /// 慢上游（Overpass、气候归档）超时时间（秒）
    pub slow_timeout_secs: u64,

    /// 快速失败上游（搜索）超时时间（秒）
    pub fast_timeout_secs: u64,
}

/// 上游API地址
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ApiEndpoints {
    pub nominatim: String,
    pub wikipedia_rest: String,
    pub wikipedia_api: String,
    pub wikimedia_commons: String,
    pub rest_countries: String,
    pub overpass: String,
    pub open_meteo_forecast: String,
    pub open_meteo_archive: String,
    pub frankfurter: String,
    pub travel_advisory: String,
    pub gov_uk_content: String,
    pub duckduckgo: String,
    pub unsplash: String,

    /// Unsplash访问密钥，缺失时仅使用Wikimedia Commons
    pub unsplash_access_key: Option<String>,
}

/// 缓存配置，各分类的过期时间单位均为小时
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    pub geocoding_hours: u64,
    pub country_hours: u64,
    pub encyclopedia_hours: u64,
    pub places_hours: u64,
    pub weather_hours: u64,
    pub climate_hours: u64,
    pub currency_hours: u64,
    pub advisory_hours: u64,
    pub images_hours: u64,
    pub search_hours: u64,
}

/// 调研流程配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ResearchConfig {
    /// 任务之间的停顿（毫秒），仅用于让前端看清进度
    pub step_delay_ms: u64,

    /// 景点搜索半径（米）
    pub attraction_radius_m: u32,

    /// 街区搜索半径（米）
    pub neighborhood_radius_m: u32,

    /// 机场搜索半径（米）
    pub airport_radius_m: u32,

    /// 公共交通站点搜索半径（米）
    pub transit_radius_m: u32,

    /// 预算换算的基准货币
    pub base_currency: String,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// 是否启用概述润色
    pub enabled: bool,

    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 使用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,

    /// 润色结果的最小长度，低于该长度时保留原文
    pub min_summary_length: usize,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 监听地址，形如 127.0.0.1:3000
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl HttpConfig {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }

    pub fn slow_timeout(&self) -> Duration {
        Duration::from_secs(self.slow_timeout_secs)
    }

    pub fn fast_timeout(&self) -> Duration {
        Duration::from_secs(self.fast_timeout_secs)
    }
}

impl LLMConfig {
    /// 只有显式启用并且具备调用条件时才进行润色
    pub fn is_usable(&self) -> bool {
        self.enabled && (self.provider == LLMProvider::Ollama || !self.api_key.trim().is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 3000,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: String::from("YouTravel/1.0 (https://youtravel.app; contact@youtravel.app)"),
            default_timeout_secs: 10,
            slow_timeout_secs: 15,
            fast_timeout_secs: 5,
        }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            nominatim: String::from("https://nominatim.openstreetmap.org"),
            wikipedia_rest: String::from("https://en.wikipedia.org/api/rest_v1"),
            wikipedia_api: String::from("https://en.wikipedia.org/w/api.php"),
            wikimedia_commons: String::from("https://commons.wikimedia.org/w/api.php"),
            rest_countries: String::from("https://restcountries.com/v3.1"),
            overpass: String::from("https://overpass-api.de/api/interpreter"),
            open_meteo_forecast: String::from("https://api.open-meteo.com/v1/forecast"),
            open_meteo_archive: String::from("https://archive-api.open-meteo.com/v1/archive"),
            frankfurter: String::from("https://api.frankfurter.app"),
            travel_advisory: String::from("https://www.travel-advisory.info/api"),
            gov_uk_content: String::from("https://www.gov.uk/api/content/foreign-travel-advice"),
            duckduckgo: String::from("https://api.duckduckgo.com/"),
            unsplash: String::from("https://api.unsplash.com"),
            unsplash_access_key: std::env::var("UNSPLASH_ACCESS_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            geocoding_hours: 24,
            country_hours: 24 * 7,
            encyclopedia_hours: 24,
            places_hours: 24,
            weather_hours: 1,
            climate_hours: 24 * 30,
            currency_hours: 1,
            advisory_hours: 24,
            images_hours: 1,
            search_hours: 1,
        }
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 100,
            attraction_radius_m: 20_000,
            neighborhood_radius_m: 10_000,
            airport_radius_m: 100_000,
            transit_radius_m: 2_000,
            base_currency: String::from("USD"),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        let api_key = std::env::var("YOUTRAVEL_LLM_API_KEY").unwrap_or_default();
        Self {
            enabled: !api_key.trim().is_empty(),
            provider: LLMProvider::default(),
            api_key,
            api_base_url: String::from("https://models.inference.ai.azure.com"),
            model: String::from("gpt-4o-mini"),
            max_tokens: 500,
            temperature: 0.7,
            retry_attempts: 1,
            retry_delay_ms: 500,
            timeout_seconds: 15,
            min_summary_length: 40,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
