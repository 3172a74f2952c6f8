//! 外部公共API适配层
//!
//! 每个适配器只负责一个上游，超时、限流、非2xx与解析失败都在这里被吸收，
//! 对调用方只返回空集合或 `None`，并记录一条 `warn!` 日志。

use anyhow::{Context, Result};
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::cache::{CacheCategory, CacheManager};
use crate::config::{ApiEndpoints, Config, HttpConfig};

pub mod advisory;
pub mod countries;
pub mod currency;
pub mod geocoding;
pub mod images;
pub mod overpass;
pub mod search;
pub mod weather;
pub mod wikipedia;

/// 上游请求失败的分类
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request timed out")]
    Timeout,
    #[error("rate limited (HTTP {0})")]
    RateLimited(u16),
    #[error("upstream unavailable (HTTP {0})")]
    Unavailable(u16),
    #[error("unexpected status HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid url: {0}")]
    Url(String),
}

impl GatewayError {
    /// 按HTTP状态码分类；2xx 返回 `None`
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            429 => Some(GatewayError::RateLimited(status)),
            503 | 504 => Some(GatewayError::Unavailable(status)),
            other => Some(GatewayError::Status(other)),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status(404))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

/// 上游超时档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Fast,
    Default,
    Slow,
}

/// 所有适配器共享的HTTP网关
pub struct ApiGateway {
    client: reqwest::Client,
    http: HttpConfig,
    endpoints: ApiEndpoints,
    cache: Arc<CacheManager>,
}

impl ApiGateway {
    pub fn new(config: &Config, cache: Arc<CacheManager>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.http.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            http: config.http.clone(),
            endpoints: config.apis.clone(),
            cache,
        })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub fn cache(&self) -> &Arc<CacheManager> {
        &self.cache
    }

    fn timeout(&self, latency: Latency) -> Duration {
        match latency {
            Latency::Fast => self.http.fast_timeout(),
            Latency::Default => self.http.default_timeout(),
            Latency::Slow => self.http.slow_timeout(),
        }
    }

    /// GET 一个JSON资源，命中缓存时不发起请求
    pub(crate) async fn get_json(
        &self,
        category: CacheCategory,
        url: Url,
        latency: Latency,
    ) -> Result<Value, GatewayError> {
        self.send_json(category, url, latency, None).await
    }

    /// 与 [`ApiGateway::get_json`] 相同，额外携带 `Authorization` 头
    pub(crate) async fn get_json_authorized(
        &self,
        category: CacheCategory,
        url: Url,
        latency: Latency,
        authorization: String,
    ) -> Result<Value, GatewayError> {
        self.send_json(category, url, latency, Some(authorization))
            .await
    }

    async fn send_json(
        &self,
        category: CacheCategory,
        url: Url,
        latency: Latency,
        authorization: Option<String>,
    ) -> Result<Value, GatewayError> {
        if let Some(cached) = self.cache.get(category, url.as_str()) {
            return Ok(cached);
        }

        debug!("🌐 GET {}", url);
        let mut request = self.client.get(url.clone()).timeout(self.timeout(latency));
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }

        let response = request.send().await?;
        if let Some(err) = GatewayError::from_status(response.status().as_u16()) {
            return Err(err);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(GatewayError::Decode("empty body".to_string()));
        }
        let value: Value =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;

        self.cache.set(category, url.as_str(), value.clone());
        Ok(value)
    }
}

/// 在基础URL后追加路径段与查询参数
pub(crate) fn build_url(
    base: &str,
    segments: &[&str],
    query: &[(&str, String)],
) -> Result<Url, GatewayError> {
    let mut url = Url::parse(base).map_err(|e| GatewayError::Url(format!("{}: {}", base, e)))?;

    if !segments.is_empty() {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| GatewayError::Url(format!("{} cannot be a base", base)))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// 读取数值字段，兼容以字符串形式返回的数字
pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// 读取非空字符串字段
pub(crate) fn as_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_classification() {
        assert!(GatewayError::from_status(200).is_none());
        assert!(matches!(
            GatewayError::from_status(429),
            Some(GatewayError::RateLimited(429))
        ));
        assert!(matches!(
            GatewayError::from_status(504),
            Some(GatewayError::Unavailable(504))
        ));
        assert!(GatewayError::from_status(404).unwrap().is_not_found());
        assert!(matches!(
            GatewayError::from_status(500),
            Some(GatewayError::Status(500))
        ));
    }

    #[test]
    fn test_build_url_escapes_segments_and_query() {
        let url = build_url(
            "https://en.wikipedia.org/api/rest_v1",
            &["page", "summary", "São Paulo"],
            &[("redirect", "true".to_string())],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/S%C3%A3o%20Paulo?redirect=true"
        );
    }

    #[test]
    fn test_build_url_with_trailing_slash_base() {
        let url = build_url(
            "https://api.duckduckgo.com/",
            &[],
            &[("q", "kyoto temples".to_string())],
        )
        .unwrap();

        assert_eq!(url.as_str(), "https://api.duckduckgo.com/?q=kyoto+temples");
    }

    #[test]
    fn test_build_url_rejects_garbage_base() {
        assert!(matches!(
            build_url("not a url", &["x"], &[]),
            Err(GatewayError::Url(_))
        ));
    }

    #[test]
    fn test_numeric_and_text_readers() {
        assert_eq!(as_f64(&json!("35.68")), Some(35.68));
        assert_eq!(as_f64(&json!(139.7)), Some(139.7));
        assert_eq!(as_f64(&json!("n/a")), None);
        assert_eq!(as_f64(&Value::Null), None);
        assert_eq!(as_text(&json!("  Tokyo ")), Some("Tokyo".to_string()));
        assert_eq!(as_text(&json!("   ")), None);
    }
}
