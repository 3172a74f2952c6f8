//! 调研工具：每个工具封装一类数据，组合一个或多个上游适配器与静态参考数据
//!
//! 工具的返回负载（JSON）是工具与指南合成器之间的契约，字段名在各工具文档中说明。

use anyhow::{Context, Result};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::apis::ApiGateway;
use crate::types::ToolName;

pub mod advisory;
pub mod destination;
pub mod media;
pub mod places;
pub mod practical;

/// 可被调研编排器调用的工具
#[async_trait]
pub trait TravelTool: Send + Sync {
    fn name(&self) -> ToolName;

    /// 前端可见的步骤说明
    fn label(&self) -> &'static str;

    /// 参数的 JSON Schema
    fn input_schema(&self) -> Value;

    /// 执行工具；返回 `Err` 表示本工具无可用数据
    async fn execute(&self, args: Value) -> Result<Value>;
}

pub(crate) fn schema_of<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or(Value::Null)
}

pub(crate) fn parse_args<T: DeserializeOwned>(tool: ToolName, args: Value) -> Result<T> {
    serde_json::from_value(args).with_context(|| format!("Invalid arguments for {}", tool))
}

pub(crate) fn coordinates(lat: f64, lon: f64) -> Value {
    json!({ "lat": lat, "lng": lon })
}

/// 参数里已有坐标时直接使用，否则对查询文本做一次地理编码
pub(crate) async fn locate(
    gateway: &ApiGateway,
    lat: Option<f64>,
    lon: Option<f64>,
    query: &str,
) -> Option<(f64, f64)> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        return Some((lat, lon));
    }
    gateway
        .geocode(query)
        .await
        .first()
        .map(|place| (place.lat, place.lon))
}

/// `en:Fushimi Inari-taisha` → `Fushimi Inari-taisha`
pub(crate) fn wikipedia_title(tag: &str) -> &str {
    match tag.split_once(':') {
        Some((lang, title)) if lang.len() <= 3 => title,
        _ => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wikipedia_title_strips_language_prefix() {
        assert_eq!(wikipedia_title("en:Gion"), "Gion");
        assert_eq!(wikipedia_title("Gion"), "Gion");
        assert_eq!(wikipedia_title("Star Wars: Episode IV"), "Star Wars: Episode IV");
    }

    #[test]
    fn test_parse_args_reports_tool_name() {
        #[derive(serde::Deserialize)]
        #[allow(dead_code)]
        struct Args {
            destination: String,
        }

        let err = parse_args::<Args>(ToolName::GetWeather, json!({ "lat": 1 }))
            .err()
            .unwrap();
        assert!(err.to_string().contains("get_weather"));
    }
}
