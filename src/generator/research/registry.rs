use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::apis::ApiGateway;
use crate::config::ResearchConfig;
use crate::generator::research::tools::{
    TravelTool,
    advisory::{CultureInfo, LocalTips, SafetyInfo},
    destination::{CityInfo, CountryInfo, SearchDestination},
    media::SearchImages,
    places::{Neighborhoods, SearchAttractions},
    practical::{BudgetInfo, Transportation, Weather},
};
use crate::types::{ToolName, ToolResult};

/// 工具目录中的一项
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: ToolName,
    pub label: &'static str,
    pub input_schema: Value,
}

/// 工具名 → 工具实现
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<ToolName, Arc<dyn TravelTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册全部十二个直连工具
    pub fn standard(gateway: Arc<ApiGateway>, research: &ResearchConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SearchDestination::new(gateway.clone())));
        registry.register(Arc::new(CountryInfo::new(gateway.clone())));
        registry.register(Arc::new(CityInfo::new(gateway.clone())));
        registry.register(Arc::new(SearchAttractions::new(
            gateway.clone(),
            research.attraction_radius_m,
        )));
        registry.register(Arc::new(Neighborhoods::new(
            gateway.clone(),
            research.neighborhood_radius_m,
        )));
        registry.register(Arc::new(BudgetInfo::new(gateway.clone())));
        registry.register(Arc::new(Weather::new(gateway.clone())));
        registry.register(Arc::new(Transportation::new(
            gateway.clone(),
            research.airport_radius_m,
            research.transit_radius_m,
        )));
        registry.register(Arc::new(SafetyInfo::new(gateway.clone())));
        registry.register(Arc::new(CultureInfo::new(gateway.clone())));
        registry.register(Arc::new(LocalTips::new(gateway.clone())));
        registry.register(Arc::new(SearchImages::new(gateway)));
        registry
    }

    /// 注册工具，同名工具会被替换
    pub fn register(&mut self, tool: Arc<dyn TravelTool>) {
        self.tools.insert(tool.name(), tool);
    }

    pub fn get(&self, name: ToolName) -> Option<&Arc<dyn TravelTool>> {
        self.tools.get(&name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// 按固定顺序列出已注册的工具
    pub fn catalog(&self) -> Vec<ToolDescriptor> {
        ToolName::ALL
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| ToolDescriptor {
                name: tool.name(),
                label: tool.label(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// 调用工具；任何失败都被收敛为 `success: false` 的结果
    pub async fn invoke(&self, name: ToolName, args: Value) -> ToolResult {
        let Some(tool) = self.tools.get(&name) else {
            warn!("⚠️ 未注册的工具: {}", name);
            return ToolResult::failed(format!("Unknown tool: {}", name));
        };

        debug!("🔧 {} args={}", name, args);
        match tool.execute(args).await {
            Ok(data) => {
                let source = data["source"].as_str().map(str::to_string);
                ToolResult::ok(data, source)
            }
            Err(e) => ToolResult::failed(format!("{:#}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use async_trait::async_trait;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl TravelTool for Echo {
        fn name(&self) -> ToolName {
            ToolName::GetWeather
        }

        fn label(&self) -> &'static str {
            "Echo"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }

        async fn execute(&self, args: Value) -> Result<Value> {
            if args["fail"].as_bool() == Some(true) {
                bail!("upstream down");
            }
            Ok(json!({ "echo": args, "source": "echo" }))
        }
    }

    #[tokio::test]
    async fn test_invoke_wraps_success_and_failure() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo));

        let ok = registry
            .invoke(ToolName::GetWeather, json!({ "fail": false }))
            .await;
        assert!(ok.is_success());
        assert_eq!(ok.source(), Some("echo"));
        assert_eq!(ok.data().unwrap()["echo"]["fail"], json!(false));

        let failed = registry
            .invoke(ToolName::GetWeather, json!({ "fail": true }))
            .await;
        assert!(!failed.is_success());
        assert!(failed.data().is_none());
        assert_eq!(failed.error(), Some("upstream down"));
    }

    #[tokio::test]
    async fn test_unknown_tool_fails_without_data() {
        let registry = ToolRegistry::new();
        let result = registry.invoke(ToolName::SearchImages, json!({})).await;

        assert!(!result.is_success());
        assert!(result.data().is_none());
        assert!(result.error().unwrap().contains("search_images"));
    }

    #[test]
    fn test_catalog_follows_tool_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo));

        let catalog = registry.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, ToolName::GetWeather);
        assert_eq!(catalog[0].label, "Echo");
    }
}
