use anyhow::{Result, bail};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{TravelTool, parse_args, schema_of};
use crate::apis::ApiGateway;
use crate::types::ToolName;

fn default_image_count() -> usize {
    15
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchImagesArgs {
    /// 搜索关键词
    pub query: String,
    #[serde(default = "default_image_count")]
    pub count: usize,
}

/// 图片搜索，Wikimedia Commons 优先，Unsplash 兜底
///
/// 负载：`images[] {url, alt, credit, license}`
pub struct SearchImages {
    gateway: Arc<ApiGateway>,
}

impl SearchImages {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for SearchImages {
    fn name(&self) -> ToolName {
        ToolName::SearchImages
    }

    fn label(&self) -> &'static str {
        "Collecting destination images"
    }

    fn input_schema(&self) -> Value {
        schema_of::<SearchImagesArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: SearchImagesArgs = parse_args(self.name(), args)?;
        let (images, source) = self
            .gateway
            .search_images(&args.query, args.count.clamp(1, 50))
            .await;

        if images.is_empty() {
            bail!("No images found for {}", args.query);
        }

        Ok(json!({
            "images": images,
            "source": source,
        }))
    }
}
