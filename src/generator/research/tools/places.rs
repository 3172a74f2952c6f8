use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use super::{TravelTool, coordinates, locate, parse_args, schema_of, wikipedia_title};
use crate::apis::ApiGateway;
use crate::types::ToolName;

const ATTRACTION_SUMMARY_LIMIT: usize = 6;
const NEIGHBORHOOD_SUMMARY_LIMIT: usize = 3;

fn default_attraction_kind() -> String {
    "all".to_string()
}

fn default_attraction_limit() -> usize {
    15
}

fn default_neighborhood_limit() -> usize {
    8
}

/// 摘要的第一句
fn first_sentence(text: &str) -> String {
    match text.find(". ") {
        Some(end) => text[..=end].trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchAttractionsArgs {
    pub destination: String,
    /// 景点分类：all, attractions, historic, nature, religious, restaurants ...
    #[serde(rename = "type", default = "default_attraction_kind")]
    pub kind: String,
    #[serde(default = "default_attraction_limit")]
    pub limit: usize,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// 景点搜索：先查 Wikipedia 周边条目，无结果时回退到 Overpass
///
/// 负载：`attractions[] {name, description, whyVisit, category, coordinates, image, url}`
pub struct SearchAttractions {
    gateway: Arc<ApiGateway>,
    radius_m: u32,
}

impl SearchAttractions {
    pub fn new(gateway: Arc<ApiGateway>, radius_m: u32) -> Self {
        Self { gateway, radius_m }
    }

    async fn from_wikipedia(&self, lat: f64, lon: f64, limit: usize) -> Vec<Value> {
        let articles = self
            .gateway
            .wikipedia_geosearch(lat, lon, self.radius_m, limit)
            .await;

        let mut entries = Vec::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            let summary = if index < ATTRACTION_SUMMARY_LIMIT {
                self.gateway.wikipedia_summary(&article.title).await
            } else {
                None
            };

            entries.push(json!({
                "name": article.title,
                "description": summary.as_ref().and_then(|s| s.description.clone()),
                "whyVisit": summary.as_ref().and_then(|s| s.extract.as_deref().map(first_sentence)),
                "category": "landmark",
                "coordinates": coordinates(article.lat, article.lon),
                "distanceM": article.distance_m,
                "image": summary.as_ref().and_then(|s| s.thumbnail.clone()),
                "url": summary.as_ref().and_then(|s| s.url.clone()),
            }));
        }
        entries
    }

    async fn from_overpass(&self, lat: f64, lon: f64, category: &str) -> Vec<Value> {
        self.gateway
            .search_places(lat, lon, self.radius_m, category)
            .await
            .into_iter()
            .map(|place| {
                json!({
                    "name": place.name,
                    "description": place.description,
                    "category": place.kind,
                    "coordinates": coordinates(place.lat, place.lon),
                    "website": place.website,
                    "openingHours": place.opening_hours,
                    "wikipedia": place.wikipedia,
                })
            })
            .collect()
    }
}

#[async_trait]
impl TravelTool for SearchAttractions {
    fn name(&self) -> ToolName {
        ToolName::SearchAttractions
    }

    fn label(&self) -> &'static str {
        "Searching attractions"
    }

    fn input_schema(&self) -> Value {
        schema_of::<SearchAttractionsArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: SearchAttractionsArgs = parse_args(self.name(), args)?;
        let (lat, lon) = locate(&self.gateway, args.lat, args.lon, &args.destination)
            .await
            .with_context(|| format!("Could not locate {}", args.destination))?;
        let limit = args.limit.max(1);

        let category = match args.kind.trim().to_lowercase().as_str() {
            "" | "all" => "attractions".to_string(),
            other => other.to_string(),
        };

        let mut source = "wikipedia-geosearch";
        let mut attractions = if category == "attractions" {
            self.from_wikipedia(lat, lon, limit).await
        } else {
            Vec::new()
        };
        if attractions.is_empty() {
            debug!("🔁 周边条目为空，回退到 Overpass: {}", args.destination);
            source = "overpass";
            attractions = self.from_overpass(lat, lon, &category).await;
        }

        attractions.truncate(limit);
        if attractions.is_empty() {
            bail!("No attractions found near {}", args.destination);
        }

        Ok(json!({
            "attractions": attractions,
            "center": coordinates(lat, lon),
            "source": source,
        }))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NeighborhoodsArgs {
    pub city: String,
    #[serde(default = "default_neighborhood_limit")]
    pub limit: usize,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// 城区与街区
///
/// 负载：`neighborhoods[] {name, kind, city, description, coordinates}`
pub struct Neighborhoods {
    gateway: Arc<ApiGateway>,
    radius_m: u32,
}

impl Neighborhoods {
    pub fn new(gateway: Arc<ApiGateway>, radius_m: u32) -> Self {
        Self { gateway, radius_m }
    }
}

#[async_trait]
impl TravelTool for Neighborhoods {
    fn name(&self) -> ToolName {
        ToolName::GetNeighborhoods
    }

    fn label(&self) -> &'static str {
        "Mapping neighborhoods"
    }

    fn input_schema(&self) -> Value {
        schema_of::<NeighborhoodsArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: NeighborhoodsArgs = parse_args(self.name(), args)?;
        let (lat, lon) = locate(&self.gateway, args.lat, args.lon, &args.city)
            .await
            .with_context(|| format!("Could not locate {}", args.city))?;

        let mut found = self
            .gateway
            .search_neighborhoods(lat, lon, self.radius_m)
            .await;
        found.truncate(args.limit.max(1));
        if found.is_empty() {
            bail!("No neighborhoods found in {}", args.city);
        }

        let mut summaries_left = NEIGHBORHOOD_SUMMARY_LIMIT;
        let mut entries = Vec::with_capacity(found.len());
        for hood in &found {
            let mut description = None;
            if summaries_left > 0
                && let Some(tag) = hood.wikipedia.as_deref()
            {
                summaries_left -= 1;
                description = self
                    .gateway
                    .wikipedia_summary(wikipedia_title(tag))
                    .await
                    .and_then(|s| s.extract.as_deref().map(first_sentence));
            }

            entries.push(json!({
                "name": hood.name,
                "kind": hood.kind,
                "city": args.city,
                "description": description,
                "coordinates": coordinates(hood.lat, hood.lon),
            }));
        }

        Ok(json!({
            "neighborhoods": entries,
            "source": "overpass",
        }))
    }
}
