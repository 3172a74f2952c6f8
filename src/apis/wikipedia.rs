use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiGateway, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

/// Wikipedia geosearch 单次最大半径（米）
const GEOSEARCH_MAX_RADIUS_M: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiSummary {
    pub title: String,
    pub extract: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub original_image: Option<String>,
    pub url: Option<String>,
    pub coordinates: Option<(f64, f64)>,
}

impl WikiSummary {
    pub fn from_rest(value: &Value) -> Option<Self> {
        let title = as_text(&value["title"])?;
        let coordinates = match (
            as_f64(&value["coordinates"]["lat"]),
            as_f64(&value["coordinates"]["lon"]),
        ) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        };

        Some(Self {
            title,
            extract: as_text(&value["extract"]),
            description: as_text(&value["description"]),
            thumbnail: as_text(&value["thumbnail"]["source"]),
            original_image: as_text(&value["originalimage"]["source"]),
            url: as_text(&value["content_urls"]["desktop"]["page"]),
            coordinates,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiSearchHit {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// opensearch 返回 `[query, [titles], [descriptions], [urls]]`
pub fn parse_opensearch(value: &Value) -> Vec<WikiSearchHit> {
    let Some(titles) = value[1].as_array() else {
        return Vec::new();
    };

    titles
        .iter()
        .enumerate()
        .filter_map(|(i, title)| {
            Some(WikiSearchHit {
                title: as_text(title)?,
                description: as_text(&value[2][i]).unwrap_or_default(),
                url: as_text(&value[3][i]).unwrap_or_default(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiContent {
    pub title: String,
    pub extract: Option<String>,
    pub coordinates: Option<(f64, f64)>,
}

/// action=query 的 pages 是以页面ID为键的对象，取第一页
pub fn parse_content(value: &Value) -> Option<WikiContent> {
    let page = value["query"]["pages"].as_object()?.values().next()?;
    if page.get("missing").is_some() {
        return None;
    }

    let coordinates = match (
        as_f64(&page["coordinates"][0]["lat"]),
        as_f64(&page["coordinates"][0]["lon"]),
    ) {
        (Some(lat), Some(lon)) => Some((lat, lon)),
        _ => None,
    };

    Some(WikiContent {
        title: as_text(&page["title"])?,
        extract: as_text(&page["extract"]),
        coordinates,
    })
}

/// 坐标附近的条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoArticle {
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_m: f64,
}

pub fn parse_geosearch(value: &Value) -> Vec<GeoArticle> {
    value["query"]["geosearch"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    Some(GeoArticle {
                        title: as_text(&item["title"])?,
                        lat: as_f64(&item["lat"])?,
                        lon: as_f64(&item["lon"])?,
                        distance_m: as_f64(&item["dist"]).unwrap_or(0.0),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

impl ApiGateway {
    /// 条目摘要，404 视为不存在
    pub async fn wikipedia_summary(&self, title: &str) -> Option<WikiSummary> {
        let url = build_url(
            &self.endpoints().wikipedia_rest,
            &["page", "summary", title],
            &[],
        )
        .ok()?;

        match self
            .get_json(CacheCategory::Encyclopedia, url, Latency::Default)
            .await
        {
            Ok(value) => WikiSummary::from_rest(&value),
            Err(e) if e.is_not_found() => {
                debug!("📭 Wikipedia 无条目: {}", title);
                None
            }
            Err(e) => {
                warn!("⚠️ Wikipedia 摘要获取失败 [{}]: {}", title, e);
                None
            }
        }
    }

    pub async fn wikipedia_search(&self, query: &str, limit: usize) -> Vec<WikiSearchHit> {
        let url = match build_url(
            &self.endpoints().wikipedia_api,
            &[],
            &[
                ("action", "opensearch".to_string()),
                ("search", query.to_string()),
                ("limit", limit.to_string()),
                ("format", "json".to_string()),
            ],
        ) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        match self
            .get_json(CacheCategory::Encyclopedia, url, Latency::Default)
            .await
        {
            Ok(value) => parse_opensearch(&value),
            Err(e) => {
                warn!("⚠️ Wikipedia 搜索失败 [{}]: {}", query, e);
                Vec::new()
            }
        }
    }

    /// 条目导言纯文本与坐标
    pub async fn wikipedia_content(&self, title: &str) -> Option<WikiContent> {
        let url = build_url(
            &self.endpoints().wikipedia_api,
            &[],
            &[
                ("action", "query".to_string()),
                ("titles", title.to_string()),
                ("prop", "extracts|coordinates".to_string()),
                ("exintro", "1".to_string()),
                ("explaintext", "1".to_string()),
                ("redirects", "1".to_string()),
                ("format", "json".to_string()),
            ],
        )
        .ok()?;

        match self
            .get_json(CacheCategory::Encyclopedia, url, Latency::Default)
            .await
        {
            Ok(value) => parse_content(&value),
            Err(e) => {
                warn!("⚠️ Wikipedia 正文获取失败 [{}]: {}", title, e);
                None
            }
        }
    }

    /// 坐标附近的条目，按距离排序
    pub async fn wikipedia_geosearch(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
        limit: usize,
    ) -> Vec<GeoArticle> {
        let url = match build_url(
            &self.endpoints().wikipedia_api,
            &[],
            &[
                ("action", "query".to_string()),
                ("list", "geosearch".to_string()),
                ("gscoord", format!("{}|{}", lat, lon)),
                (
                    "gsradius",
                    radius_m.clamp(10, GEOSEARCH_MAX_RADIUS_M).to_string(),
                ),
                ("gslimit", limit.to_string()),
                ("format", "json".to_string()),
            ],
        ) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        match self
            .get_json(CacheCategory::Places, url, Latency::Default)
            .await
        {
            Ok(value) => parse_geosearch(&value),
            Err(e) => {
                warn!("⚠️ Wikipedia 周边搜索失败 [{}, {}]: {}", lat, lon, e);
                Vec::new()
            }
        }
    }
}
