use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::{ApiGateway, Latency, as_text, build_url};
use crate::cache::CacheCategory;

static HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageHit {
    pub url: String,
    pub alt: String,
    pub credit: Option<String>,
    pub license: Option<String>,
}

pub fn strip_html(raw: &str) -> String {
    match HTML_TAG.as_ref() {
        Some(tag) => tag.replace_all(raw, "").trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Commons `generator=search` 结果；只保留有缩略图的文件
pub fn parse_wikimedia(value: &Value, limit: usize) -> Vec<ImageHit> {
    let Some(pages) = value["query"]["pages"].as_object() else {
        return Vec::new();
    };

    // 按搜索相关度排序
    let mut ordered: Vec<&Value> = pages.values().collect();
    ordered.sort_by_key(|page| page["index"].as_u64().unwrap_or(u64::MAX));

    ordered
        .into_iter()
        .filter_map(|page| {
            let info = &page["imageinfo"][0];
            let url = as_text(&info["thumburl"])?;
            let meta = &info["extmetadata"];
            let title = as_text(&page["title"])
                .map(|t| t.trim_start_matches("File:").to_string())
                .unwrap_or_default();

            Some(ImageHit {
                url,
                alt: as_text(&meta["ImageDescription"]["value"])
                    .map(|d| strip_html(&d))
                    .filter(|d| !d.is_empty())
                    .unwrap_or(title),
                credit: Some(
                    as_text(&meta["Artist"]["value"])
                        .map(|a| strip_html(&a))
                        .filter(|a| !a.is_empty())
                        .unwrap_or_else(|| "Wikimedia Commons".to_string()),
                ),
                license: as_text(&meta["LicenseShortName"]["value"]),
            })
        })
        .take(limit)
        .collect()
}

pub fn parse_unsplash(value: &Value, fallback_alt: &str) -> Vec<ImageHit> {
    value["results"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|img| {
                    Some(ImageHit {
                        url: as_text(&img["urls"]["regular"])?,
                        alt: as_text(&img["alt_description"])
                            .or_else(|| as_text(&img["description"]))
                            .unwrap_or_else(|| fallback_alt.to_string()),
                        credit: as_text(&img["user"]["name"]),
                        license: Some("Unsplash License".to_string()),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

impl ApiGateway {
    pub async fn wikimedia_images(&self, query: &str, limit: usize) -> Vec<ImageHit> {
        let url = match build_url(
            &self.endpoints().wikimedia_commons,
            &[],
            &[
                ("action", "query".to_string()),
                ("generator", "search".to_string()),
                ("gsrsearch", query.to_string()),
                ("gsrnamespace", "6".to_string()),
                ("gsrlimit", (limit * 2).max(10).to_string()),
                ("prop", "imageinfo".to_string()),
                ("iiprop", "url|extmetadata|size".to_string()),
                ("iiurlwidth", "800".to_string()),
                ("format", "json".to_string()),
            ],
        ) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        match self
            .get_json(CacheCategory::Images, url, Latency::Default)
            .await
        {
            Ok(value) => parse_wikimedia(&value, limit),
            Err(e) => {
                warn!("⚠️ Wikimedia 图片搜索失败 [{}]: {}", query, e);
                Vec::new()
            }
        }
    }

    /// 需要 Unsplash Access Key，未配置时直接返回空
    pub async fn unsplash_images(&self, query: &str, limit: usize) -> Vec<ImageHit> {
        let Some(key) = self.endpoints().unsplash_access_key.clone() else {
            debug!("🔑 未配置 Unsplash Access Key，跳过");
            return Vec::new();
        };

        let url = match build_url(
            &self.endpoints().unsplash,
            &["search", "photos"],
            &[
                ("query", format!("{} travel", query)),
                ("per_page", limit.to_string()),
                ("orientation", "landscape".to_string()),
            ],
        ) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        match self
            .get_json_authorized(
                CacheCategory::Images,
                url,
                Latency::Default,
                format!("Client-ID {}", key),
            )
            .await
        {
            Ok(value) => parse_unsplash(&value, query),
            Err(e) => {
                warn!("⚠️ Unsplash 图片搜索失败 [{}]: {}", query, e);
                Vec::new()
            }
        }
    }

    /// 先查 Wikimedia Commons，无结果时回退到 Unsplash
    pub async fn search_images(&self, query: &str, limit: usize) -> (Vec<ImageHit>, &'static str) {
        let hits = self.wikimedia_images(query, limit).await;
        if !hits.is_empty() {
            return (hits, "wikimedia-commons");
        }

        debug!("🔁 Wikimedia 无图片结果，回退到 Unsplash: {}", query);
        (self.unsplash_images(query, limit).await, "unsplash")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<a href=\"//commons\">Jane <b>Doe</b></a> "),
            "Jane Doe"
        );
    }

    #[test]
    fn test_parse_wikimedia_orders_by_index_and_limits() {
        let payload = json!({ "query": { "pages": {
            "200": { "index": 2, "title": "File:Fushimi Inari.jpg", "imageinfo": [{
                "thumburl": "https://upload.wikimedia.org/b.jpg",
                "extmetadata": { "Artist": { "value": "<span>Someone</span>" } }
            }] },
            "100": { "index": 1, "title": "File:Kiyomizu-dera.jpg", "imageinfo": [{
                "thumburl": "https://upload.wikimedia.org/a.jpg",
                "extmetadata": {
                    "ImageDescription": { "value": "<p>Kiyomizu-dera in autumn</p>" },
                    "LicenseShortName": { "value": "CC BY-SA 4.0" }
                }
            }] },
            "300": { "index": 3, "title": "File:No thumb.svg", "imageinfo": [{}] }
        } } });

        let hits = parse_wikimedia(&payload, 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].alt, "Kiyomizu-dera in autumn");
        assert_eq!(hits[0].credit.as_deref(), Some("Wikimedia Commons"));
        assert_eq!(hits[1].alt, "Fushimi Inari.jpg");
        assert_eq!(hits[1].credit.as_deref(), Some("Someone"));

        assert_eq!(parse_wikimedia(&payload, 1).len(), 1);
    }

    #[test]
    fn test_parse_unsplash() {
        let payload = json!({ "results": [
            { "urls": { "regular": "https://images.unsplash.com/x" }, "user": { "name": "A. Photographer" } }
        ] });

        let hits = parse_unsplash(&payload, "Kyoto");
        assert_eq!(hits[0].alt, "Kyoto");
        assert_eq!(hits[0].credit.as_deref(), Some("A. Photographer"));
    }
}
