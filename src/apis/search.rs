use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiGateway, GatewayError, Latency, as_text, build_url};
use crate::cache::CacheCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedTopic {
    pub text: String,
    pub url: Option<String>,
}

/// DuckDuckGo Instant Answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantAnswer {
    pub heading: Option<String>,
    pub abstract_text: Option<String>,
    pub abstract_source: Option<String>,
    pub abstract_url: Option<String>,
    pub image: Option<String>,
    pub related_topics: Vec<RelatedTopic>,
}

impl InstantAnswer {
    pub fn from_duckduckgo(value: &Value) -> Self {
        let related_topics = value["RelatedTopics"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|topic| {
                        Some(RelatedTopic {
                            text: as_text(&topic["Text"])?,
                            url: as_text(&topic["FirstURL"]),
                        })
                    })
                    .take(5)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            heading: as_text(&value["Heading"]),
            abstract_text: as_text(&value["Abstract"]),
            abstract_source: as_text(&value["AbstractSource"]),
            abstract_url: as_text(&value["AbstractURL"]),
            image: as_text(&value["Image"]),
            related_topics,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.abstract_text.is_none() && self.related_topics.is_empty()
    }
}

impl ApiGateway {
    /// 即时答案，经常返回空内容
    pub async fn web_search(&self, query: &str) -> Option<InstantAnswer> {
        let url = build_url(
            &self.endpoints().duckduckgo,
            &[],
            &[
                ("q", query.to_string()),
                ("format", "json".to_string()),
                ("no_html", "1".to_string()),
                ("skip_disambig", "1".to_string()),
            ],
        )
        .ok()?;

        match self.get_json(CacheCategory::Search, url, Latency::Fast).await {
            Ok(value) => Some(InstantAnswer::from_duckduckgo(&value)).filter(|a| !a.is_empty()),
            Err(GatewayError::Decode(reason)) => {
                debug!("📭 DuckDuckGo 返回空响应 [{}]: {}", query, reason);
                None
            }
            Err(e) => {
                warn!("⚠️ DuckDuckGo 搜索失败 [{}]: {}", query, e);
                None
            }
        }
    }
}
