use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiGateway, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

/// travel-advisory.info 风险评估，分值 0（安全）到 5（避免前往）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub country_code: String,
    pub score: f64,
    pub message: Option<String>,
    pub sources_active: Option<u64>,
    pub updated: Option<String>,
}

pub fn parse_advisory(value: &Value, country_code: &str) -> Option<Advisory> {
    let code = country_code.to_uppercase();
    let advisory = &value["data"][code.as_str()]["advisory"];

    Some(Advisory {
        score: as_f64(&advisory["score"])?,
        message: as_text(&advisory["message"]),
        sources_active: advisory["sources_active"].as_u64(),
        updated: as_text(&advisory["updated"]),
        country_code: code,
    })
}

/// GOV.UK 外交部旅行建议摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UkTravelAdvice {
    pub title: String,
    pub description: Option<String>,
    pub alert_status: Vec<String>,
    pub url: Option<String>,
}

pub fn uk_advice_slug(country: &str) -> String {
    country
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub fn parse_uk_advice(value: &Value) -> Option<UkTravelAdvice> {
    Some(UkTravelAdvice {
        title: as_text(&value["title"])?,
        description: as_text(&value["description"]),
        alert_status: value["details"]["alert_status"]
            .as_array()
            .map(|items| items.iter().filter_map(as_text).collect())
            .unwrap_or_default(),
        url: as_text(&value["base_path"]).map(|path| format!("https://www.gov.uk{}", path)),
    })
}

impl ApiGateway {
    pub async fn travel_advisory(&self, country_code: &str) -> Option<Advisory> {
        let url = build_url(
            &self.endpoints().travel_advisory,
            &[],
            &[("countrycode", country_code.to_uppercase())],
        )
        .ok()?;

        match self
            .get_json(CacheCategory::Advisory, url, Latency::Default)
            .await
        {
            Ok(value) => parse_advisory(&value, country_code),
            Err(e) => {
                warn!("⚠️ 旅行风险评估获取失败 [{}]: {}", country_code, e);
                None
            }
        }
    }

    pub async fn uk_travel_advice(&self, country: &str) -> Option<UkTravelAdvice> {
        let slug = uk_advice_slug(country);
        if slug.is_empty() {
            return None;
        }
        let url = build_url(&self.endpoints().gov_uk_content, &[slug.as_str()], &[]).ok()?;

        match self
            .get_json(CacheCategory::Advisory, url, Latency::Default)
            .await
        {
            Ok(value) => parse_uk_advice(&value),
            Err(e) if e.is_not_found() => {
                debug!("📭 GOV.UK 无旅行建议: {}", slug);
                None
            }
            Err(e) => {
                warn!("⚠️ GOV.UK 旅行建议获取失败 [{}]: {}", slug, e);
                None
            }
        }
    }
}
