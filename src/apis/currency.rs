use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use super::{ApiGateway, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRates {
    pub base: String,
    pub date: Option<String>,
    pub rates: BTreeMap<String, f64>,
}

impl ExchangeRates {
    pub fn from_frankfurter(value: &Value) -> Option<Self> {
        let rates: BTreeMap<String, f64> = value["rates"]
            .as_object()?
            .iter()
            .filter_map(|(code, rate)| Some((code.clone(), as_f64(rate)?)))
            .collect();

        Some(Self {
            base: as_text(&value["base"])?,
            date: as_text(&value["date"]),
            rates,
        })
    }

    /// 1 单位基准货币可兑换的目标货币数量
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        if code.eq_ignore_ascii_case(&self.base) {
            return Some(1.0);
        }
        self.rates.get(&code.to_uppercase()).copied()
    }
}

impl ApiGateway {
    pub async fn exchange_rates(&self, base: &str) -> Option<ExchangeRates> {
        let url = build_url(
            &self.endpoints().frankfurter,
            &["latest"],
            &[("from", base.to_uppercase())],
        )
        .ok()?;

        match self
            .get_json(CacheCategory::Currency, url, Latency::Default)
            .await
        {
            Ok(value) => ExchangeRates::from_frankfurter(&value),
            Err(e) => {
                warn!("⚠️ 汇率获取失败 [{}]: {}", base, e);
                None
            }
        }
    }
}
