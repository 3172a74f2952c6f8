use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::{ApiGateway, GatewayError, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

/// REST Countries 国家概况
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryFacts {
    pub name: String,
    pub official_name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub languages: Vec<String>,
    pub currencies: Vec<CurrencyInfo>,
    pub timezones: Vec<String>,
    pub cca2: String,
    pub latlng: Option<(f64, f64)>,
    pub calling_codes: Vec<String>,
    pub driving_side: Option<String>,
    pub flag: Option<String>,
}

impl CountryFacts {
    pub fn from_rest(value: &Value) -> Option<Self> {
        let name = as_text(&value["name"]["common"])?;
        let cca2 = as_text(&value["cca2"])?;

        // 语言与货币都是以代码为键的对象，按键排序保证输出稳定
        let mut languages: Vec<(String, String)> = value["languages"]
            .as_object()
            .map(|map| {
                map.iter()
                    .filter_map(|(code, lang)| Some((code.clone(), as_text(lang)?)))
                    .collect()
            })
            .unwrap_or_default();
        languages.sort();

        let mut currencies: Vec<CurrencyInfo> = value["currencies"]
            .as_object()
            .map(|map| {
                map.iter()
                    .map(|(code, info)| CurrencyInfo {
                        code: code.clone(),
                        name: as_text(&info["name"]).unwrap_or_else(|| code.clone()),
                        symbol: as_text(&info["symbol"]).unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        currencies.sort_by(|a, b| a.code.cmp(&b.code));

        let strings = |v: &Value| -> Vec<String> {
            v.as_array()
                .map(|items| items.iter().filter_map(as_text).collect())
                .unwrap_or_default()
        };

        let latlng = match (as_f64(&value["latlng"][0]), as_f64(&value["latlng"][1])) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        };

        let calling_codes = match as_text(&value["idd"]["root"]) {
            Some(root) => {
                let suffix = as_text(&value["idd"]["suffixes"][0]).unwrap_or_default();
                vec![format!("{}{}", root, suffix)]
            }
            None => Vec::new(),
        };

        Some(Self {
            official_name: as_text(&value["name"]["official"]).unwrap_or_else(|| name.clone()),
            name,
            capital: as_text(&value["capital"][0]),
            region: as_text(&value["region"]),
            subregion: as_text(&value["subregion"]),
            population: value["population"].as_u64(),
            languages: languages.into_iter().map(|(_, lang)| lang).collect(),
            currencies,
            timezones: strings(&value["timezones"]),
            cca2: cca2.to_uppercase(),
            latlng,
            calling_codes,
            driving_side: as_text(&value["car"]["side"]),
            flag: as_text(&value["flags"]["svg"]).or_else(|| as_text(&value["flags"]["png"])),
        })
    }

    pub fn primary_currency(&self) -> Option<&CurrencyInfo> {
        self.currencies.first()
    }
}

/// 名称搜索可能返回多个国家，优先取通用名完全一致的一条
pub fn pick_country(value: &Value, wanted: &str) -> Option<CountryFacts> {
    let candidates: Vec<CountryFacts> = match value {
        Value::Array(items) => items.iter().filter_map(CountryFacts::from_rest).collect(),
        other => CountryFacts::from_rest(other).into_iter().collect(),
    };

    let wanted = wanted.trim().to_lowercase();
    let exact = candidates.iter().position(|c| {
        c.name.to_lowercase() == wanted || c.official_name.to_lowercase() == wanted
    });

    match exact {
        Some(index) => candidates.into_iter().nth(index),
        None => candidates.into_iter().next(),
    }
}

impl ApiGateway {
    pub async fn country_by_name(&self, name: &str) -> Option<CountryFacts> {
        let url = build_url(
            &self.endpoints().rest_countries,
            &["name", name],
            &[("fullText", "false".to_string())],
        );
        self.fetch_country(url, name).await
    }

    /// 按 ISO 3166-1 alpha-2 代码查询
    pub async fn country_by_code(&self, code: &str) -> Option<CountryFacts> {
        let url = build_url(&self.endpoints().rest_countries, &["alpha", code], &[]);
        self.fetch_country(url, code).await
    }

    async fn fetch_country(
        &self,
        url: Result<reqwest::Url, GatewayError>,
        wanted: &str,
    ) -> Option<CountryFacts> {
        let result = match url {
            Ok(url) => {
                self.get_json(CacheCategory::Country, url, Latency::Default)
                    .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(value) => pick_country(&value, wanted),
            Err(e) => {
                warn!("⚠️ 国家信息获取失败 [{}]: {}", wanted, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn japan() -> Value {
        json!({
            "name": { "common": "Japan", "official": "Japan" },
            "cca2": "JP",
            "capital": ["Tokyo"],
            "region": "Asia",
            "subregion": "Eastern Asia",
            "population": 125836021u64,
            "languages": { "jpn": "Japanese" },
            "currencies": { "JPY": { "name": "Japanese yen", "symbol": "¥" } },
            "timezones": ["UTC+09:00"],
            "latlng": [36.0, 138.0],
            "idd": { "root": "+8", "suffixes": ["1"] },
            "car": { "side": "left" },
            "flags": { "png": "https://flagcdn.com/w320/jp.png" }
        })
    }

    #[test]
    fn test_parse_country_facts() {
        let facts = CountryFacts::from_rest(&japan()).unwrap();

        assert_eq!(facts.name, "Japan");
        assert_eq!(facts.capital.as_deref(), Some("Tokyo"));
        assert_eq!(facts.languages, vec!["Japanese"]);
        assert_eq!(facts.primary_currency().unwrap().code, "JPY");
        assert_eq!(facts.calling_codes, vec!["+81"]);
        assert_eq!(facts.driving_side.as_deref(), Some("left"));
        assert_eq!(facts.latlng, Some((36.0, 138.0)));
        assert_eq!(facts.flag.as_deref(), Some("https://flagcdn.com/w320/jp.png"));
    }

    #[test]
    fn test_pick_country_prefers_exact_name() {
        let niger = json!({ "name": { "common": "Niger", "official": "Republic of Niger" }, "cca2": "NE" });
        let nigeria = json!({ "name": { "common": "Nigeria", "official": "Federal Republic of Nigeria" }, "cca2": "NG" });
        let payload = json!([nigeria, niger]);

        assert_eq!(pick_country(&payload, "niger").unwrap().cca2, "NE");
        assert_eq!(pick_country(&payload, "Nig").unwrap().cca2, "NG");
    }

    #[test]
    fn test_pick_country_accepts_single_object() {
        assert_eq!(pick_country(&japan(), "JP").unwrap().name, "Japan");
        assert!(pick_country(&json!({ "status": 404 }), "XX").is_none());
    }
}
