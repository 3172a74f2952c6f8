use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use reqwest::Url;

use super::{ApiGateway, GatewayError, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

/// Nominatim 地理编码结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPlace {
    pub name: String,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    pub place_type: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
}

impl GeoPlace {
    /// Nominatim 单条记录；缺少坐标时丢弃
    pub fn from_nominatim(value: &Value) -> Option<Self> {
        let lat = as_f64(&value["lat"])?;
        let lon = as_f64(&value["lon"])?;
        let address = &value["address"];
        let display_name = as_text(&value["display_name"]).unwrap_or_default();
        let name = as_text(&value["name"])
            .or_else(|| display_name.split(',').next().map(|s| s.trim().to_string()))
            .unwrap_or_default();

        Some(Self {
            name,
            display_name,
            lat,
            lon,
            place_type: as_text(&value["addresstype"])
                .or_else(|| as_text(&value["type"]))
                .unwrap_or_else(|| "place".to_string()),
            country: as_text(&address["country"]),
            country_code: as_text(&address["country_code"]).map(|c| c.to_uppercase()),
            city: as_text(&address["city"])
                .or_else(|| as_text(&address["town"]))
                .or_else(|| as_text(&address["state"])),
        })
    }
}

/// 地名统一请求英文结果
const RESULT_LANGUAGE: &str = "en";

fn search_url(base: &str, query: &str) -> Result<Url, GatewayError> {
    build_url(
        base,
        &["search"],
        &[
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("extratags", "1".to_string()),
            ("limit", "5".to_string()),
            ("accept-language", RESULT_LANGUAGE.to_string()),
        ],
    )
}

fn reverse_url(base: &str, lat: f64, lon: f64) -> Result<Url, GatewayError> {
    build_url(
        base,
        &["reverse"],
        &[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", RESULT_LANGUAGE.to_string()),
        ],
    )
}

impl ApiGateway {
    /// 文本 → 坐标与地址，最多5条候选
    pub async fn geocode(&self, query: &str) -> Vec<GeoPlace> {
        let url = match search_url(&self.endpoints().nominatim, query) {
            Ok(url) => url,
            Err(e) => {
                warn!("⚠️ 地理编码URL无效: {}", e);
                return Vec::new();
            }
        };

        match self
            .get_json(CacheCategory::Geocoding, url, Latency::Default)
            .await
        {
            Ok(Value::Array(items)) => items.iter().filter_map(GeoPlace::from_nominatim).collect(),
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!("⚠️ 地理编码失败 [{}]: {}", query, e);
                Vec::new()
            }
        }
    }

    /// 坐标 → 地址
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Option<GeoPlace> {
        let url = reverse_url(&self.endpoints().nominatim, lat, lon).ok()?;

        match self
            .get_json(CacheCategory::Geocoding, url, Latency::Default)
            .await
        {
            Ok(value) => GeoPlace::from_nominatim(&value),
            Err(e) => {
                warn!("⚠️ 逆地理编码失败 [{}, {}]: {}", lat, lon, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiEndpoints;
    use serde_json::json;

    #[test]
    fn test_requests_ask_for_english_names() {
        let base = ApiEndpoints::default().nominatim;

        let search = search_url(&base, "Kyoto").unwrap();
        assert!(search.path().ends_with("/search"));
        assert!(
            search
                .query_pairs()
                .any(|(k, v)| k == "accept-language" && v == "en")
        );
        assert!(search.query_pairs().any(|(k, v)| k == "q" && v == "Kyoto"));

        let reverse = reverse_url(&base, 35.0116, 135.7681).unwrap();
        assert!(reverse.path().ends_with("/reverse"));
        assert!(
            reverse
                .query_pairs()
                .any(|(k, v)| k == "accept-language" && v == "en")
        );
    }

    #[test]
    fn test_parse_nominatim_record() {
        let record = json!({
            "lat": "36.5748441",
            "lon": "139.2394179",
            "name": "Japan",
            "display_name": "Japan",
            "addresstype": "country",
            "address": { "country": "Japan", "country_code": "jp" }
        });

        let place = GeoPlace::from_nominatim(&record).unwrap();
        assert_eq!(place.name, "Japan");
        assert_eq!(place.country_code.as_deref(), Some("JP"));
        assert_eq!(place.place_type, "country");
        assert!((place.lat - 36.5748).abs() < 1e-3);
    }

    #[test]
    fn test_name_falls_back_to_display_name_head() {
        let record = json!({
            "lat": 35.0, "lon": 135.7,
            "display_name": "Kyoto, Kyoto Prefecture, Japan",
            "type": "city",
            "address": { "city": "Kyoto" }
        });

        let place = GeoPlace::from_nominatim(&record).unwrap();
        assert_eq!(place.name, "Kyoto");
        assert_eq!(place.place_type, "city");
        assert_eq!(place.city.as_deref(), Some("Kyoto"));
        assert!(place.country.is_none());
    }

    #[test]
    fn test_record_without_coordinates_is_dropped() {
        assert!(GeoPlace::from_nominatim(&json!({ "name": "Nowhere" })).is_none());
    }
}
