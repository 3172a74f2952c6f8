use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use super::{TravelTool, coordinates, parse_args, schema_of, wikipedia_title};
use crate::apis::ApiGateway;
use crate::apis::geocoding::GeoPlace;
use crate::apis::wikipedia::WikiContent;
use crate::reference;
use crate::types::ToolName;

/// 带百科摘要的城市数量上限，其余城市只保留 OSM 数据
const CITY_SUMMARY_LIMIT: usize = 5;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchDestinationArgs {
    /// 目的地名称，国家或城市
    pub destination: String,
}

/// 目的地定位
///
/// 负载：`name`, `displayName`, `type`, `country`, `countryCode`,
/// `coordinates {lat,lng}`, `description`, `wikipedia {title,summary,description,thumbnail,url}`,
/// `bestTimeToVisit`, `alternatives[]`
pub struct SearchDestination {
    gateway: Arc<ApiGateway>,
}

impl SearchDestination {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// 地理编码无结果时，用百科条目的坐标逆地理编码出国家信息
    async fn locate_via_encyclopedia(&self, query: &str) -> Option<GeoPlace> {
        let hit = self
            .gateway
            .wikipedia_search(query, 1)
            .await
            .into_iter()
            .next()?;
        let content = self.gateway.wikipedia_content(&hit.title).await?;
        let (lat, lon) = content.coordinates?;
        let address = self.gateway.reverse_geocode(lat, lon).await;
        encyclopedia_place(&content, address)
    }
}

/// 条目标题作为地名，地址部分取逆地理编码结果
fn encyclopedia_place(content: &WikiContent, address: Option<GeoPlace>) -> Option<GeoPlace> {
    let (lat, lon) = content.coordinates?;
    let address = address.as_ref();

    Some(GeoPlace {
        name: content.title.clone(),
        display_name: address
            .map(|a| a.display_name.clone())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| content.title.clone()),
        lat,
        lon,
        place_type: "place".to_string(),
        country: address.and_then(|a| a.country.clone()),
        country_code: address.and_then(|a| a.country_code.clone()),
        city: address.and_then(|a| a.city.clone()),
    })
}

#[async_trait]
impl TravelTool for SearchDestination {
    fn name(&self) -> ToolName {
        ToolName::SearchDestination
    }

    fn label(&self) -> &'static str {
        "Locating destination"
    }

    fn input_schema(&self) -> Value {
        schema_of::<SearchDestinationArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: SearchDestinationArgs = parse_args(self.name(), args)?;
        let query = args.destination.trim();

        let mut places = self.gateway.geocode(query).await;
        let mut source = "nominatim";
        if places.is_empty()
            && let Some(place) = self.locate_via_encyclopedia(query).await
        {
            debug!("📚 通过百科条目定位: {} → {}", query, place.name);
            places.push(place);
            source = "wikipedia";
        }
        let place = places
            .first()
            .with_context(|| format!("No location found for {}", query))?;

        let mut summary = self.gateway.wikipedia_summary(query).await;
        if summary.is_none() && !place.name.eq_ignore_ascii_case(query) {
            summary = self.gateway.wikipedia_summary(&place.name).await;
        }

        let profile = reference::resolve(place.country_code.as_deref(), query);

        Ok(json!({
            "name": place.name,
            "displayName": place.display_name,
            "type": place.place_type,
            "country": place.country,
            "countryCode": place.country_code,
            "coordinates": coordinates(place.lat, place.lon),
            "description": summary.as_ref().and_then(|s| s.description.clone()),
            "wikipedia": summary.as_ref().map(|s| json!({
                "title": s.title,
                "summary": s.extract,
                "description": s.description,
                "thumbnail": s.thumbnail,
                "url": s.url,
            })),
            "bestTimeToVisit": profile.map(|p| p.best_time),
            "alternatives": places
                .iter()
                .skip(1)
                .map(|p| p.display_name.clone())
                .collect::<Vec<_>>(),
            "source": source,
        }))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfoArgs {
    /// 国家名称（英文）
    pub country: String,
    /// ISO 3166-1 alpha-2 代码，已知时优先使用
    #[serde(default)]
    pub country_code: Option<String>,
}

/// 国家概况
///
/// 负载：`name`, `officialName`, `capital`, `region`, `subregion`, `population`,
/// `languages[]`, `currency {code,name,symbol}`, `currencies[]`, `timezones[]`, `timezone`,
/// `callingCodes[]`, `drivingSide`, `flag`, `countryCode`, `coordinates`, `summary`, `visaInfo`
pub struct CountryInfo {
    gateway: Arc<ApiGateway>,
}

impl CountryInfo {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for CountryInfo {
    fn name(&self) -> ToolName {
        ToolName::GetCountryInfo
    }

    fn label(&self) -> &'static str {
        "Fetching country facts"
    }

    fn input_schema(&self) -> Value {
        schema_of::<CountryInfoArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CountryInfoArgs = parse_args(self.name(), args)?;

        let mut facts = None;
        if let Some(code) = args.country_code.as_deref().filter(|c| !c.trim().is_empty()) {
            facts = self.gateway.country_by_code(code).await;
        }
        if facts.is_none() {
            facts = self.gateway.country_by_name(&args.country).await;
        }
        let facts = facts.with_context(|| format!("No country facts for {}", args.country))?;

        let summary = self.gateway.wikipedia_summary(&facts.name).await;
        let profile = reference::profile(&facts.cca2);

        Ok(json!({
            "name": facts.name,
            "officialName": facts.official_name,
            "capital": facts.capital,
            "region": facts.region,
            "subregion": facts.subregion,
            "population": facts.population,
            "languages": facts.languages,
            "currency": facts.primary_currency(),
            "currencies": facts.currencies,
            "timezones": facts.timezones,
            "timezone": facts.timezones.first(),
            "callingCodes": facts.calling_codes,
            "drivingSide": facts.driving_side,
            "flag": facts.flag,
            "countryCode": facts.cca2,
            "coordinates": facts.latlng.map(|(lat, lon)| coordinates(lat, lon)),
            "summary": summary.and_then(|s| s.extract),
            "visaInfo": profile.map(|p| p.visa_info),
            "source": "restcountries",
        }))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityInfoArgs {
    pub destination: String,
    #[serde(default = "default_city_limit")]
    pub limit: usize,
    #[serde(default)]
    pub country_code: Option<String>,
}

fn default_city_limit() -> usize {
    8
}

/// 主要城市，按人口降序
///
/// 负载：`cities[] {name, population, coordinates, description, wikipedia {summary}, imageUrl}`,
/// `coordinates`（人口最多的城市）, `countryCode`
pub struct CityInfo {
    gateway: Arc<ApiGateway>,
}

impl CityInfo {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for CityInfo {
    fn name(&self) -> ToolName {
        ToolName::GetCityInfo
    }

    fn label(&self) -> &'static str {
        "Discovering top cities"
    }

    fn input_schema(&self) -> Value {
        schema_of::<CityInfoArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CityInfoArgs = parse_args(self.name(), args)?;

        let code = match args.country_code.filter(|c| !c.trim().is_empty()) {
            Some(code) => Some(code),
            None => self
                .gateway
                .geocode(&args.destination)
                .await
                .into_iter()
                .find_map(|place| place.country_code),
        };
        let Some(code) = code else {
            bail!("No country code for {}", args.destination);
        };

        let mut cities = self.gateway.search_cities(&code).await;
        cities.truncate(args.limit.max(1));
        if cities.is_empty() {
            bail!("No cities found for {}", args.destination);
        }

        let mut entries = Vec::with_capacity(cities.len());
        for (index, city) in cities.iter().enumerate() {
            let summary = if index < CITY_SUMMARY_LIMIT {
                let title = city
                    .wikipedia
                    .as_deref()
                    .map(wikipedia_title)
                    .unwrap_or(city.name.as_str());
                self.gateway.wikipedia_summary(title).await
            } else {
                None
            };
            debug!("🏙️ {} (population {})", city.name, city.population);

            entries.push(json!({
                "name": city.name,
                "population": city.population,
                "coordinates": coordinates(city.lat, city.lon),
                "description": summary.as_ref().and_then(|s| s.description.clone()),
                "wikipedia": summary.as_ref().map(|s| json!({ "summary": s.extract })),
                "imageUrl": summary.as_ref().and_then(|s| s.thumbnail.clone()),
            }));
        }

        Ok(json!({
            "cities": entries,
            "coordinates": coordinates(cities[0].lat, cities[0].lon),
            "countryCode": code.to_uppercase(),
            "source": "overpass",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse_hit() -> GeoPlace {
        GeoPlace {
            name: "Ciudad Perdida".to_string(),
            display_name: "Ciudad Perdida, Santa Marta, Colombia".to_string(),
            lat: 11.0381,
            lon: -73.9253,
            place_type: "archaeological_site".to_string(),
            country: Some("Colombia".to_string()),
            country_code: Some("CO".to_string()),
            city: Some("Santa Marta".to_string()),
        }
    }

    #[test]
    fn test_encyclopedia_place_takes_country_from_reverse_lookup() {
        let content = WikiContent {
            title: "Ciudad Perdida".to_string(),
            extract: Some("An archaeological site in Colombia.".to_string()),
            coordinates: Some((11.0381, -73.9253)),
        };

        let place = encyclopedia_place(&content, Some(reverse_hit())).unwrap();
        assert_eq!(place.name, "Ciudad Perdida");
        assert_eq!(place.country_code.as_deref(), Some("CO"));
        assert_eq!(place.display_name, "Ciudad Perdida, Santa Marta, Colombia");
        assert_eq!(place.place_type, "place");
        assert_eq!((place.lat, place.lon), (11.0381, -73.9253));
    }

    #[test]
    fn test_encyclopedia_place_without_address_keeps_title() {
        let content = WikiContent {
            title: "Point Nemo".to_string(),
            extract: None,
            coordinates: Some((-48.8767, -123.3933)),
        };

        let place = encyclopedia_place(&content, None).unwrap();
        assert_eq!(place.display_name, "Point Nemo");
        assert!(place.country.is_none());
        assert!(place.country_code.is_none());
    }

    #[test]
    fn test_article_without_coordinates_cannot_locate() {
        let content = WikiContent {
            title: "Atlantis".to_string(),
            extract: Some("A fictional island.".to_string()),
            coordinates: None,
        };

        assert!(encyclopedia_place(&content, Some(reverse_hit())).is_none());
    }
}
