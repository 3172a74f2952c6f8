//! OpenStreetMap Overpass 查询

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::{ApiGateway, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

/// 分类 → Overpass 标签过滤器
const CATEGORY_FILTERS: &[(&str, &str)] = &[
    ("tourism", r#"["tourism"]"#),
    (
        "attractions",
        r#"["tourism"~"attraction|museum|gallery|viewpoint|artwork"]"#,
    ),
    ("hotels", r#"["tourism"="hotel"]"#),
    ("restaurants", r#"["amenity"="restaurant"]"#),
    ("cafes", r#"["amenity"="cafe"]"#),
    ("bars", r#"["amenity"="bar"]"#),
    ("shops", r#"["shop"]"#),
    ("transport", r#"["public_transport"]"#),
    ("historic", r#"["historic"]"#),
    ("nature", r#"["natural"]"#),
    ("religious", r#"["amenity"="place_of_worship"]"#),
];

const DEFAULT_FILTER: &str = r#"["tourism"]"#;

pub fn category_filter(category: &str) -> &'static str {
    let wanted = category.trim().to_lowercase();
    CATEGORY_FILTERS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, filter)| *filter)
        .unwrap_or(DEFAULT_FILTER)
}

pub fn places_query(lat: f64, lon: f64, radius_m: u32, category: &str) -> String {
    let filter = category_filter(category);
    format!(
        "[out:json][timeout:25];(node{f}(around:{r},{lat},{lon});way{f}(around:{r},{lat},{lon}););out body center 50;",
        f = filter,
        r = radius_m,
        lat = lat,
        lon = lon
    )
}

/// 元素坐标：节点取 lat/lon，路径取 center
fn element_coordinates(el: &Value) -> Option<(f64, f64)> {
    let lat = as_f64(&el["lat"]).or_else(|| as_f64(&el["center"]["lat"]))?;
    let lon = as_f64(&el["lon"]).or_else(|| as_f64(&el["center"]["lon"]))?;
    Some((lat, lon))
}

fn element_name(tags: &Value) -> Option<String> {
    as_text(&tags["name:en"]).or_else(|| as_text(&tags["name"]))
}

fn elements(value: &Value) -> &[Value] {
    value["elements"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OsmPlace {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub lat: f64,
    pub lon: f64,
    pub description: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<String>,
    pub wikipedia: Option<String>,
}

pub fn parse_places(value: &Value) -> Vec<OsmPlace> {
    elements(value)
        .iter()
        .filter_map(|el| {
            let tags = &el["tags"];
            let (lat, lon) = element_coordinates(el)?;
            Some(OsmPlace {
                id: el["id"].as_u64().unwrap_or_default(),
                name: element_name(tags)?,
                kind: as_text(&tags["tourism"])
                    .or_else(|| as_text(&tags["amenity"]))
                    .or_else(|| as_text(&tags["historic"]))
                    .unwrap_or_else(|| "place".to_string()),
                lat,
                lon,
                description: as_text(&tags["description:en"])
                    .or_else(|| as_text(&tags["description"])),
                website: as_text(&tags["website"]),
                opening_hours: as_text(&tags["opening_hours"]),
                wikipedia: as_text(&tags["wikipedia"]),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsmCity {
    pub name: String,
    pub population: u64,
    pub lat: f64,
    pub lon: f64,
    pub wikipedia: Option<String>,
}

/// 按人口降序，最多20个
pub fn parse_cities(value: &Value) -> Vec<OsmCity> {
    let mut cities: Vec<OsmCity> = elements(value)
        .iter()
        .filter_map(|el| {
            let tags = &el["tags"];
            let (lat, lon) = element_coordinates(el)?;
            let population = as_text(&tags["population"])
                .and_then(|p| p.replace([',', ' '], "").parse::<u64>().ok())
                .filter(|p| *p > 0)?;
            Some(OsmCity {
                name: element_name(tags)?,
                population,
                lat,
                lon,
                wikipedia: as_text(&tags["wikipedia"]),
            })
        })
        .collect();

    cities.sort_by(|a, b| b.population.cmp(&a.population));
    cities.truncate(20);
    cities
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsmAirport {
    pub name: String,
    pub iata: String,
    pub icao: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub international: bool,
}

pub fn parse_airports(value: &Value) -> Vec<OsmAirport> {
    elements(value)
        .iter()
        .filter_map(|el| {
            let tags = &el["tags"];
            let (lat, lon) = element_coordinates(el)?;
            Some(OsmAirport {
                name: element_name(tags)?,
                iata: as_text(&tags["iata"])?,
                icao: as_text(&tags["icao"]),
                lat,
                lon,
                international: tags["aerodrome:type"].as_str() == Some("international")
                    || tags["aerodrome"].as_str() == Some("international"),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitStop {
    pub name: String,
    pub kind: String,
    pub lat: f64,
    pub lon: f64,
    pub operator: Option<String>,
}

pub fn parse_transit_stops(value: &Value) -> Vec<TransitStop> {
    elements(value)
        .iter()
        .filter_map(|el| {
            let tags = &el["tags"];
            let (lat, lon) = element_coordinates(el)?;
            Some(TransitStop {
                name: element_name(tags)?,
                kind: as_text(&tags["railway"])
                    .or_else(|| as_text(&tags["public_transport"]))
                    .or_else(|| as_text(&tags["amenity"]))
                    .unwrap_or_else(|| "station".to_string()),
                lat,
                lon,
                operator: as_text(&tags["operator"]),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsmNeighborhood {
    pub name: String,
    pub kind: String,
    pub lat: f64,
    pub lon: f64,
    pub wikipedia: Option<String>,
}

pub fn parse_neighborhoods(value: &Value) -> Vec<OsmNeighborhood> {
    elements(value)
        .iter()
        .filter_map(|el| {
            let tags = &el["tags"];
            let (lat, lon) = element_coordinates(el)?;
            Some(OsmNeighborhood {
                name: element_name(tags)?,
                kind: as_text(&tags["place"]).unwrap_or_else(|| "neighbourhood".to_string()),
                lat,
                lon,
                wikipedia: as_text(&tags["wikipedia"]),
            })
        })
        .collect()
}

impl ApiGateway {
    /// 执行一条 Overpass QL；任何失败都返回空元素集
    async fn overpass(&self, query: String) -> Value {
        let empty = serde_json::json!({ "elements": [] });
        let url = match build_url(&self.endpoints().overpass, &[], &[("data", query)]) {
            Ok(url) => url,
            Err(e) => {
                warn!("⚠️ Overpass URL无效: {}", e);
                return empty;
            }
        };

        match self
            .get_json(CacheCategory::Places, url, Latency::Slow)
            .await
        {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️ Overpass 查询失败，返回空结果: {}", e);
                empty
            }
        }
    }

    pub async fn search_places(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
        category: &str,
    ) -> Vec<OsmPlace> {
        let value = self
            .overpass(places_query(lat, lon, radius_m, category))
            .await;
        parse_places(&value)
    }

    /// 国家内人口最多的城市与城镇
    pub async fn search_cities(&self, country_code: &str) -> Vec<OsmCity> {
        let query = format!(
            r#"[out:json][timeout:25];area["ISO3166-1"="{}"]->.country;(node["place"~"city|town"](area.country););out body 100;"#,
            country_code.to_uppercase()
        );
        parse_cities(&self.overpass(query).await)
    }

    pub async fn search_airports(&self, lat: f64, lon: f64, radius_m: u32) -> Vec<OsmAirport> {
        let query = format!(
            r#"[out:json][timeout:25];(node["aeroway"="aerodrome"]["iata"](around:{r},{lat},{lon});way["aeroway"="aerodrome"]["iata"](around:{r},{lat},{lon}););out body center 20;"#,
            r = radius_m,
            lat = lat,
            lon = lon
        );
        parse_airports(&self.overpass(query).await)
    }

    pub async fn search_transit_stops(&self, lat: f64, lon: f64, radius_m: u32) -> Vec<TransitStop> {
        let query = format!(
            r#"[out:json][timeout:25];(node["public_transport"="station"](around:{r},{lat},{lon});node["railway"="station"](around:{r},{lat},{lon});node["amenity"="bus_station"](around:{r},{lat},{lon}););out body 50;"#,
            r = radius_m,
            lat = lat,
            lon = lon
        );
        parse_transit_stops(&self.overpass(query).await)
    }

    pub async fn search_neighborhoods(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
    ) -> Vec<OsmNeighborhood> {
        let query = format!(
            r#"[out:json][timeout:25];(node["place"~"suburb|neighbourhood|quarter"](around:{r},{lat},{lon}););out body 30;"#,
            r = radius_m,
            lat = lat,
            lon = lon
        );
        parse_neighborhoods(&self.overpass(query).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_filter_table() {
        assert_eq!(category_filter("hotels"), r#"["tourism"="hotel"]"#);
        assert_eq!(category_filter("Religious"), r#"["amenity"="place_of_worship"]"#);
        assert_eq!(category_filter("spaceports"), r#"["tourism"]"#);
    }

    #[test]
    fn test_places_query_embeds_filter_and_radius() {
        let query = places_query(35.0, 135.7, 5000, "historic");
        assert!(query.contains(r#"node["historic"](around:5000,35,135.7)"#));
        assert!(query.contains("out body center 50"));
    }

    #[test]
    fn test_parse_places_handles_nodes_and_ways() {
        let payload = json!({ "elements": [
            { "id": 1, "lat": 35.03, "lon": 135.72, "tags": { "name": "Kinkaku-ji", "tourism": "attraction", "website": "https://shokoku-ji.jp" } },
            { "id": 2, "center": { "lat": 35.0, "lon": 135.77 }, "tags": { "name": "Kyoto National Museum", "tourism": "museum" } },
            { "id": 3, "lat": 35.1, "lon": 135.8, "tags": { "tourism": "viewpoint" } }
        ] });

        let places = parse_places(&payload);
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].website.as_deref(), Some("https://shokoku-ji.jp"));
        assert_eq!(places[1].kind, "museum");
        assert_eq!(places[1].lat, 35.0);
    }

    #[test]
    fn test_parse_cities_sorts_by_population() {
        let payload = json!({ "elements": [
            { "lat": 34.69, "lon": 135.5, "tags": { "name": "Osaka", "population": "2,691,185" } },
            { "lat": 35.68, "lon": 139.69, "tags": { "name": "Tokyo", "population": "13960000" } },
            { "lat": 35.0, "lon": 135.0, "tags": { "name": "Unknown size" } }
        ] });

        let cities = parse_cities(&payload);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Tokyo");
        assert_eq!(cities[1].population, 2_691_185);
    }

    #[test]
    fn test_parse_airports_requires_iata() {
        let payload = json!({ "elements": [
            { "lat": 35.77, "lon": 140.39, "tags": { "name": "Narita International Airport", "iata": "NRT", "aerodrome:type": "international" } },
            { "lat": 35.5, "lon": 139.0, "tags": { "name": "Private strip" } }
        ] });

        let airports = parse_airports(&payload);
        assert_eq!(airports.len(), 1);
        assert!(airports[0].international);
    }

    #[test]
    fn test_missing_elements_key_is_empty() {
        assert!(parse_neighborhoods(&json!({ "remark": "runtime error" })).is_empty());
        assert!(parse_transit_stops(&Value::Null).is_empty());
    }
}
