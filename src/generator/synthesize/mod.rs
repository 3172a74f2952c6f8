//! 指南合成：从收集数据表构造完整的旅行指南
//!
//! [`synthesize`] 是纯函数，同一份收集数据总是得到相同的指南。
//! 每个字段都按“精确路径 → 备用路径 → 字面默认值”的顺序取值，
//! 参考数据已由工具合并进负载，因此这里不再直接查询参考表。

use reqwest::Url;
use serde_json::Value;

use crate::memory::CollectedData;
use crate::reference;
use crate::types::ToolName;
use crate::types::guide::{
    Attraction, AttractionType, CityRanking, Coordinates, DestinationImage, DestinationOverview,
    MapLocation, MapLocationType, Neighborhood, NeighborhoodType, PriceRange, TravelGuide,
};

pub mod cascade;
pub mod enhance;
mod practical;

use cascade::Cascade;

const MAX_TOP_CITIES: usize = 5;
const MAX_ATTRACTIONS: usize = 10;
const MAX_NEIGHBORHOODS: usize = 5;
const MAX_IMAGES: usize = 12;
const MAP_AIRPORTS: usize = 2;
const MAP_ATTRACTIONS: usize = 5;
const MAP_NEIGHBORHOODS: usize = 5;

/// 缺少坐标的景点绕中心按黄金角排布
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
const SPREAD_DEGREES: f64 = 0.01;

/// 各工具的负载，缺失时为 `Value::Null`
pub(crate) struct Sources<'a> {
    pub search: &'a Value,
    pub country: &'a Value,
    pub cities: &'a Value,
    pub attractions: &'a Value,
    pub neighborhoods: &'a Value,
    pub budget: &'a Value,
    pub weather: &'a Value,
    pub transport: &'a Value,
    pub safety: &'a Value,
    pub culture: &'a Value,
    pub tips: &'a Value,
    pub images: &'a Value,
}

impl<'a> Sources<'a> {
    fn new(collected: &'a CollectedData) -> Self {
        Self {
            search: collected.payload(ToolName::SearchDestination),
            country: collected.payload(ToolName::GetCountryInfo),
            cities: collected.payload(ToolName::GetCityInfo),
            attractions: collected.payload(ToolName::SearchAttractions),
            neighborhoods: collected.payload(ToolName::GetNeighborhoods),
            budget: collected.payload(ToolName::GetBudgetInfo),
            weather: collected.payload(ToolName::GetWeather),
            transport: collected.payload(ToolName::GetTransportation),
            safety: collected.payload(ToolName::GetSafetyInfo),
            culture: collected.payload(ToolName::GetCultureInfo),
            tips: collected.payload(ToolName::GetLocalTips),
            images: collected.payload(ToolName::SearchImages),
        }
    }
}

/// 根据收集到的数据生成旅行指南
pub fn synthesize(destination: &str, collected: &CollectedData) -> TravelGuide {
    let destination = destination.trim();
    let src = Sources::new(collected);

    let centre = Cascade::from(src.search, "coordinates")
        .or(src.cities, "coordinates")
        .coordinates()
        .unwrap_or(Coordinates { lat: 0.0, lng: 0.0 });

    let image_pool = Cascade::from(src.images, "images").items();
    let raw_cities = Cascade::from(src.cities, "cities").items();
    let primary_city = raw_cities
        .first()
        .and_then(|city| Cascade::from(city, "name").text_opt())
        .unwrap_or_else(|| destination.to_string());

    let attractions = build_attractions(destination, &primary_city, centre, &src, image_pool);
    let attraction_names: Vec<String> = attractions.iter().map(|a| a.name.clone()).collect();

    let budget = practical::budget(&src);
    let neighborhoods =
        build_neighborhoods(destination, &primary_city, &budget.currency, &src, &attraction_names);

    TravelGuide {
        destination: destination.to_string(),
        country: Cascade::from(src.country, "name")
            .or(src.search, "country")
            .text(destination),
        theme: reference::theme_for_destination(destination).to_string(),
        overview: build_overview(destination, &src, &attraction_names),
        top_cities: build_top_cities(destination, raw_cities, image_pool, &src, &attraction_names),
        neighborhoods,
        map_data: build_map(destination, centre, &src, &attractions),
        attractions,
        budget,
        transportation: practical::transportation(&src),
        safety: practical::safety(destination, &src),
        culture: practical::culture(destination, &src),
        mistakes: practical::mistakes(&src),
        best_for: practical::best_for(&src),
        images: build_images(destination, image_pool),
    }
}

fn build_overview(
    destination: &str,
    src: &Sources<'_>,
    attraction_names: &[String],
) -> DestinationOverview {
    let welcome = format!(
        "Welcome to {}. This guide was compiled using real-time data from multiple APIs.",
        destination
    );

    DestinationOverview {
        summary: Cascade::from(src.search, "wikipedia.summary")
            .or(src.country, "summary")
            .text(&welcome),
        highlights: attraction_names.iter().take(5).cloned().collect(),
        best_time_to_visit: Cascade::from(src.weather, "bestTimeToVisit")
            .or(src.search, "bestTimeToVisit")
            .text("Spring and Fall"),
        climate: Cascade::from(src.weather, "climate")
            .or(src.weather, "description")
            .text("Check seasonal weather patterns"),
        language: Cascade::from(src.country, "languages")
            .or(src.culture, "languages")
            .strings(&["Local language"])
            .join(", "),
        currency: Cascade::from(src.country, "currency.code")
            .or(src.budget, "localCurrency")
            .text("USD"),
        time_zone: Cascade::from(src.country, "timezone")
            .or(src.country, "timezones.0")
            .text("Check local time"),
        visa_info: Cascade::from(src.country, "visaInfo")
            .text("Check visa requirements for your nationality"),
    }
}

fn pool_image(image_pool: &[Value], index: usize) -> Option<String> {
    image_pool
        .get(index)
        .and_then(|image| Cascade::from(image, "url").or(image, "src").text_opt())
}

fn build_top_cities(
    destination: &str,
    raw_cities: &[Value],
    image_pool: &[Value],
    src: &Sources<'_>,
    attraction_names: &[String],
) -> Vec<CityRanking> {
    if raw_cities.is_empty() {
        return vec![CityRanking {
            rank: 1,
            name: destination.to_string(),
            description: Cascade::from(src.search, "description")
                .text("The main destination area"),
            why_visit: "Primary destination with key attractions".to_string(),
            ideal_duration: "3-5 days".to_string(),
            highlights: attraction_names.iter().take(3).cloned().collect(),
            image_url: pool_image(image_pool, 0),
        }];
    }

    raw_cities
        .iter()
        .take(MAX_TOP_CITIES)
        .enumerate()
        .map(|(index, city)| CityRanking {
            rank: index as u32 + 1,
            name: Cascade::from(city, "name").text(&format!("City {}", index + 1)),
            description: Cascade::from(city, "description")
                .or(city, "wikipedia.summary")
                .text(&format!("A notable city in {}", destination)),
            why_visit: Cascade::from(city, "whyVisit").text("Rich culture and attractions"),
            ideal_duration: Cascade::from(city, "idealDuration").text("2-3 days"),
            highlights: Cascade::from(city, "highlights").strings(&["Local culture"]),
            image_url: Cascade::from(city, "imageUrl")
                .text_opt()
                .or_else(|| pool_image(image_pool, index)),
        })
        .collect()
}

/// 显式类型标签优先，其次“hidden”分类，最后按位置：前5个为热门
fn attraction_kind(attraction: &Value, index: usize) -> AttractionType {
    let explicit = Cascade::from(attraction, "type")
        .text_opt()
        .and_then(|kind| serde_json::from_value(Value::String(kind.to_lowercase())).ok());
    if let Some(kind) = explicit {
        return kind;
    }

    let category = Cascade::from(attraction, "category")
        .text("")
        .to_lowercase();
    if category.contains("hidden") {
        AttractionType::HiddenGem
    } else if index < 5 {
        AttractionType::Popular
    } else {
        AttractionType::Cultural
    }
}

/// 确定性的近似坐标，保证合成结果可复现
fn spread_around(centre: Coordinates, index: usize) -> Coordinates {
    let angle = index as f64 * GOLDEN_ANGLE;
    let radius = SPREAD_DEGREES * ((index + 1) as f64).sqrt();
    Coordinates {
        lat: centre.lat + radius * angle.cos(),
        lng: centre.lng + radius * angle.sin(),
    }
}

fn build_attractions(
    destination: &str,
    primary_city: &str,
    centre: Coordinates,
    src: &Sources<'_>,
    image_pool: &[Value],
) -> Vec<Attraction> {
    Cascade::from(src.attractions, "attractions")
        .items()
        .iter()
        .take(MAX_ATTRACTIONS)
        .enumerate()
        .map(|(index, a)| Attraction {
            name: Cascade::from(a, "name").text(&format!("Attraction {}", index + 1)),
            city: Cascade::from(a, "city").text(primary_city),
            kind: attraction_kind(a, index),
            description: Cascade::from(a, "description")
                .text(&format!("A point of interest in {}", destination)),
            why_visit: Cascade::from(a, "whyVisit")
                .or(a, "description")
                .text("Worth visiting"),
            estimated_time: Cascade::from(a, "estimatedTime").text("1-2 hours"),
            cost: Cascade::from(a, "cost").text("Varies"),
            tips: Cascade::from(a, "tips").strings(&["Check opening hours before visiting"]),
            image_url: Cascade::from(a, "image")
                .or(a, "imageUrl")
                .text_opt()
                .or_else(|| pool_image(image_pool, index + 1)),
            coordinates: Some(
                Cascade::from(a, "coordinates")
                    .coordinates()
                    .unwrap_or_else(|| spread_around(centre, index)),
            ),
        })
        .collect()
}

fn build_neighborhoods(
    destination: &str,
    primary_city: &str,
    currency: &str,
    src: &Sources<'_>,
    attraction_names: &[String],
) -> Vec<Neighborhood> {
    let raw = Cascade::from(src.neighborhoods, "neighborhoods").items();
    if raw.is_empty() {
        return vec![Neighborhood {
            name: "City Center".to_string(),
            city: destination.to_string(),
            kind: NeighborhoodType::MidRange,
            description: "Central and accessible area".to_string(),
            price_range: PriceRange {
                min: 50,
                max: 150,
                currency: currency.to_string(),
            },
            best_for: vec!["First-time visitors".to_string()],
            nearby_attractions: attraction_names.iter().take(3).cloned().collect(),
        }];
    }

    raw.iter()
        .take(MAX_NEIGHBORHOODS)
        .map(|n| Neighborhood {
            name: Cascade::from(n, "name").text("City Center"),
            city: Cascade::from(n, "city").text(primary_city),
            kind: Cascade::from(n, "type")
                .text_opt()
                .map(|kind| NeighborhoodType::parse_or_default(&kind))
                .unwrap_or(NeighborhoodType::MidRange),
            description: Cascade::from(n, "description")
                .or(n, "vibe")
                .text("A local neighborhood"),
            price_range: PriceRange {
                min: Cascade::from(n, "priceRange.min").amount(50),
                max: Cascade::from(n, "priceRange.max").amount(150),
                currency: Cascade::from(n, "priceRange.currency").text(currency),
            },
            best_for: Cascade::from(n, "bestFor").strings(&["Travelers"]),
            nearby_attractions: Cascade::from(n, "nearbyAttractions")
                .or(n, "highlights")
                .strings(&[]),
        })
        .collect()
}

const IMAGE_SEARCH_BASE: &str = "https://source.unsplash.com/800x600/";

/// 以目的地为查询串的图片搜索链接
fn image_search_link(destination: &str) -> String {
    match Url::parse(IMAGE_SEARCH_BASE) {
        Ok(mut url) => {
            url.set_query(Some(destination));
            url.into()
        }
        Err(_) => IMAGE_SEARCH_BASE.to_string(),
    }
}

fn build_images(destination: &str, image_pool: &[Value]) -> Vec<DestinationImage> {
    image_pool
        .iter()
        .take(MAX_IMAGES)
        .map(|image| DestinationImage {
            url: Cascade::from(image, "url")
                .or(image, "src")
                .text(&image_search_link(destination)),
            alt: Cascade::from(image, "alt")
                .or(image, "caption")
                .text(destination),
            location: Cascade::from(image, "location").text(destination),
            credit: Cascade::from(image, "credit").or(image, "author").text_opt(),
        })
        .collect()
}

fn build_map(
    destination: &str,
    centre: Coordinates,
    src: &Sources<'_>,
    attractions: &[Attraction],
) -> Vec<MapLocation> {
    let mut pins = vec![MapLocation {
        name: destination.to_string(),
        kind: MapLocationType::City,
        coordinates: centre,
        description: Some("Main destination".to_string()),
    }];

    for airport in Cascade::from(src.transport, "airports")
        .items()
        .iter()
        .take(MAP_AIRPORTS)
    {
        pins.push(MapLocation {
            name: Cascade::from(airport, "name").text("Airport"),
            kind: MapLocationType::Airport,
            coordinates: Cascade::from(airport, "coordinates")
                .coordinates()
                .unwrap_or(centre),
            description: Cascade::from(airport, "iata").text_opt(),
        });
    }

    for attraction in attractions.iter().take(MAP_ATTRACTIONS) {
        if let Some(coordinates) = attraction.coordinates {
            pins.push(MapLocation {
                name: attraction.name.clone(),
                kind: MapLocationType::Attraction,
                coordinates,
                description: Some(attraction.description.clone()),
            });
        }
    }

    for hood in Cascade::from(src.neighborhoods, "neighborhoods")
        .items()
        .iter()
        .take(MAP_NEIGHBORHOODS)
    {
        let Some(coordinates) = Cascade::from(hood, "coordinates").coordinates() else {
            continue;
        };
        let Some(name) = Cascade::from(hood, "name").text_opt() else {
            continue;
        };
        pins.push(MapLocation {
            name,
            kind: MapLocationType::Neighborhood,
            coordinates,
            description: Cascade::from(hood, "description").text_opt(),
        });
    }

    pins
}

// Include tests
#[cfg(test)]
mod tests;
