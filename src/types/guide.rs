//! 旅行指南输出结构，字段名与前端渲染组件约定的 camelCase 保持一致

use serde::{Deserialize, Serialize};

/// 完整的旅行指南
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelGuide {
    pub destination: String,
    pub country: String,
    pub theme: String,
    pub overview: DestinationOverview,
    pub top_cities: Vec<CityRanking>,
    pub neighborhoods: Vec<Neighborhood>,
    pub attractions: Vec<Attraction>,
    pub budget: BudgetEstimate,
    pub transportation: TransportationGuide,
    pub safety: SafetyInfo,
    pub culture: CultureGuide,
    pub mistakes: Vec<CommonMistake>,
    pub best_for: Vec<TravelerType>,
    pub images: Vec<DestinationImage>,
    pub map_data: Vec<MapLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationOverview {
    pub summary: String,
    pub highlights: Vec<String>,
    pub best_time_to_visit: String,
    pub climate: String,
    pub language: String,
    pub currency: String,
    pub time_zone: String,
    pub visa_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRanking {
    pub rank: u32,
    pub name: String,
    pub description: String,
    pub why_visit: String,
    pub ideal_duration: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborhoodType {
    Budget,
    MidRange,
    Luxury,
    Local,
}

impl NeighborhoodType {
    /// 上游给出的类型文本无法识别时归为 mid-range
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "budget" => NeighborhoodType::Budget,
            "luxury" => NeighborhoodType::Luxury,
            "local" => NeighborhoodType::Local,
            _ => NeighborhoodType::MidRange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: NeighborhoodType,
    pub description: String,
    pub price_range: PriceRange,
    pub best_for: Vec<String>,
    pub nearby_attractions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttractionType {
    Popular,
    HiddenGem,
    Cultural,
    Nature,
    Food,
    Nightlife,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: AttractionType,
    pub description: String,
    pub why_visit: String,
    pub estimated_time: String,
    pub cost: String,
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRanges {
    pub budget: AmountRange,
    pub mid_range: AmountRange,
    pub luxury: AmountRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierText {
    pub budget: String,
    pub mid_range: String,
    pub luxury: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: TierText,
    pub food: TierText,
    pub transport: TierText,
    pub activities: TierText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    pub currency: String,
    pub daily: TierRanges,
    pub breakdown: BudgetBreakdown,
    pub weekly_total: TierRanges,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationGuide {
    pub getting_there: GettingThere,
    pub getting_around: GettingAround,
    pub intercity: Intercity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettingThere {
    pub main_airports: Vec<String>,
    pub alternative_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettingAround {
    pub public_transport: String,
    pub taxis: String,
    pub rentals: String,
    pub walking: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intercity {
    pub options: Vec<String>,
    pub recommendations: String,
}

/// 安全等级，封闭的五值枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafetyRating {
    VerySafe,
    Safe,
    Moderate,
    Caution,
    Avoid,
}

impl SafetyRating {
    /// 将上游的自由文本或数值评分归一化为五值枚举
    ///
    /// 文本按大小写不敏感的查找表匹配；数值按 travel-advisory.info 的 0-5 风险分段映射；
    /// 无法识别时返回 `Moderate`。
    pub fn normalize(raw: &str) -> Self {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            "very-safe" | "very safe" | "very_safe" => return SafetyRating::VerySafe,
            "safe" | "low" => return SafetyRating::Safe,
            "moderate" | "medium" => return SafetyRating::Moderate,
            "caution" | "high" => return SafetyRating::Caution,
            "avoid" | "extreme" => return SafetyRating::Avoid,
            _ => {}
        }

        match key.parse::<f64>() {
            Ok(score) if score.is_finite() && score >= 0.0 => Self::from_advisory_score(score),
            _ => SafetyRating::Moderate,
        }
    }

    /// travel-advisory.info 风险分：0-2.5 低风险，2.5-3.5 中等，3.5-4.5 高，4.5 以上极高
    pub fn from_advisory_score(score: f64) -> Self {
        if score <= 2.5 {
            SafetyRating::Safe
        } else if score <= 3.5 {
            SafetyRating::Moderate
        } else if score <= 4.5 {
            SafetyRating::Caution
        } else {
            SafetyRating::Avoid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyRating::VerySafe => "very-safe",
            SafetyRating::Safe => "safe",
            SafetyRating::Moderate => "moderate",
            SafetyRating::Caution => "caution",
            SafetyRating::Avoid => "avoid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyInfo {
    pub overall_rating: SafetyRating,
    pub summary: String,
    pub concerns: Vec<String>,
    pub tips: Vec<String>,
    pub emergency_numbers: EmergencyNumbers,
    pub health_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyNumbers {
    pub police: String,
    pub ambulance: String,
    pub tourist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureGuide {
    pub summary: String,
    pub etiquette: Vec<String>,
    pub dress: String,
    pub tipping: String,
    pub greetings: String,
    pub taboos: Vec<String>,
    pub local_customs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonMistake {
    pub mistake: String,
    pub why: String,
    pub instead: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerType {
    #[serde(rename = "type")]
    pub kind: String,
    pub why: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationImage {
    pub url: String,
    pub alt: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapLocationType {
    City,
    Attraction,
    Neighborhood,
    Airport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MapLocationType,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safety_rating_text_lookup_is_case_insensitive() {
        assert_eq!(SafetyRating::normalize("Very Safe"), SafetyRating::VerySafe);
        assert_eq!(SafetyRating::normalize("very-safe"), SafetyRating::VerySafe);
        assert_eq!(SafetyRating::normalize("LOW"), SafetyRating::Safe);
        assert_eq!(SafetyRating::normalize("Medium"), SafetyRating::Moderate);
        assert_eq!(SafetyRating::normalize("HIGH"), SafetyRating::Caution);
        assert_eq!(SafetyRating::normalize(" extreme "), SafetyRating::Avoid);
    }

    #[test]
    fn test_safety_rating_unrecognized_defaults_to_moderate() {
        assert_eq!(
            SafetyRating::normalize("unrecognized-garbage"),
            SafetyRating::Moderate
        );
        assert_eq!(SafetyRating::normalize(""), SafetyRating::Moderate);
        assert_eq!(SafetyRating::normalize("-3"), SafetyRating::Moderate);
        assert_eq!(SafetyRating::normalize("NaN"), SafetyRating::Moderate);
    }

    #[test]
    fn test_safety_rating_numeric_scores() {
        assert_eq!(SafetyRating::normalize("1.2"), SafetyRating::Safe);
        assert_eq!(SafetyRating::normalize("3.0"), SafetyRating::Moderate);
        assert_eq!(SafetyRating::normalize("4"), SafetyRating::Caution);
        assert_eq!(SafetyRating::normalize("4.8"), SafetyRating::Avoid);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(SafetyRating::VerySafe).unwrap(),
            json!("very-safe")
        );
        assert_eq!(
            serde_json::to_value(AttractionType::HiddenGem).unwrap(),
            json!("hidden-gem")
        );
        assert_eq!(
            serde_json::to_value(NeighborhoodType::MidRange).unwrap(),
            json!("mid-range")
        );
        assert_eq!(
            serde_json::to_value(MapLocationType::Airport).unwrap(),
            json!("airport")
        );
    }

    #[test]
    fn test_neighborhood_type_parse_or_default() {
        assert_eq!(NeighborhoodType::parse_or_default("Luxury"), NeighborhoodType::Luxury);
        assert_eq!(NeighborhoodType::parse_or_default("suburb"), NeighborhoodType::MidRange);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let location = MapLocation {
            name: "Tokyo".to_string(),
            kind: MapLocationType::City,
            coordinates: Coordinates { lat: 35.68, lng: 139.69 },
            description: None,
        };
        let value = serde_json::to_value(&location).unwrap();

        assert_eq!(value["type"], json!("city"));
        assert!(value.get("description").is_none());
    }
}
