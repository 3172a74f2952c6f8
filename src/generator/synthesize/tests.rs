use super::*;
use crate::types::guide::SafetyRating;
use serde_json::json;

fn kyoto_data() -> CollectedData {
    let mut collected = CollectedData::new();
    collected.store(
        ToolName::SearchDestination,
        json!({
            "name": "Kyoto",
            "country": "Japan",
            "countryCode": "JP",
            "coordinates": { "lat": 35.0116, "lng": 135.7681 },
            "wikipedia": { "summary": "Kyoto was the capital of Japan for over a millennium." }
        }),
    );
    collected.store(
        ToolName::GetCountryInfo,
        json!({
            "name": "Japan",
            "currency": { "code": "JPY", "name": "Japanese yen" },
            "languages": ["Japanese"],
            "timezones": ["UTC+09:00"]
        }),
    );
    collected.store(
        ToolName::SearchAttractions,
        json!({
            "attractions": [
                { "name": "Fushimi Inari Taisha", "coordinates": { "lat": 34.9671, "lng": 135.7727 } },
                { "name": "Kinkaku-ji", "description": "The Golden Pavilion" },
                { "name": "Gio-ji", "category": "hidden temple" }
            ]
        }),
    );
    collected.store(
        ToolName::GetSafetyInfo,
        json!({ "overallRating": "very-safe", "emergencyNumbers": { "police": "110" } }),
    );
    collected
}

#[test]
fn test_empty_data_uses_literal_defaults() {
    let guide = synthesize("Nowhereland123", &CollectedData::new());

    assert_eq!(guide.destination, "Nowhereland123");
    assert_eq!(guide.country, "Nowhereland123");
    assert_eq!(
        guide.overview.summary,
        "Welcome to Nowhereland123. This guide was compiled using real-time data from multiple APIs."
    );
    assert_eq!(guide.overview.currency, "USD");
    assert_eq!(guide.overview.language, "Local language");
    assert_eq!(guide.safety.overall_rating, SafetyRating::Moderate);
    assert_eq!(guide.safety.emergency_numbers.tourist, "Contact your embassy");
    assert_eq!(guide.budget.daily.budget.min, 30);
    assert_eq!(guide.budget.weekly_total.luxury.max, 3500);
    assert_eq!(
        guide.transportation.getting_there.main_airports,
        vec!["International Airport".to_string()]
    );

    assert_eq!(guide.top_cities.len(), 1);
    assert_eq!(guide.top_cities[0].name, "Nowhereland123");
    assert_eq!(guide.top_cities[0].ideal_duration, "3-5 days");
    assert_eq!(guide.neighborhoods.len(), 1);
    assert_eq!(guide.neighborhoods[0].kind, NeighborhoodType::MidRange);
    assert_eq!(guide.neighborhoods[0].price_range.currency, "USD");

    assert!(guide.attractions.is_empty());
    assert!(guide.images.is_empty());
    assert_eq!(guide.mistakes.len(), 3);
    assert_eq!(guide.best_for.len(), 3);
    assert_eq!(guide.best_for[2].kind, "Food Lovers");

    assert_eq!(guide.map_data.len(), 1);
    assert_eq!(guide.map_data[0].kind, MapLocationType::City);
    assert_eq!(guide.map_data[0].coordinates, Coordinates { lat: 0.0, lng: 0.0 });
}

#[test]
fn test_cascade_prefers_collected_values() {
    let guide = synthesize("Kyoto", &kyoto_data());

    assert_eq!(guide.country, "Japan");
    assert_eq!(guide.theme, "japan");
    assert!(guide.overview.summary.starts_with("Kyoto was the capital"));
    assert_eq!(guide.overview.currency, "JPY");
    assert_eq!(guide.overview.language, "Japanese");
    assert_eq!(guide.overview.time_zone, "UTC+09:00");
    assert_eq!(guide.safety.overall_rating, SafetyRating::VerySafe);
    assert_eq!(guide.safety.emergency_numbers.police, "110");
    assert_eq!(guide.safety.emergency_numbers.ambulance, "911 or local equivalent");
    assert_eq!(guide.overview.highlights.len(), 3);
}

#[test]
fn test_attraction_defaults_and_kinds() {
    let guide = synthesize("Kyoto", &kyoto_data());
    let attractions = &guide.attractions;

    assert_eq!(attractions.len(), 3);
    assert_eq!(attractions[0].kind, AttractionType::Popular);
    assert_eq!(attractions[2].kind, AttractionType::HiddenGem);
    assert_eq!(attractions[0].city, "Kyoto");
    assert_eq!(attractions[1].why_visit, "The Golden Pavilion");
    assert_eq!(attractions[0].why_visit, "Worth visiting");
    assert_eq!(attractions[0].estimated_time, "1-2 hours");
    assert_eq!(
        attractions[0].coordinates,
        Some(Coordinates { lat: 34.9671, lng: 135.7727 })
    );
}

#[test]
fn test_missing_coordinates_are_spread_deterministically() {
    let first = synthesize("Kyoto", &kyoto_data());
    let second = synthesize("Kyoto", &kyoto_data());

    let placed = first.attractions[1].coordinates.unwrap();
    assert_eq!(Some(placed), second.attractions[1].coordinates);
    assert!((placed.lat - 35.0116).abs() < 0.05);
    assert!((placed.lng - 135.7681).abs() < 0.05);
    assert_ne!(placed, Coordinates { lat: 35.0116, lng: 135.7681 });
    assert_eq!(first, second);
}

#[test]
fn test_lists_are_capped() {
    let mut collected = CollectedData::new();
    let many: Vec<_> = (0..20)
        .map(|i| json!({ "name": format!("Place {}", i), "url": format!("https://img/{}.jpg", i) }))
        .collect();
    collected.store(ToolName::SearchAttractions, json!({ "attractions": many }));
    collected.store(ToolName::SearchImages, json!({ "images": many }));
    collected.store(ToolName::GetCityInfo, json!({ "cities": many }));
    collected.store(ToolName::GetNeighborhoods, json!({ "neighborhoods": many }));
    let hikers = vec!["Hikers"; 9];
    collected.store(ToolName::GetLocalTips, json!({ "mistakes": many, "bestFor": hikers }));

    let guide = synthesize("Anywhere", &collected);

    assert_eq!(guide.attractions.len(), MAX_ATTRACTIONS);
    assert_eq!(guide.images.len(), MAX_IMAGES);
    assert_eq!(guide.top_cities.len(), MAX_TOP_CITIES);
    assert_eq!(guide.neighborhoods.len(), MAX_NEIGHBORHOODS);
    assert_eq!(guide.best_for.len(), 4);
    assert_eq!(guide.best_for[0].why, "Great destination for Hikers");
    assert_eq!(guide.attractions[9].kind, AttractionType::Cultural);
    assert_eq!(guide.top_cities[4].rank, 5);
    assert_eq!(guide.top_cities[0].image_url.as_deref(), Some("https://img/0.jpg"));
    assert_eq!(guide.attractions[0].image_url.as_deref(), Some("https://img/1.jpg"));
}

#[test]
fn test_image_without_url_falls_back_to_search_link() {
    let mut collected = CollectedData::new();
    collected.store(
        ToolName::SearchImages,
        json!({ "images": [{ "caption": "Old town", "author": "Ana" }] }),
    );

    let guide = synthesize("San José", &collected);
    let image = &guide.images[0];

    assert_eq!(image.url, "https://source.unsplash.com/800x600/?San%20Jos%C3%A9");
    assert_eq!(image.alt, "Old town");
    assert_eq!(image.location, "San José");
    assert_eq!(image.credit.as_deref(), Some("Ana"));
}

#[test]
fn test_search_link_keeps_fragment_marker_in_query() {
    let link = image_search_link("Trinidad #Tobago");

    assert_eq!(
        link,
        "https://source.unsplash.com/800x600/?Trinidad%20%23Tobago"
    );
    assert!(reqwest::Url::parse(&link).unwrap().fragment().is_none());
}

#[test]
fn test_map_pins_follow_order() {
    let mut collected = kyoto_data();
    collected.store(
        ToolName::GetTransportation,
        json!({
            "airports": [
                { "name": "Kansai International", "coordinates": { "lat": 34.43, "lng": 135.23 } },
                { "name": "Itami" },
                { "name": "Kobe" }
            ]
        }),
    );
    collected.store(
        ToolName::GetNeighborhoods,
        json!({
            "neighborhoods": [
                { "name": "Gion", "coordinates": { "lat": 35.0037, "lng": 135.7788 } },
                { "name": "Arashiyama" }
            ]
        }),
    );

    let guide = synthesize("Kyoto", &collected);
    let kinds: Vec<MapLocationType> = guide.map_data.iter().map(|pin| pin.kind).collect();

    assert_eq!(
        kinds,
        vec![
            MapLocationType::City,
            MapLocationType::Airport,
            MapLocationType::Airport,
            MapLocationType::Attraction,
            MapLocationType::Attraction,
            MapLocationType::Attraction,
            MapLocationType::Neighborhood,
        ]
    );
    assert_eq!(guide.map_data[2].coordinates, guide.map_data[0].coordinates);
    assert_eq!(guide.transportation.getting_there.main_airports.len(), 3);
}

#[test]
fn test_budget_values_and_weekly_fallback() {
    let mut collected = CollectedData::new();
    collected.store(
        ToolName::GetBudgetInfo,
        json!({
            "currency": "EUR",
            "dailyBudget": { "budget": { "min": 40, "max": 60 }, "midRange": { "min": 100 } },
            "breakdown": { "food": { "budget": "€10-15/day" } }
        }),
    );

    let guide = synthesize("Lisbon", &collected);
    let budget = &guide.budget;

    assert_eq!(budget.currency, "EUR");
    assert_eq!(budget.daily.budget.max, 60);
    assert_eq!(budget.daily.mid_range.min, 100);
    assert_eq!(budget.daily.mid_range.max, 150);
    assert_eq!(budget.weekly_total.budget.min, 280);
    assert_eq!(budget.breakdown.food.budget, "€10-15/day");
    assert_eq!(budget.breakdown.food.mid_range, "$30-50/day");
    assert_eq!(guide.neighborhoods[0].price_range.currency, "EUR");
}

#[test]
fn test_mistake_entries_accept_strings_and_objects() {
    let mut collected = CollectedData::new();
    collected.store(
        ToolName::GetLocalTips,
        json!({
            "mistakes": [
                "Skipping the train pass",
                { "mistake": "Tipping in restaurants", "why": "It can confuse staff" },
                { "why": "no mistake text" }
            ]
        }),
    );

    let guide = synthesize("Osaka", &collected);

    assert_eq!(guide.mistakes.len(), 2);
    assert_eq!(guide.mistakes[0].why, "Can detract from your experience");
    assert_eq!(guide.mistakes[1].why, "It can confuse staff");
    assert_eq!(guide.mistakes[1].instead, "Research and plan accordingly");
}
