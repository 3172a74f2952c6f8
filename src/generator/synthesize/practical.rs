//! 预算、交通、安全、文化与本地建议各节的合成

use serde_json::Value;

use super::Sources;
use super::cascade::Cascade;
use crate::types::guide::{
    AmountRange, BudgetBreakdown, BudgetEstimate, CommonMistake, CultureGuide, EmergencyNumbers,
    GettingAround, GettingThere, Intercity, SafetyInfo, SafetyRating, TierRanges, TierText,
    TransportationGuide, TravelerType,
};

const MAX_AIRPORTS: usize = 3;
const MAX_MISTAKES: usize = 5;
const MAX_BEST_FOR: usize = 4;
const DAYS_PER_WEEK: u32 = 7;

static NULL: Value = Value::Null;

fn tier_range(value: &Value, tier: &str, default: (u32, u32)) -> AmountRange {
    AmountRange {
        min: Cascade::from(value, &format!("{}.min", tier)).amount(default.0),
        max: Cascade::from(value, &format!("{}.max", tier)).amount(default.1),
    }
}

fn tier_ranges(value: &Value, defaults: [(u32, u32); 3]) -> TierRanges {
    TierRanges {
        budget: tier_range(value, "budget", defaults[0]),
        mid_range: tier_range(value, "midRange", defaults[1]),
        luxury: tier_range(value, "luxury", defaults[2]),
    }
}

fn tier_text(value: &Value, defaults: [&str; 3]) -> TierText {
    TierText {
        budget: Cascade::from(value, "budget").text(defaults[0]),
        mid_range: Cascade::from(value, "midRange").text(defaults[1]),
        luxury: Cascade::from(value, "luxury").text(defaults[2]),
    }
}

fn weekly(daily: &TierRanges) -> TierRanges {
    let scale = |r: AmountRange| AmountRange {
        min: r.min.saturating_mul(DAYS_PER_WEEK),
        max: r.max.saturating_mul(DAYS_PER_WEEK),
    };
    TierRanges {
        budget: scale(daily.budget),
        mid_range: scale(daily.mid_range),
        luxury: scale(daily.luxury),
    }
}

/// 金额统一以基准货币表示
pub(super) fn budget(src: &Sources<'_>) -> BudgetEstimate {
    let daily_source = Cascade::from(src.budget, "dailyBudget");
    let daily_value = daily_source.value().unwrap_or(&NULL);
    let daily = tier_ranges(daily_value, [(30, 50), (80, 150), (250, 500)]);

    let weekly_total = match Cascade::from(src.budget, "weeklyBudget").value() {
        Some(weekly_value) => {
            let derived = weekly(&daily);
            TierRanges {
                budget: tier_range(weekly_value, "budget", (derived.budget.min, derived.budget.max)),
                mid_range: tier_range(
                    weekly_value,
                    "midRange",
                    (derived.mid_range.min, derived.mid_range.max),
                ),
                luxury: tier_range(weekly_value, "luxury", (derived.luxury.min, derived.luxury.max)),
            }
        }
        None => weekly(&daily),
    };

    let breakdown = |section: &str, defaults: [&str; 3]| {
        let path = format!("breakdown.{}", section);
        let value = Cascade::from(src.budget, &path)
            .value()
            .unwrap_or(&NULL);
        tier_text(value, defaults)
    };

    BudgetEstimate {
        currency: Cascade::from(src.budget, "currency").text("USD"),
        daily,
        breakdown: BudgetBreakdown {
            accommodation: breakdown(
                "accommodation",
                ["$15-30/night", "$50-100/night", "$150-300+/night"],
            ),
            food: breakdown("food", ["$10-20/day", "$30-50/day", "$80-150/day"]),
            transport: breakdown("transport", ["$5-15/day", "$20-40/day", "$50-100/day"]),
            activities: breakdown("activities", ["$5-20/day", "$30-60/day", "$100-200/day"]),
        },
        weekly_total,
        tips: Cascade::from(src.budget, "tips").strings(&[
            "Research seasonal prices",
            "Book accommodation in advance",
            "Try local street food for savings",
        ]),
    }
}

pub(super) fn transportation(src: &Sources<'_>) -> TransportationGuide {
    let airports: Vec<String> = Cascade::from(src.transport, "airports")
        .items()
        .iter()
        .filter_map(|airport| Cascade::from(airport, "name").text_opt())
        .take(MAX_AIRPORTS)
        .collect();

    TransportationGuide {
        getting_there: GettingThere {
            main_airports: if airports.is_empty() {
                vec!["International Airport".to_string()]
            } else {
                airports
            },
            alternative_options: Cascade::from(src.transport, "alternativeOptions")
                .strings(&["Consider nearby airports", "Train connections available"]),
        },
        getting_around: GettingAround {
            public_transport: Cascade::from(src.transport, "publicTransit.description")
                .text("Public transportation available in major cities"),
            taxis: Cascade::from(src.transport, "taxis").text("Taxis and rideshares available"),
            rentals: Cascade::from(src.transport, "rentals")
                .text("Car rentals available at airports and cities"),
            walking: Cascade::from(src.transport, "walking")
                .text("City centers are often walkable"),
            tips: Cascade::from(src.transport, "gettingAround").strings(&[
                "Negotiate taxi fares in advance",
                "Consider local transport apps",
            ]),
        },
        intercity: Intercity {
            options: Cascade::from(src.transport, "intercityOptions")
                .strings(&["Domestic flights", "Buses", "Trains"]),
            recommendations: Cascade::from(src.transport, "recommendation")
                .text("Buses are affordable, flights save time for long distances"),
        },
    }
}

pub(super) fn safety(destination: &str, src: &Sources<'_>) -> SafetyInfo {
    let overall_rating = Cascade::from(src.safety, "overallRating")
        .or(src.safety, "advisoryScore")
        .text_opt()
        .map(|raw| SafetyRating::normalize(&raw))
        .unwrap_or(SafetyRating::Moderate);

    SafetyInfo {
        overall_rating,
        summary: Cascade::from(src.safety, "summary")
            .or(src.safety, "advisorySummary")
            .text(&format!(
                "Exercise normal precautions when visiting {}",
                destination
            )),
        concerns: Cascade::from(src.safety, "concerns")
            .or(src.safety, "areasToAvoid")
            .strings(&["Check local advisories before travel"]),
        tips: Cascade::from(src.safety, "tips")
            .or(src.safety, "commonScams")
            .strings(&["Be aware of your surroundings", "Keep valuables secure"]),
        emergency_numbers: EmergencyNumbers {
            police: Cascade::from(src.safety, "emergencyNumbers.police")
                .text("911 or local equivalent"),
            ambulance: Cascade::from(src.safety, "emergencyNumbers.ambulance")
                .text("911 or local equivalent"),
            tourist: Cascade::from(src.safety, "emergencyNumbers.tourist")
                .text("Contact your embassy"),
        },
        health_advice: Cascade::from(src.safety, "healthAdvice")
            .or(src.safety, "healthTips")
            .strings(&["Consult a travel clinic before departure"]),
    }
}

pub(super) fn culture(destination: &str, src: &Sources<'_>) -> CultureGuide {
    CultureGuide {
        summary: Cascade::from(src.culture, "summary").text(&format!(
            "{} has a rich cultural heritage with unique customs and traditions",
            destination
        )),
        etiquette: Cascade::from(src.culture, "etiquette")
            .strings(&["Respect local customs", "Learn basic local phrases"]),
        dress: Cascade::from(src.culture, "dresscode")
            .or(src.culture, "dress")
            .text("Dress modestly, especially at religious sites"),
        tipping: Cascade::from(src.culture, "tipping")
            .or(src.budget, "tippingCustoms")
            .text("Tipping customs vary - check locally"),
        greetings: Cascade::from(src.culture, "greetings")
            .text("Greet people respectfully, handshakes are common"),
        taboos: Cascade::from(src.culture, "taboos").strings(&["Research local sensitivities"]),
        local_customs: Cascade::from(src.culture, "localCustoms")
            .or(src.culture, "customs")
            .strings(&["Customs vary by region"]),
    }
}

const MISTAKE_WHY: &str = "Can detract from your experience";
const MISTAKE_INSTEAD: &str = "Research and plan accordingly";

fn mistake_entry(raw: &Value) -> Option<CommonMistake> {
    match raw {
        Value::String(text) if !text.trim().is_empty() => Some(CommonMistake {
            mistake: text.trim().to_string(),
            why: MISTAKE_WHY.to_string(),
            instead: MISTAKE_INSTEAD.to_string(),
        }),
        Value::Object(_) => Some(CommonMistake {
            mistake: Cascade::from(raw, "mistake").text_opt()?,
            why: Cascade::from(raw, "why").text(MISTAKE_WHY),
            instead: Cascade::from(raw, "instead").text(MISTAKE_INSTEAD),
        }),
        _ => None,
    }
}

pub(super) fn mistakes(src: &Sources<'_>) -> Vec<CommonMistake> {
    let entries: Vec<CommonMistake> = Cascade::from(src.tips, "mistakes")
        .items()
        .iter()
        .filter_map(mistake_entry)
        .take(MAX_MISTAKES)
        .collect();
    if !entries.is_empty() {
        return entries;
    }

    [
        "Not researching local customs",
        "Only visiting tourist areas",
        "Not trying local food",
    ]
    .iter()
    .map(|text| CommonMistake {
        mistake: text.to_string(),
        why: MISTAKE_WHY.to_string(),
        instead: MISTAKE_INSTEAD.to_string(),
    })
    .collect()
}

fn traveler_entry(raw: &Value) -> Option<TravelerType> {
    let kind = match raw {
        Value::String(text) => Some(text.trim().to_string()).filter(|t| !t.is_empty())?,
        Value::Object(_) => Cascade::from(raw, "type").text_opt()?,
        _ => return None,
    };
    Some(TravelerType {
        why: Cascade::from(raw, "why").text(&format!("Great destination for {}", kind)),
        highlights: Cascade::from(raw, "highlights").strings(&["Local experiences"]),
        kind,
    })
}

pub(super) fn best_for(src: &Sources<'_>) -> Vec<TravelerType> {
    let entries: Vec<TravelerType> = Cascade::from(src.tips, "bestFor")
        .items()
        .iter()
        .filter_map(traveler_entry)
        .take(MAX_BEST_FOR)
        .collect();
    if !entries.is_empty() {
        return entries;
    }

    [
        ("Culture Enthusiasts", "Rich history and traditions"),
        ("Adventure Seekers", "Diverse landscapes and activities"),
        ("Food Lovers", "Unique local cuisine"),
    ]
    .iter()
    .map(|(kind, why)| TravelerType {
        kind: kind.to_string(),
        why: why.to_string(),
        highlights: vec!["Local experiences".to_string()],
    })
    .collect()
}
