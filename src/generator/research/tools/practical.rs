use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{TravelTool, coordinates, locate, parse_args, schema_of};
use crate::apis::ApiGateway;
use crate::apis::weather::{best_months, describe_climate};
use crate::reference::{self, CostProfile, DailyRange, Tiers};
use crate::types::ToolName;

fn default_base_currency() -> String {
    "USD".to_string()
}

fn range(r: DailyRange) -> Value {
    json!({ "min": r.min, "max": r.max })
}

fn tiers(t: &Tiers) -> Value {
    json!({ "budget": t[0], "midRange": t[1], "luxury": t[2] })
}

fn cost_payload(cost: &CostProfile) -> (Value, Value) {
    let daily = json!({
        "budget": range(cost.budget),
        "midRange": range(cost.mid_range),
        "luxury": range(cost.luxury),
    });
    let breakdown = json!({
        "accommodation": tiers(&cost.accommodation),
        "food": tiers(&cost.food),
        "transport": tiers(&cost.transport),
        "activities": tiers(&cost.activities),
    });
    (daily, breakdown)
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetArgs {
    pub destination: String,
    /// 预算金额使用的基准货币
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// 当地货币代码，用于给出汇率
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// 花费估算：参考档案的三档日花费 + 实时汇率
///
/// 负载：`currency`（金额所用货币）, `localCurrency`, `exchangeRate`, `ratesDate`,
/// `dailyBudget {budget,midRange,luxury: {min,max}}`,
/// `breakdown {accommodation,food,transport,activities: {budget,midRange,luxury}}`,
/// `tips[]`, `tippingCustoms`
pub struct BudgetInfo {
    gateway: Arc<ApiGateway>,
}

impl BudgetInfo {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for BudgetInfo {
    fn name(&self) -> ToolName {
        ToolName::GetBudgetInfo
    }

    fn label(&self) -> &'static str {
        "Estimating travel costs"
    }

    fn input_schema(&self) -> Value {
        schema_of::<BudgetArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: BudgetArgs = parse_args(self.name(), args)?;
        let base = args.base_currency.trim().to_uppercase();
        let profile = reference::resolve(args.country_code.as_deref(), &args.destination);

        let rates = self.gateway.exchange_rates(&base).await;
        let local = args
            .currency
            .as_deref()
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty());
        let rate = match (&rates, &local) {
            (Some(rates), Some(code)) => rates.rate_for(code),
            _ => None,
        };

        if profile.is_none() && rate.is_none() {
            bail!("No cost data for {}", args.destination);
        }

        let mut tips: Vec<String> = profile
            .map(|p| p.cost.tips.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default();
        if let (Some(rate), Some(code)) = (rate, local.as_deref())
            && !code.eq_ignore_ascii_case(&base)
        {
            let date = rates
                .as_ref()
                .and_then(|r| r.date.as_deref())
                .map(|d| format!(" (rates from {})", d))
                .unwrap_or_default();
            tips.push(format!("1 {} ≈ {:.2} {}{}", base, rate, code, date));
        }

        let (daily, breakdown) = match profile {
            Some(p) => {
                let (daily, breakdown) = cost_payload(&p.cost);
                (Some(daily), Some(breakdown))
            }
            None => (None, None),
        };

        Ok(json!({
            "currency": base,
            "localCurrency": local,
            "exchangeRate": rate,
            "ratesDate": rates.as_ref().and_then(|r| r.date.clone()),
            "dailyBudget": daily,
            "breakdown": breakdown,
            "tips": tips,
            "tippingCustoms": profile.map(|p| p.cost.tipping),
            "source": if profile.is_some() { "reference+frankfurter" } else { "frankfurter" },
        }))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherArgs {
    pub destination: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// 7日预报与上一年的月度气候
///
/// 负载：`current`, `forecast[]`, `description`, `climate`, `bestTimeToVisit`, `monthly[]`, `coordinates`
pub struct Weather {
    gateway: Arc<ApiGateway>,
}

impl Weather {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for Weather {
    fn name(&self) -> ToolName {
        ToolName::GetWeather
    }

    fn label(&self) -> &'static str {
        "Checking weather and climate"
    }

    fn input_schema(&self) -> Value {
        schema_of::<WeatherArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: WeatherArgs = parse_args(self.name(), args)?;
        let (lat, lon) = locate(&self.gateway, args.lat, args.lon, &args.destination)
            .await
            .with_context(|| format!("Could not locate {}", args.destination))?;

        let forecast = self.gateway.weather_forecast(lat, lon).await;
        let months = self.gateway.climate_history(lat, lon).await;
        if forecast.is_empty() && months.is_empty() {
            bail!("No weather data for {}", args.destination);
        }

        let best_time = best_months(&months).or_else(|| {
            reference::resolve(args.country_code.as_deref(), &args.destination)
                .map(|p| p.best_time.to_string())
        });

        Ok(json!({
            "current": forecast.first(),
            "description": forecast.first().map(|day| day.conditions.clone()),
            "forecast": forecast,
            "climate": describe_climate(&months),
            "bestTimeToVisit": best_time,
            "monthly": months,
            "coordinates": coordinates(lat, lon),
            "source": "open-meteo",
        }))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransportationArgs {
    pub destination: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// 机场、公共交通站点与城际交通
///
/// 负载：`airports[] {name, iata, icao, international, coordinates}`,
/// `publicTransit {description, stations[]}`, `taxis`, `rentals`, `walking`,
/// `intercityOptions[]`, `recommendation`
pub struct Transportation {
    gateway: Arc<ApiGateway>,
    airport_radius_m: u32,
    transit_radius_m: u32,
}

impl Transportation {
    pub fn new(gateway: Arc<ApiGateway>, airport_radius_m: u32, transit_radius_m: u32) -> Self {
        Self {
            gateway,
            airport_radius_m,
            transit_radius_m,
        }
    }
}

#[async_trait]
impl TravelTool for Transportation {
    fn name(&self) -> ToolName {
        ToolName::GetTransportation
    }

    fn label(&self) -> &'static str {
        "Researching transportation"
    }

    fn input_schema(&self) -> Value {
        schema_of::<TransportationArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: TransportationArgs = parse_args(self.name(), args)?;
        let profile = reference::resolve(args.country_code.as_deref(), &args.destination);

        let (mut airports, stations) =
            match locate(&self.gateway, args.lat, args.lon, &args.destination).await {
                Some((lat, lon)) => (
                    self.gateway
                        .search_airports(lat, lon, self.airport_radius_m)
                        .await,
                    self.gateway
                        .search_transit_stops(lat, lon, self.transit_radius_m)
                        .await,
                ),
                None => (Vec::new(), Vec::new()),
            };

        if airports.is_empty() && stations.is_empty() && profile.is_none() {
            bail!("No transportation data for {}", args.destination);
        }

        // 国际机场在前
        airports.sort_by_key(|airport| !airport.international);

        let transit_description = profile
            .map(|p| p.transport.public_transport.to_string())
            .or_else(|| {
                if stations.is_empty() {
                    return None;
                }
                let names: Vec<&str> = stations.iter().take(3).map(|s| s.name.as_str()).collect();
                Some(format!(
                    "{} rail and bus stations near the centre, including {}",
                    stations.len(),
                    names.join(", ")
                ))
            });

        Ok(json!({
            "airports": airports
                .iter()
                .map(|a| json!({
                    "name": a.name,
                    "iata": a.iata,
                    "icao": a.icao,
                    "international": a.international,
                    "coordinates": coordinates(a.lat, a.lon),
                }))
                .collect::<Vec<_>>(),
            "publicTransit": {
                "description": transit_description,
                "stations": stations
                    .iter()
                    .map(|s| json!({
                        "name": s.name,
                        "kind": s.kind,
                        "operator": s.operator,
                        "coordinates": coordinates(s.lat, s.lon),
                    }))
                    .collect::<Vec<_>>(),
            },
            "taxis": profile.map(|p| p.transport.taxis),
            "rentals": profile.map(|p| p.transport.rentals),
            "walking": profile.map(|p| p.transport.walking),
            "intercityOptions": profile.map(|p| p.transport.intercity),
            "recommendation": profile.map(|p| p.transport.recommendation),
            "source": "overpass",
        }))
    }
}
