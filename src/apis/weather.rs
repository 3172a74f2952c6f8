use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::{ApiGateway, Latency, as_f64, as_text, build_url};
use crate::cache::CacheCategory;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub conditions: String,
}

/// WMO 天气代码的简要描述
pub fn describe_weather_code(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1..=3 => "Partly cloudy",
        45 | 48 => "Fog",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95..=99 => "Thunderstorm",
        _ => "Unknown",
    }
}

pub fn parse_forecast(value: &Value) -> Vec<DailyForecast> {
    let daily = &value["daily"];
    let Some(dates) = daily["time"].as_array() else {
        return Vec::new();
    };

    dates
        .iter()
        .enumerate()
        .filter_map(|(i, date)| {
            Some(DailyForecast {
                date: as_text(date)?,
                temp_max: as_f64(&daily["temperature_2m_max"][i]),
                temp_min: as_f64(&daily["temperature_2m_min"][i]),
                precipitation_mm: as_f64(&daily["precipitation_sum"][i]),
                conditions: daily["weathercode"][i]
                    .as_i64()
                    .map(describe_weather_code)
                    .unwrap_or("Unknown")
                    .to_string(),
            })
        })
        .collect()
}

/// 单月气候平均值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthClimate {
    pub month: u32,
    pub mean_temp: f64,
    pub precipitation_mm: f64,
}

/// 将逐日归档数据聚合为月度平均气温与月降水总量
pub fn aggregate_climate(value: &Value) -> Vec<MonthClimate> {
    let daily = &value["daily"];
    let Some(dates) = daily["time"].as_array() else {
        return Vec::new();
    };

    // (温度和, 温度样本数, 降水和)
    let mut buckets = [(0.0_f64, 0_u32, 0.0_f64); 12];
    for (i, date) in dates.iter().enumerate() {
        let Some(month) = date
            .as_str()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.month0() as usize)
        else {
            continue;
        };
        if let Some(temp) = as_f64(&daily["temperature_2m_mean"][i]) {
            buckets[month].0 += temp;
            buckets[month].1 += 1;
        }
        if let Some(rain) = as_f64(&daily["precipitation_sum"][i]) {
            buckets[month].2 += rain;
        }
    }

    buckets
        .iter()
        .enumerate()
        .filter(|(_, (_, samples, _))| *samples > 0)
        .map(|(month0, (sum, samples, rain))| MonthClimate {
            month: month0 as u32 + 1,
            mean_temp: (sum / *samples as f64 * 10.0).round() / 10.0,
            precipitation_mm: rain.round(),
        })
        .collect()
}

/// 一句话气候描述
pub fn describe_climate(months: &[MonthClimate]) -> Option<String> {
    let warmest = months
        .iter()
        .max_by(|a, b| a.mean_temp.total_cmp(&b.mean_temp))?;
    let coldest = months
        .iter()
        .min_by(|a, b| a.mean_temp.total_cmp(&b.mean_temp))?;
    let wettest = months
        .iter()
        .max_by(|a, b| a.precipitation_mm.total_cmp(&b.precipitation_mm))?;
    let annual_rain: f64 = months.iter().map(|m| m.precipitation_mm).sum();

    Some(format!(
        "Average temperatures range from {:.0}°C in {} to {:.0}°C in {}. {} is the wettest month; annual rainfall is about {:.0} mm.",
        coldest.mean_temp,
        MONTH_NAMES[coldest.month as usize - 1],
        warmest.mean_temp,
        MONTH_NAMES[warmest.month as usize - 1],
        MONTH_NAMES[wettest.month as usize - 1],
        annual_rain
    ))
}

/// 气温舒适（15-26°C）且降水较少的月份
pub fn best_months(months: &[MonthClimate]) -> Option<String> {
    if months.is_empty() {
        return None;
    }
    let median_rain = {
        let mut rain: Vec<f64> = months.iter().map(|m| m.precipitation_mm).collect();
        rain.sort_by(f64::total_cmp);
        rain[rain.len() / 2]
    };

    let picks: Vec<&str> = months
        .iter()
        .filter(|m| (15.0..=26.0).contains(&m.mean_temp) && m.precipitation_mm <= median_rain)
        .map(|m| MONTH_NAMES[m.month as usize - 1])
        .collect();

    if picks.is_empty() {
        None
    } else {
        Some(picks.join(", "))
    }
}

impl ApiGateway {
    /// 7天预报
    pub async fn weather_forecast(&self, lat: f64, lon: f64) -> Vec<DailyForecast> {
        let url = match build_url(
            &self.endpoints().open_meteo_forecast,
            &[],
            &[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode"
                        .to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
            ],
        ) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        match self
            .get_json(CacheCategory::Weather, url, Latency::Default)
            .await
        {
            Ok(value) => parse_forecast(&value),
            Err(e) => {
                warn!("⚠️ 天气预报获取失败 [{}, {}]: {}", lat, lon, e);
                Vec::new()
            }
        }
    }

    /// 上一自然年的逐月气候
    pub async fn climate_history(&self, lat: f64, lon: f64) -> Vec<MonthClimate> {
        let year = Utc::now().year() - 1;
        let url = match build_url(
            &self.endpoints().open_meteo_archive,
            &[],
            &[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("start_date", format!("{}-01-01", year)),
                ("end_date", format!("{}-12-31", year)),
                (
                    "daily",
                    "temperature_2m_mean,precipitation_sum,weathercode".to_string(),
                ),
                ("timezone", "auto".to_string()),
            ],
        ) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        match self
            .get_json(CacheCategory::Climate, url, Latency::Slow)
            .await
        {
            Ok(value) => aggregate_climate(&value),
            Err(e) => {
                warn!("⚠️ 历史气候获取失败 [{}, {}]: {}", lat, lon, e);
                Vec::new()
            }
        }
    }
}
