use chrono::{DateTime, Duration, Utc};
use md5::{Digest, Md5};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::RwLock;
use tracing::debug;

use crate::config::CacheConfig;

pub mod performance_monitor;
pub use performance_monitor::{CachePerformanceMonitor, CachePerformanceReport};

/// 缓存分类，每类对应独立的过期时间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    Geocoding,
    Country,
    Encyclopedia,
    Places,
    Weather,
    Climate,
    Currency,
    Advisory,
    Images,
    Search,
}

impl CacheCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCategory::Geocoding => "geocoding",
            CacheCategory::Country => "country",
            CacheCategory::Encyclopedia => "encyclopedia",
            CacheCategory::Places => "places",
            CacheCategory::Weather => "weather",
            CacheCategory::Climate => "climate",
            CacheCategory::Currency => "currency",
            CacheCategory::Advisory => "advisory",
            CacheCategory::Images => "images",
            CacheCategory::Search => "search",
        }
    }

    /// 该分类的缓存有效期（小时）
    pub fn ttl_hours(&self, config: &CacheConfig) -> u64 {
        match self {
            CacheCategory::Geocoding => config.geocoding_hours,
            CacheCategory::Country => config.country_hours,
            CacheCategory::Encyclopedia => config.encyclopedia_hours,
            CacheCategory::Places => config.places_hours,
            CacheCategory::Weather => config.weather_hours,
            CacheCategory::Climate => config.climate_hours,
            CacheCategory::Currency => config.currency_hours,
            CacheCategory::Advisory => config.advisory_hours,
            CacheCategory::Images => config.images_hours,
            CacheCategory::Search => config.search_hours,
        }
    }
}

impl Display for CacheCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 缓存条目
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub category: CacheCategory,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
    pub size: usize,
}

/// 进程内的上游响应缓存
///
/// 只缓存解析成功的JSON响应；错误响应不会写入。
pub struct CacheManager {
    config: CacheConfig,
    entries: RwLock<HashMap<String, CacheEntry>>,
    performance_monitor: CachePerformanceMonitor,
}

impl CacheManager {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            performance_monitor: CachePerformanceMonitor::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// 生成缓存键：分类名与请求URL拼接后的MD5
    pub fn hash_key(&self, category: CacheCategory, url: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(category.as_str().as_bytes());
        hasher.update(url.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn is_expired(&self, category: CacheCategory, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        let ttl = Duration::hours(category.ttl_hours(&self.config) as i64);
        now - entry.timestamp > ttl
    }

    /// 获取缓存
    pub fn get(&self, category: CacheCategory, url: &str) -> Option<Value> {
        if !self.config.enabled {
            return None;
        }

        let key = self.hash_key(category, url);
        let now = Utc::now();

        let lookup = match self.entries.read() {
            Ok(entries) => entries.get(&key).cloned(),
            Err(e) => {
                self.performance_monitor
                    .record_cache_error(category.as_str(), &format!("读锁失败: {}", e));
                return None;
            }
        };

        match lookup {
            Some(entry) if !self.is_expired(category, &entry, now) => {
                self.performance_monitor
                    .record_cache_hit(category.as_str(), entry.size);
                Some(entry.data)
            }
            Some(_) => {
                // 删除过期缓存
                if let Ok(mut entries) = self.entries.write() {
                    entries.remove(&key);
                }
                self.performance_monitor.record_cache_miss(category.as_str());
                None
            }
            None => {
                self.performance_monitor.record_cache_miss(category.as_str());
                None
            }
        }
    }

    /// 设置缓存
    pub fn set(&self, category: CacheCategory, url: &str, data: Value) {
        self.set_at(category, url, data, Utc::now());
    }

    fn set_at(&self, category: CacheCategory, url: &str, data: Value, timestamp: DateTime<Utc>) {
        if !self.config.enabled {
            return;
        }

        let key = self.hash_key(category, url);
        let size = data.to_string().len();

        match self.entries.write() {
            Ok(mut entries) => {
                // 写入时顺带清理各分类中已过期的条目
                let now = Utc::now();
                let before = entries.len();
                entries.retain(|_, entry| !self.is_expired(entry.category, entry, now));
                let swept = before - entries.len();
                if swept > 0 {
                    debug!("🧹 清理过期缓存 {} 条", swept);
                }

                entries.insert(
                    key,
                    CacheEntry {
                        category,
                        data,
                        timestamp,
                        size,
                    },
                );
                self.performance_monitor.record_cache_write(category.as_str());
            }
            Err(e) => {
                self.performance_monitor
                    .record_cache_error(category.as_str(), &format!("写锁失败: {}", e));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 清除全部条目
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// 生成性能报告
    pub fn generate_performance_report(&self) -> CachePerformanceReport {
        self.performance_monitor.generate_report(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager() -> CacheManager {
        CacheManager::new(CacheConfig::default())
    }

    #[test]
    fn test_hash_key_depends_on_category() {
        let cache = manager();
        let url = "https://example.org/a";

        assert_ne!(
            cache.hash_key(CacheCategory::Weather, url),
            cache.hash_key(CacheCategory::Climate, url)
        );
        assert_eq!(cache.hash_key(CacheCategory::Weather, url).len(), 32);
    }

    #[test]
    fn test_set_then_get_hits() {
        let cache = manager();
        cache.set(CacheCategory::Country, "u", json!({ "name": "Japan" }));

        assert_eq!(
            cache.get(CacheCategory::Country, "u"),
            Some(json!({ "name": "Japan" }))
        );
        assert!(cache.get(CacheCategory::Geocoding, "u").is_none());

        let report = cache.generate_performance_report();
        assert_eq!(report.cache_hits, 1);
        assert_eq!(report.cache_misses, 1);
        assert_eq!(report.cache_writes, 1);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = manager();
        let stale = Utc::now() - Duration::hours(2);
        cache.set_at(CacheCategory::Weather, "w", json!([1, 2]), stale);

        assert!(cache.get(CacheCategory::Weather, "w").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_longer_ttl_category_survives_same_age() {
        let cache = manager();
        let age = Utc::now() - Duration::hours(2);
        cache.set_at(CacheCategory::Country, "c", json!(1), age);

        assert_eq!(cache.get(CacheCategory::Country, "c"), Some(json!(1)));
    }

    #[test]
    fn test_write_sweeps_expired_entries() {
        let cache = manager();
        let stale = Utc::now() - Duration::hours(48);
        for i in 0..1000 {
            cache.set_at(CacheCategory::Weather, &format!("w{}", i), json!(i), stale);
        }
        cache.set_at(CacheCategory::Country, "still-fresh", json!("JP"), stale);

        cache.set(CacheCategory::Weather, "fresh", json!("sunny"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(CacheCategory::Weather, "fresh"), Some(json!("sunny")));
        assert_eq!(cache.get(CacheCategory::Country, "still-fresh"), Some(json!("JP")));
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = CacheManager::new(CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        });
        cache.set(CacheCategory::Images, "i", json!("x"));

        assert!(cache.get(CacheCategory::Images, "i").is_none());
        assert_eq!(cache.len(), 0);
    }
}
