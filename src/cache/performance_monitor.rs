use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::{debug, warn};

/// 缓存性能监控器
#[derive(Clone)]
pub struct CachePerformanceMonitor {
    metrics: Arc<CacheMetrics>,
}

/// 缓存指标
#[derive(Default)]
pub struct CacheMetrics {
    /// 缓存命中次数
    pub cache_hits: AtomicUsize,
    /// 缓存未命中次数
    pub cache_misses: AtomicUsize,
    /// 缓存写入次数
    pub cache_writes: AtomicUsize,
    /// 缓存错误次数
    pub cache_errors: AtomicUsize,
    /// 命中时省下的上游响应字节数
    pub bytes_saved: AtomicUsize,
    /// 分类统计数据
    pub category_metrics: std::sync::RwLock<HashMap<String, CategoryMetrics>>,
}

/// 分类指标数据
#[derive(Default)]
pub struct CategoryMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub writes: AtomicU64,
}

/// 缓存性能报告
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachePerformanceReport {
    /// 缓存命中率
    pub hit_rate: f64,
    /// 总查询次数
    pub total_operations: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub cache_writes: usize,
    pub cache_errors: usize,
    pub bytes_saved: usize,
    /// 当前驻留条目数
    pub entries: usize,
    /// 分类统计
    pub category_stats: HashMap<String, CategoryPerformanceStats>,
}

/// 分类性能统计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformanceStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub hit_rate: f64,
}

impl CachePerformanceMonitor {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    fn with_category(&self, category: &str, update: impl FnOnce(&CategoryMetrics)) {
        if let Ok(mut category_map) = self.metrics.category_metrics.write() {
            let category_metrics = category_map.entry(category.to_string()).or_default();
            update(category_metrics);
        }
    }

    /// 记录缓存命中
    pub fn record_cache_hit(&self, category: &str, bytes: usize) {
        self.metrics.cache_hits.fetch_add(1, Ordering::Relaxed);
        self.metrics.bytes_saved.fetch_add(bytes, Ordering::Relaxed);
        self.with_category(category, |m| {
            m.hits.fetch_add(1, Ordering::Relaxed);
        });

        debug!("💰 缓存命中 [{}] - 省去约 {} 字节的上游请求", category, bytes);
    }

    /// 记录缓存未命中
    pub fn record_cache_miss(&self, category: &str) {
        self.metrics.cache_misses.fetch_add(1, Ordering::Relaxed);
        self.with_category(category, |m| {
            m.misses.fetch_add(1, Ordering::Relaxed);
        });

        debug!("⌛ 缓存未命中 [{}] - 需要请求上游", category);
    }

    /// 记录缓存写入
    pub fn record_cache_write(&self, category: &str) {
        self.metrics.cache_writes.fetch_add(1, Ordering::Relaxed);
        self.with_category(category, |m| {
            m.writes.fetch_add(1, Ordering::Relaxed);
        });

        debug!("💾 缓存写入 [{}]", category);
    }

    /// 记录缓存错误
    pub fn record_cache_error(&self, category: &str, error: &str) {
        self.metrics.cache_errors.fetch_add(1, Ordering::Relaxed);
        warn!("❌ 缓存错误 [{}]: {}", category, error);
    }

    /// 生成性能报告
    pub fn generate_report(&self, entries: usize) -> CachePerformanceReport {
        let hits = self.metrics.cache_hits.load(Ordering::Relaxed);
        let misses = self.metrics.cache_misses.load(Ordering::Relaxed);
        let total_operations = hits + misses;

        let hit_rate = if total_operations > 0 {
            hits as f64 / total_operations as f64
        } else {
            0.0
        };

        let category_stats = if let Ok(category_map) = self.metrics.category_metrics.read() {
            category_map
                .iter()
                .map(|(category, metrics)| {
                    let cat_hits = metrics.hits.load(Ordering::Relaxed);
                    let cat_misses = metrics.misses.load(Ordering::Relaxed);
                    let cat_hit_rate = if cat_hits + cat_misses > 0 {
                        cat_hits as f64 / (cat_hits + cat_misses) as f64
                    } else {
                        0.0
                    };

                    (
                        category.clone(),
                        CategoryPerformanceStats {
                            hits: cat_hits,
                            misses: cat_misses,
                            writes: metrics.writes.load(Ordering::Relaxed),
                            hit_rate: cat_hit_rate,
                        },
                    )
                })
                .collect()
        } else {
            HashMap::new()
        };

        CachePerformanceReport {
            hit_rate,
            total_operations,
            cache_hits: hits,
            cache_misses: misses,
            cache_writes: self.metrics.cache_writes.load(Ordering::Relaxed),
            cache_errors: self.metrics.cache_errors.load(Ordering::Relaxed),
            bytes_saved: self.metrics.bytes_saved.load(Ordering::Relaxed),
            entries,
            category_stats,
        }
    }
}

impl Default for CachePerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
