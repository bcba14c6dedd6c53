//! 计划缓存实现
//!
//! 以计划子树指纹为键的 LRU 缓存，支持模式版本失效、TTL 过期和统计。
//! 缓存只在进程内有效，指纹不跨进程稳定。

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use log::debug;
use lru::LruCache;
use parking_lot::Mutex;

use crate::config::PlanCacheSettings;
use crate::core::error::PlanCacheError;
use crate::query::optimizer::analysis::{FingerprintCalculator, PlanFingerprint};
use crate::query::planner::plan::core::nodes::PlanNodeEnum;

/// 计划缓存键
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct PlanCacheKey {
    /// 计划子树指纹
    fingerprint: PlanFingerprint,
    /// 模式版本
    schema_version: u64,
}

impl PlanCacheKey {
    pub fn new(fingerprint: PlanFingerprint, schema_version: u64) -> Self {
        Self {
            fingerprint,
            schema_version,
        }
    }

    /// 由计划子树构建缓存键
    pub fn from_plan(
        calculator: &FingerprintCalculator,
        plan: &PlanNodeEnum,
        schema_version: u64,
    ) -> Self {
        Self::new(calculator.calculate_subtree_fingerprint(plan), schema_version)
    }

    pub fn fingerprint(&self) -> &PlanFingerprint {
        &self.fingerprint
    }

    pub fn schema_version(&self) -> u64 {
        self.schema_version
    }
}

/// 缓存项
#[derive(Debug, Clone)]
pub struct CachedPlan<V> {
    pub value: V,
    /// 创建时间
    pub created_at: Instant,
    /// 最后访问时间
    pub last_accessed: Instant,
    /// 访问次数
    pub access_count: u64,
}

impl<V> CachedPlan<V> {
    pub fn new(value: V) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            last_accessed: now,
            access_count: 1,
        }
    }

    /// 记录访问
    pub fn record_access(&mut self) {
        self.last_accessed = Instant::now();
        self.access_count += 1;
    }

    /// 检查是否过期
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// 计划缓存统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCacheStats {
    /// 命中次数
    pub hits: u64,
    /// 未命中次数
    pub misses: u64,
    /// 插入次数
    pub inserts: u64,
    /// 淘汰次数
    pub evictions: u64,
    /// 过期次数
    pub expirations: u64,
}

impl PlanCacheStats {
    /// 总查询次数
    pub fn total_queries(&self) -> u64 {
        self.hits + self.misses
    }

    /// 命中率
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_queries();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// 计划缓存配置
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCacheConfig {
    /// 最大缓存条目数
    pub max_entries: usize,
    /// 条目最大存活时间
    pub ttl: Duration,
    /// 启用统计
    pub enable_stats: bool,
}

impl Default for PlanCacheConfig {
    fn default() -> Self {
        PlanCacheSettings::default().into()
    }
}

impl From<PlanCacheSettings> for PlanCacheConfig {
    fn from(settings: PlanCacheSettings) -> Self {
        Self {
            max_entries: settings.max_entries,
            ttl: Duration::from_secs(settings.ttl_seconds),
            enable_stats: settings.enable_stats,
        }
    }
}

/// 计划缓存
#[derive(Debug)]
pub struct PlanCache<V> {
    /// LRU 缓存
    cache: Mutex<LruCache<PlanCacheKey, CachedPlan<V>>>,
    /// 统计信息
    stats: Mutex<PlanCacheStats>,
    config: PlanCacheConfig,
}

impl<V: Clone> PlanCache<V> {
    /// 创建新的计划缓存
    pub fn new(config: PlanCacheConfig) -> Result<Self, PlanCacheError> {
        let cache_size = NonZeroUsize::new(config.max_entries).ok_or(PlanCacheError::ZeroCapacity)?;

        Ok(Self {
            cache: Mutex::new(LruCache::new(cache_size)),
            stats: Mutex::new(PlanCacheStats::default()),
            config,
        })
    }

    /// 使用默认配置创建
    pub fn with_default_config() -> Result<Self, PlanCacheError> {
        Self::new(PlanCacheConfig::default())
    }

    pub fn config(&self) -> &PlanCacheConfig {
        &self.config
    }

    /// 获取缓存值
    ///
    /// 过期的条目在读取时移除并计为一次过期和一次未命中。
    pub fn get(&self, key: &PlanCacheKey) -> Option<V> {
        let mut cache = self.cache.lock();
        let ttl = self.config.ttl;

        let (value, expired) = match cache.get_mut(key) {
            Some(cached) if cached.is_expired(ttl) => (None, true),
            Some(cached) => {
                cached.record_access();
                (Some(cached.value.clone()), false)
            }
            None => (None, false),
        };
        if expired {
            cache.pop(key);
        }
        drop(cache);

        match value {
            Some(value) => {
                self.record_hit();
                Some(value)
            }
            None => {
                if expired {
                    self.record_expiration();
                }
                self.record_miss();
                None
            }
        }
    }

    /// 插入缓存值
    pub fn insert(&self, key: PlanCacheKey, value: V) {
        let mut cache = self.cache.lock();
        let evicted = cache.push(key.clone(), CachedPlan::new(value));
        drop(cache);

        // push 在更新已有键时返回旧值，只有不同键被挤出才算淘汰
        if let Some((evicted_key, _)) = evicted {
            if evicted_key != key {
                debug!("计划缓存淘汰条目, schema_version={}", evicted_key.schema_version);
                self.record_eviction();
            }
        }
        self.record_insert();
    }

    /// 获取或计算缓存值
    pub fn get_or_compute<F>(&self, key: PlanCacheKey, compute: F) -> Result<V, PlanCacheError>
    where
        F: FnOnce() -> Result<V, PlanCacheError>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = compute()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// 移除缓存项
    pub fn remove(&self, key: &PlanCacheKey) -> Option<V> {
        let mut cache = self.cache.lock();
        cache.pop(key).map(|cached| cached.value)
    }

    /// 清空缓存和统计
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
        drop(cache);

        let mut stats = self.stats.lock();
        *stats = PlanCacheStats::default();
    }

    /// 移除模式版本不等于当前版本的所有条目，返回移除数量
    pub fn invalidate_schema_version(&self, current_schema_version: u64) -> usize {
        let mut cache = self.cache.lock();
        let keys_to_remove: Vec<_> = cache
            .iter()
            .filter(|(key, _)| key.schema_version != current_schema_version)
            .map(|(key, _)| key.clone())
            .collect();

        let count = keys_to_remove.len();
        for key in keys_to_remove {
            cache.pop(&key);
        }

        if count > 0 {
            debug!(
                "计划缓存失效 {} 个条目, 当前 schema_version={}",
                count, current_schema_version
            );
        }
        count
    }

    /// 获取缓存大小
    pub fn size(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// 获取统计信息
    pub fn stats(&self) -> PlanCacheStats {
        self.stats.lock().clone()
    }

    // ==================== 私有方法 ====================

    fn update_stats(&self, f: impl FnOnce(&mut PlanCacheStats)) {
        if self.config.enable_stats {
            let mut stats = self.stats.lock();
            f(&mut stats);
        }
    }

    fn record_hit(&self) {
        self.update_stats(|s| s.hits += 1);
    }

    fn record_miss(&self) {
        self.update_stats(|s| s.misses += 1);
    }

    fn record_insert(&self) {
        self.update_stats(|s| s.inserts += 1);
    }

    fn record_eviction(&self) {
        self.update_stats(|s| s.evictions += 1);
    }

    fn record_expiration(&self) {
        self.update_stats(|s| s.expirations += 1);
    }
}
