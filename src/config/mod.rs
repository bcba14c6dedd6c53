use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::ConfigError;

/// 应用配置
///
/// 缺失的段落或字段使用默认值。
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub fingerprint: FingerprintConfig,
    pub plan_cache: PlanCacheSettings,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// 是否将 warn 及以上级别同时输出到 stderr
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "plan_fingerprint".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            console: false,
        }
    }
}

/// 指纹计算配置
///
/// 两个 size hint 用于预分配输出缓冲区，不影响指纹内容。
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FingerprintConfig {
    /// 投影表达式指纹的平均字节数（列引用通常为 9 字节）
    pub projection_expr_size_hint: usize,
    /// 过滤条件指纹的平均字节数（标量函数通常超过 20 字节）
    pub selection_cond_size_hint: usize,
    /// 批量计算时启用并行的最小计划数
    pub parallel_batch_threshold: usize,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            projection_expr_size_hint: 10,
            selection_cond_size_hint: 25,
            parallel_batch_threshold: 16,
        }
    }
}

/// 计划缓存配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlanCacheSettings {
    pub max_entries: usize,
    pub ttl_seconds: u64,
    pub enable_stats: bool,
}

impl Default for PlanCacheSettings {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl_seconds: 3600, // 1小时
            enable_stats: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plan_cache.max_entries == 0 {
            return Err(ConfigError::InvalidValue {
                key: "plan_cache.max_entries",
                reason: "必须大于0".to_string(),
            });
        }
        if self.fingerprint.parallel_batch_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                key: "fingerprint.parallel_batch_threshold",
                reason: "必须大于0".to_string(),
            });
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "log.level",
                reason: "不能为空".to_string(),
            });
        }
        Ok(())
    }
}
