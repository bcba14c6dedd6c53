//! Plan fingerprinting for a relational query optimizer
//!
//! 为逻辑计划节点生成规范化的字节指纹：语义等价的节点得到相同的字节，
//! 可交换的子结构在编码前排序。指纹用于识别公共子计划和作为计划缓存的键。

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use crate::config::Config;
pub use crate::core::{Expression, Fingerprint, OptimizerError, OptimizerResult, Value};
pub use crate::query::optimizer::{
    FingerprintCalculator, PlanCache, PlanFingerprint, ReferenceCountAnalyzer,
};
pub use crate::query::planner::plan::core::{NodeIdGenerator, PlanNodeEnum, PlanType};

use std::path::Path;

/// 加载配置文件并初始化日志系统
///
/// 进程内只能调用一次，日志系统不支持重复初始化。
pub fn init<P: AsRef<Path>>(config_path: P) -> OptimizerResult<Config> {
    let config = Config::load(config_path)?;
    utils::logging::init(&config.log)?;
    log::info!(
        "计划指纹模块初始化完成, plan_cache.max_entries={}",
        config.plan_cache.max_entries
    );
    Ok(config)
}
