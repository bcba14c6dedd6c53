//! 查询优化器模块
//!
//! ## 模块结构
//!
//! - `analysis` - 计划指纹与引用计数分析
//! - `decision` - 以指纹为键的计划缓存

pub mod analysis;
pub mod decision;

pub use analysis::{
    FingerprintCalculator, PlanFingerprint, ReferenceCountAnalysis, ReferenceCountAnalyzer,
};
pub use decision::{PlanCache, PlanCacheConfig, PlanCacheKey, PlanCacheStats};
