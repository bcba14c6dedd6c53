//! 优化决策模块
//!
//! 以计划指纹为键缓存优化结果，模式版本变化时按版本失效。
//!
//! ## 使用示例
//!
//! ```rust
//! use plan_fingerprint::query::optimizer::analysis::FingerprintCalculator;
//! use plan_fingerprint::query::optimizer::decision::{PlanCache, PlanCacheKey};
//! use plan_fingerprint::query::planner::plan::core::{NodeIdGenerator, PlanNodeEnum, TableDualNode};
//!
//! let cache: PlanCache<String> = PlanCache::with_default_config().unwrap();
//! let id_gen = NodeIdGenerator::new();
//! let plan: PlanNodeEnum = TableDualNode::new(&id_gen, 1).into();
//! let key = PlanCacheKey::from_plan(&FingerprintCalculator::new(), &plan, 1);
//!
//! let physical = cache
//!     .get_or_compute(key, || Ok("TableDual(1)".to_string()))
//!     .unwrap();
//! assert_eq!(physical, "TableDual(1)");
//! ```

pub mod cache;

pub use cache::{CachedPlan, PlanCache, PlanCacheConfig, PlanCacheKey, PlanCacheStats};
