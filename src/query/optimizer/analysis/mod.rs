//! 计划分析模块
//!
//! 提供查询计划分析功能，支持优化决策：
//! - 指纹计算：计算计划节点与子树的规范化字节指纹
//! - 引用计数分析：识别出现多次的子计划
//!
//! # 使用示例
//!
//! ```rust
//! use plan_fingerprint::query::optimizer::analysis::ReferenceCountAnalyzer;
//! use plan_fingerprint::query::planner::plan::core::{NodeIdGenerator, PlanNodeEnum, TableDualNode};
//!
//! let id_gen = NodeIdGenerator::new();
//! let plan: PlanNodeEnum = TableDualNode::new(&id_gen, 1).into();
//! let analysis = ReferenceCountAnalyzer::new().analyze(&plan);
//! assert_eq!(analysis.repeated_count(), 0);
//! ```

pub mod fingerprint;
pub mod reference_count;

pub use fingerprint::{FingerprintCalculator, PlanFingerprint};
pub use reference_count::{
    ReferenceCountAnalysis, ReferenceCountAnalyzer, SubplanId, SubplanReferenceInfo,
};
