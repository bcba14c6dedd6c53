//! 查询规划器
//!
//! 包含逻辑计划节点的定义

pub mod plan;

pub use plan::core::{NodeIdGenerator, PlanNodeEnum, PlanType};
