//! 逻辑计划
//!
//! 计划节点、节点类型编码与节点ID分配

pub mod core;

pub use self::core::*;
