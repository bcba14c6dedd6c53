//! Value 模块 - 常量值类型
//!
//! 表达式中的字面量使用 [`Value`] 表示，并提供确定性的指纹编码：
//! - 核心类型定义 (`types.rs`)
//! - 指纹编码 (`encoding.rs`)

pub mod encoding;
pub mod types;

pub use types::*;
