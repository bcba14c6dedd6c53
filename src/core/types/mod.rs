// 核心类型系统模块
//
// 包含计划节点引用的表达式与操作符定义

pub mod expression;
pub mod operators;

// 重新导出常用类型
pub use expression::Expression;
pub use operators::{AggregateFunction, ScalarOperator};
