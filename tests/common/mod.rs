//! 集成测试共享工具模块
//!
//! 提供构造计划和表达式的辅助函数，供所有集成测试使用

#![allow(dead_code)]

use plan_fingerprint::core::{Expression, ScalarOperator};
use plan_fingerprint::query::planner::plan::core::{
    JoinNode, JoinType, LimitNode, NodeIdGenerator, PlanNodeEnum, ProjectionNode, SelectionNode,
    TableDualNode,
};

/// 列引用
pub fn col(id: i64) -> Expression {
    Expression::column(id, format!("c{}", id))
}

/// 整数常量
pub fn int(v: i64) -> Expression {
    Expression::constant(v)
}

pub fn lt(left: Expression, right: Expression) -> Expression {
    Expression::binary(ScalarOperator::Lt, left, right)
}

pub fn eq(left: Expression, right: Expression) -> Expression {
    Expression::binary(ScalarOperator::Eq, left, right)
}

/// 虚表
pub fn dual(id_gen: &NodeIdGenerator, rows: u32) -> PlanNodeEnum {
    TableDualNode::new(id_gen, rows).into()
}

/// 在单行虚表上构造选择节点
pub fn selection(id_gen: &NodeIdGenerator, conditions: Vec<Expression>, offset: u32) -> PlanNodeEnum {
    SelectionNode::new(id_gen, dual(id_gen, 1), conditions)
        .expect("Selection node should be created successfully")
        .with_block_offset(offset)
        .into()
}

/// 在单行虚表上构造投影节点
pub fn projection(id_gen: &NodeIdGenerator, exprs: Vec<Expression>, offset: u32) -> PlanNodeEnum {
    ProjectionNode::new(id_gen, dual(id_gen, 1), exprs)
        .expect("Projection node should be created successfully")
        .with_block_offset(offset)
        .into()
}

/// Limit(Selection(TableDual))
pub fn limited_selection(id_gen: &NodeIdGenerator) -> PlanNodeEnum {
    let sel = selection(id_gen, vec![lt(col(1), int(100)), eq(col(2), col(3))], 1);
    LimitNode::new(id_gen, sel, 0, 10).into()
}

/// 交叉连接两个输入
pub fn cross_join(id_gen: &NodeIdGenerator, left: PlanNodeEnum, right: PlanNodeEnum) -> PlanNodeEnum {
    JoinNode::new(id_gen, left, right, JoinType::Cross, vec![], vec![])
        .expect("Join node should be created successfully")
        .into()
}
