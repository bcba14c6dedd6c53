//! 聚合节点实现
//!
//! AggregationNode 按分组表达式对输入数据进行聚合

use super::plan_node_enum::PlanNodeEnum;
use crate::core::error::{check_list_len, PlannerResult};
use crate::core::Expression;
use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

define_plan_node! {
    pub struct AggregationNode {
        group_by: Vec<Expression>,
        agg_funcs: Vec<Expression>,
    }
    plan_type: Aggregation
    input: SingleInputNode
}

impl AggregationNode {
    /// 创建新的聚合节点
    pub fn new(
        id_gen: &NodeIdGenerator,
        input: PlanNodeEnum,
        group_by: Vec<Expression>,
        agg_funcs: Vec<Expression>,
    ) -> PlannerResult<Self> {
        check_list_len("Aggregation", "group_by", group_by.len())?;
        check_list_len("Aggregation", "agg_funcs", agg_funcs.len())?;
        Ok(Self {
            id: id_gen.next_id(),
            block_offset: 0,
            input: Box::new(input),
            group_by,
            agg_funcs,
        })
    }

    /// 获取分组表达式
    pub fn group_by(&self) -> &[Expression] {
        &self.group_by
    }

    /// 获取聚合函数列表
    pub fn agg_funcs(&self) -> &[Expression] {
        &self.agg_funcs
    }
}
