//! 投影节点实现
//!
//! ProjectionNode 按顺序计算输出列，表达式位置决定输出列位置

use super::plan_node_enum::PlanNodeEnum;
use crate::core::error::{check_list_len, PlannerResult};
use crate::core::Expression;
use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

define_plan_node! {
    pub struct ProjectionNode {
        exprs: Vec<Expression>,
    }
    plan_type: Projection
    input: SingleInputNode
}

impl ProjectionNode {
    /// 创建新的投影节点
    pub fn new(
        id_gen: &NodeIdGenerator,
        input: PlanNodeEnum,
        exprs: Vec<Expression>,
    ) -> PlannerResult<Self> {
        check_list_len("Projection", "exprs", exprs.len())?;
        Ok(Self {
            id: id_gen.next_id(),
            block_offset: 0,
            input: Box::new(input),
            exprs,
        })
    }

    /// 获取投影表达式
    pub fn exprs(&self) -> &[Expression] {
        &self.exprs
    }

    /// 替换投影表达式
    pub fn set_exprs(&mut self, exprs: Vec<Expression>) -> PlannerResult<()> {
        check_list_len("Projection", "exprs", exprs.len())?;
        self.exprs = exprs;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::planner::plan::core::nodes::plan_node_traits::SingleInputNode;
    use crate::query::planner::plan::core::TableDualNode;

    #[test]
    fn test_project_node_creation() {
        let id_gen = NodeIdGenerator::new();
        let input = PlanNodeEnum::TableDual(TableDualNode::new(&id_gen, 1));
        let exprs = vec![Expression::column(1, "a"), Expression::column(2, "b")];

        let node = ProjectionNode::new(&id_gen, input, exprs)
            .expect("Projection node should be created successfully");

        assert_eq!(node.type_name(), "ProjectionNode");
        assert_eq!(node.exprs().len(), 2);
        assert_eq!(node.input().name(), "TableDualNode");
    }

    #[test]
    fn test_set_exprs() {
        let id_gen = NodeIdGenerator::new();
        let input = PlanNodeEnum::TableDual(TableDualNode::new(&id_gen, 1));
        let mut node = ProjectionNode::new(&id_gen, input, vec![])
            .expect("Projection node should be created successfully");

        node.set_exprs(vec![Expression::constant(1i64)])
            .expect("short list should be accepted");
        assert!(node.exprs()[0].is_constant());
    }
}
