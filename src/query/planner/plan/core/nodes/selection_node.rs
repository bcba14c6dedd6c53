//! 选择节点实现
//!
//! SelectionNode 用合取条件过滤输入数据流，条件之间的顺序没有语义

use super::plan_node_enum::PlanNodeEnum;
use crate::core::error::{check_list_len, PlannerResult};
use crate::core::Expression;
use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

define_plan_node! {
    pub struct SelectionNode {
        conditions: Vec<Expression>,
    }
    plan_type: Selection
    input: SingleInputNode
}

impl SelectionNode {
    /// 创建新的选择节点
    pub fn new(
        id_gen: &NodeIdGenerator,
        input: PlanNodeEnum,
        conditions: Vec<Expression>,
    ) -> PlannerResult<Self> {
        check_list_len("Selection", "conditions", conditions.len())?;
        Ok(Self {
            id: id_gen.next_id(),
            block_offset: 0,
            input: Box::new(input),
            conditions,
        })
    }

    /// 获取过滤条件
    pub fn conditions(&self) -> &[Expression] {
        &self.conditions
    }

    /// 设置过滤条件
    pub fn set_conditions(&mut self, conditions: Vec<Expression>) -> PlannerResult<()> {
        check_list_len("Selection", "conditions", conditions.len())?;
        self.conditions = conditions;
        Ok(())
    }

    /// 追加一个合取条件
    pub fn add_condition(&mut self, condition: Expression) -> PlannerResult<()> {
        check_list_len("Selection", "conditions", self.conditions.len() + 1)?;
        self.conditions.push(condition);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScalarOperator;
    use crate::query::planner::plan::core::TableDualNode;

    #[test]
    fn test_selection_node_creation() {
        let id_gen = NodeIdGenerator::new();
        let input = PlanNodeEnum::TableDual(TableDualNode::new(&id_gen, 1));
        let condition = Expression::binary(
            ScalarOperator::Lt,
            Expression::column(1, "a"),
            Expression::constant(10i64),
        );

        let mut node = SelectionNode::new(&id_gen, input, vec![condition])
            .expect("Selection node should be created successfully");
        assert_eq!(node.type_name(), "SelectionNode");
        assert_eq!(node.conditions().len(), 1);

        node.add_condition(Expression::constant(true))
            .expect("condition should be appended");
        assert_eq!(node.conditions().len(), 2);

        node.set_conditions(vec![]).expect("empty list is valid");
        assert!(node.conditions().is_empty());
    }
}
