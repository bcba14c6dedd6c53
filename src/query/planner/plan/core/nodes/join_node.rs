//! 连接节点实现
//!
//! JoinNode 按连接类型合并左右两个输入

use std::fmt;

use super::plan_node_enum::PlanNodeEnum;
use crate::core::error::{check_list_len, PlannerResult};
use crate::core::Expression;
use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

/// 连接类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    Semi,
    AntiSemi,
    Cross,
}

impl JoinType {
    pub fn name(&self) -> &'static str {
        match self {
            JoinType::Inner => "inner join",
            JoinType::LeftOuter => "left outer join",
            JoinType::RightOuter => "right outer join",
            JoinType::Semi => "semi join",
            JoinType::AntiSemi => "anti semi join",
            JoinType::Cross => "cross join",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

define_plan_node! {
    pub struct JoinNode {
        join_type: JoinType,
        equal_conditions: Vec<Expression>,
        other_conditions: Vec<Expression>,
    }
    plan_type: Join
    input: BinaryInputNode
}

impl JoinNode {
    /// 创建新的连接节点
    pub fn new(
        id_gen: &NodeIdGenerator,
        left: PlanNodeEnum,
        right: PlanNodeEnum,
        join_type: JoinType,
        equal_conditions: Vec<Expression>,
        other_conditions: Vec<Expression>,
    ) -> PlannerResult<Self> {
        check_list_len("Join", "equal_conditions", equal_conditions.len())?;
        check_list_len("Join", "other_conditions", other_conditions.len())?;
        Ok(Self {
            id: id_gen.next_id(),
            block_offset: 0,
            left: Box::new(left),
            right: Box::new(right),
            join_type,
            equal_conditions,
            other_conditions,
        })
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    /// 等值连接条件
    pub fn equal_conditions(&self) -> &[Expression] {
        &self.equal_conditions
    }

    /// 非等值连接条件
    pub fn other_conditions(&self) -> &[Expression] {
        &self.other_conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScalarOperator;
    use crate::query::planner::plan::core::nodes::plan_node_traits::BinaryInputNode;
    use crate::query::planner::plan::core::{DataSourceNode, TableDualNode};

    #[test]
    fn test_join_node_creation() {
        let id_gen = NodeIdGenerator::new();
        let left = DataSourceNode::new(&id_gen, "t1", vec![Expression::column(1, "t1.a")])
            .expect("DataSource node should be created successfully");
        let right = DataSourceNode::new(&id_gen, "t2", vec![Expression::column(2, "t2.a")])
            .expect("DataSource node should be created successfully");
        let cond = Expression::binary(
            ScalarOperator::Eq,
            Expression::column(1, "t1.a"),
            Expression::column(2, "t2.a"),
        );

        let mut node = JoinNode::new(
            &id_gen,
            PlanNodeEnum::DataSource(left),
            PlanNodeEnum::DataSource(right),
            JoinType::Inner,
            vec![cond],
            vec![],
        )
        .expect("Join node should be created successfully");

        assert_eq!(node.type_name(), "JoinNode");
        assert_eq!(node.join_type().to_string(), "inner join");
        assert_eq!(node.left_input().name(), "DataSourceNode");
        assert_eq!(node.equal_conditions().len(), 1);

        node.set_right_input(PlanNodeEnum::TableDual(TableDualNode::new(&id_gen, 1)));
        assert_eq!(node.right_input().name(), "TableDualNode");
    }
}
