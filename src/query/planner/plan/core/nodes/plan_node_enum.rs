//! PlanNode 枚举定义
//!
//! 逻辑计划节点的封闭集合。所有按节点类型分派的逻辑都通过对该枚举的 `match` 完成。

use super::plan_node_traits::{BinaryInputNode, PlanNode, SingleInputNode};
use super::plan_type::PlanType;
use crate::query::optimizer::analysis::fingerprint::{FingerprintCalculator, PlanFingerprint};
use crate::query::planner::plan::core::NodeIdGenerator;

pub use super::aggregate_node::AggregationNode;
pub use super::data_source_node::DataSourceNode;
pub use super::join_node::{JoinNode, JoinType};
pub use super::project_node::ProjectionNode;
pub use super::selection_node::SelectionNode;
pub use super::sort_node::{LimitNode, OrderDirection, SortItem, SortNode};
pub use super::table_dual_node::TableDualNode;

/// PlanNode 枚举，包含所有可能的节点类型
///
/// 这个枚举避免了动态分发的性能开销
#[derive(Debug)]
pub enum PlanNodeEnum {
    /// 数据源节点
    DataSource(DataSourceNode),
    /// 虚表节点
    TableDual(TableDualNode),
    /// 投影节点
    Projection(ProjectionNode),
    /// 选择节点
    Selection(SelectionNode),
    /// 限制节点
    Limit(LimitNode),
    /// 排序节点
    Sort(SortNode),
    /// 聚合节点
    Aggregation(AggregationNode),
    /// 连接节点
    Join(JoinNode),
}

/// 对每个变体调用同名方法
macro_rules! dispatch {
    ($self:expr, $node:ident => $body:expr) => {
        match $self {
            PlanNodeEnum::DataSource($node) => $body,
            PlanNodeEnum::TableDual($node) => $body,
            PlanNodeEnum::Projection($node) => $body,
            PlanNodeEnum::Selection($node) => $body,
            PlanNodeEnum::Limit($node) => $body,
            PlanNodeEnum::Sort($node) => $body,
            PlanNodeEnum::Aggregation($node) => $body,
            PlanNodeEnum::Join($node) => $body,
        }
    };
}

impl PlanNodeEnum {
    /// 获取节点ID
    pub fn id(&self) -> i64 {
        dispatch!(self, node => PlanNode::id(node))
    }

    /// 获取节点类型名称
    pub fn name(&self) -> &'static str {
        dispatch!(self, node => node.type_name())
    }

    pub fn plan_type(&self) -> PlanType {
        dispatch!(self, node => node.plan_type())
    }

    /// 获取位置标记
    pub fn block_offset(&self) -> u32 {
        dispatch!(self, node => PlanNode::block_offset(node))
    }

    pub fn set_block_offset(&mut self, offset: u32) {
        dispatch!(self, node => PlanNode::set_block_offset(node, offset))
    }

    /// 获取子节点，按位置顺序
    pub fn children(&self) -> Vec<&PlanNodeEnum> {
        match self {
            PlanNodeEnum::DataSource(_) | PlanNodeEnum::TableDual(_) => Vec::new(),
            PlanNodeEnum::Projection(node) => vec![node.input()],
            PlanNodeEnum::Selection(node) => vec![node.input()],
            PlanNodeEnum::Limit(node) => vec![node.input()],
            PlanNodeEnum::Sort(node) => vec![node.input()],
            PlanNodeEnum::Aggregation(node) => vec![node.input()],
            PlanNodeEnum::Join(node) => vec![node.left_input(), node.right_input()],
        }
    }

    /// 子树中的节点总数（包括自身）
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(PlanNodeEnum::node_count)
            .sum::<usize>()
    }

    /// 深拷贝整棵子树，每个节点从生成器领取新ID
    pub fn clone_with_new_ids(&self, id_gen: &NodeIdGenerator) -> PlanNodeEnum {
        match self {
            PlanNodeEnum::DataSource(node) => {
                PlanNodeEnum::DataSource(node.clone_with_new_ids(id_gen))
            }
            PlanNodeEnum::TableDual(node) => PlanNodeEnum::TableDual(node.clone_with_new_ids(id_gen)),
            PlanNodeEnum::Projection(node) => {
                PlanNodeEnum::Projection(node.clone_with_new_ids(id_gen))
            }
            PlanNodeEnum::Selection(node) => PlanNodeEnum::Selection(node.clone_with_new_ids(id_gen)),
            PlanNodeEnum::Limit(node) => PlanNodeEnum::Limit(node.clone_with_new_ids(id_gen)),
            PlanNodeEnum::Sort(node) => PlanNodeEnum::Sort(node.clone_with_new_ids(id_gen)),
            PlanNodeEnum::Aggregation(node) => {
                PlanNodeEnum::Aggregation(node.clone_with_new_ids(id_gen))
            }
            PlanNodeEnum::Join(node) => PlanNodeEnum::Join(node.clone_with_new_ids(id_gen)),
        }
    }

    /// 使用默认配置计算节点指纹
    pub fn fingerprint(&self) -> PlanFingerprint {
        FingerprintCalculator::new().calculate_fingerprint(self)
    }

    /// 使用默认配置计算子树指纹
    pub fn subtree_fingerprint(&self) -> PlanFingerprint {
        FingerprintCalculator::new().calculate_subtree_fingerprint(self)
    }

    pub fn is_selection(&self) -> bool {
        matches!(self, PlanNodeEnum::Selection(_))
    }

    pub fn is_projection(&self) -> bool {
        matches!(self, PlanNodeEnum::Projection(_))
    }

    pub fn is_limit(&self) -> bool {
        matches!(self, PlanNodeEnum::Limit(_))
    }

    pub fn is_table_dual(&self) -> bool {
        matches!(self, PlanNodeEnum::TableDual(_))
    }

    pub fn as_selection(&self) -> Option<&SelectionNode> {
        match self {
            PlanNodeEnum::Selection(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_selection_mut(&mut self) -> Option<&mut SelectionNode> {
        match self {
            PlanNodeEnum::Selection(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_projection(&self) -> Option<&ProjectionNode> {
        match self {
            PlanNodeEnum::Projection(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_projection_mut(&mut self) -> Option<&mut ProjectionNode> {
        match self {
            PlanNodeEnum::Projection(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_limit(&self) -> Option<&LimitNode> {
        match self {
            PlanNodeEnum::Limit(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_limit_mut(&mut self) -> Option<&mut LimitNode> {
        match self {
            PlanNodeEnum::Limit(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_table_dual(&self) -> Option<&TableDualNode> {
        match self {
            PlanNodeEnum::TableDual(node) => Some(node),
            _ => None,
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl From<$node> for PlanNodeEnum {
                fn from(node: $node) -> Self {
                    PlanNodeEnum::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    DataSource(DataSourceNode),
    TableDual(TableDualNode),
    Projection(ProjectionNode),
    Selection(SelectionNode),
    Limit(LimitNode),
    Sort(SortNode),
    Aggregation(AggregationNode),
    Join(JoinNode),
}
