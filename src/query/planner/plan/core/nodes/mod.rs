pub mod macros;

pub mod aggregate_node;
pub mod data_source_node;
pub mod join_node;
pub mod plan_node_enum;
pub mod plan_node_traits;
pub mod plan_type;
pub mod project_node;
pub mod selection_node;
pub mod sort_node;
pub mod table_dual_node;

pub use aggregate_node::AggregationNode;
pub use data_source_node::DataSourceNode;
pub use join_node::{JoinNode, JoinType};
pub use plan_node_enum::PlanNodeEnum;
pub use plan_node_traits::{BinaryInputNode, PlanNode, SingleInputNode, ZeroInputNode};
pub use plan_type::{type_string_to_id, PlanType};
pub use project_node::ProjectionNode;
pub use selection_node::SelectionNode;
pub use sort_node::{LimitNode, OrderDirection, SortItem, SortNode};
pub use table_dual_node::TableDualNode;
