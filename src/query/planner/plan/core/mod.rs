pub mod node_id_generator;
pub mod nodes;

pub use node_id_generator::NodeIdGenerator;
pub use nodes::{
    type_string_to_id, AggregationNode, BinaryInputNode, DataSourceNode, JoinNode, JoinType,
    LimitNode, OrderDirection, PlanNode, PlanNodeEnum, PlanType, ProjectionNode, SelectionNode,
    SingleInputNode, SortItem, SortNode, TableDualNode, ZeroInputNode,
};
