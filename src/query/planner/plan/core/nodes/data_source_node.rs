//! 数据源节点实现
//!
//! DataSourceNode 从一张表读取数据，是计划树的叶子节点

use crate::core::error::{check_list_len, PlannerResult};
use crate::core::Expression;
use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

define_plan_node! {
    pub struct DataSourceNode {
        table_name: String,
        columns: Vec<Expression>,
    }
    plan_type: DataSource
    input: ZeroInputNode
}

impl DataSourceNode {
    /// 创建新的数据源节点
    pub fn new(
        id_gen: &NodeIdGenerator,
        table_name: impl Into<String>,
        columns: Vec<Expression>,
    ) -> PlannerResult<Self> {
        check_list_len("DataSource", "columns", columns.len())?;
        Ok(Self {
            id: id_gen.next_id(),
            block_offset: 0,
            table_name: table_name.into(),
            columns,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// 输出列
    pub fn columns(&self) -> &[Expression] {
        &self.columns
    }
}
