//! 虚表节点实现
//!
//! TableDualNode 产生固定行数的空行，用于没有 FROM 子句的查询以及被优化为常量结果的子树

use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

define_plan_node! {
    pub struct TableDualNode {
        row_count: u32,
    }
    plan_type: TableDual
    input: ZeroInputNode
}

impl TableDualNode {
    /// 创建新的虚表节点
    pub fn new(id_gen: &NodeIdGenerator, row_count: u32) -> Self {
        Self {
            id: id_gen.next_id(),
            block_offset: 0,
            row_count,
        }
    }

    /// 输出行数
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn set_row_count(&mut self, row_count: u32) {
        self.row_count = row_count;
    }
}
