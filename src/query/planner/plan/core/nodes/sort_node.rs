//! 排序与限制节点实现
//!
//! SortNode 对输入数据排序，LimitNode 截取输入数据中的一段

use super::plan_node_enum::PlanNodeEnum;
use crate::core::error::{check_list_len, PlannerResult};
use crate::core::Expression;
use crate::define_plan_node;
use crate::query::planner::plan::core::NodeIdGenerator;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// 排序项定义
/// 包含排序表达式和排序方向
#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub expr: Expression,
    pub direction: OrderDirection,
}

impl SortItem {
    pub fn new(expr: Expression, direction: OrderDirection) -> Self {
        Self { expr, direction }
    }

    /// 创建升序排序项
    pub fn asc(expr: Expression) -> Self {
        Self::new(expr, OrderDirection::Asc)
    }

    /// 创建降序排序项
    pub fn desc(expr: Expression) -> Self {
        Self::new(expr, OrderDirection::Desc)
    }
}

define_plan_node! {
    pub struct SortNode {
        by_items: Vec<SortItem>,
    }
    plan_type: Sort
    input: SingleInputNode
}

impl SortNode {
    /// 创建新的排序节点
    pub fn new(
        id_gen: &NodeIdGenerator,
        input: PlanNodeEnum,
        by_items: Vec<SortItem>,
    ) -> PlannerResult<Self> {
        check_list_len("Sort", "by_items", by_items.len())?;
        Ok(Self {
            id: id_gen.next_id(),
            block_offset: 0,
            input: Box::new(input),
            by_items,
        })
    }

    /// 获取排序项
    pub fn by_items(&self) -> &[SortItem] {
        &self.by_items
    }
}

define_plan_node! {
    pub struct LimitNode {
        offset: u64,
        count: u64,
    }
    plan_type: Limit
    input: SingleInputNode
}

impl LimitNode {
    /// 创建新的限制节点
    pub fn new(id_gen: &NodeIdGenerator, input: PlanNodeEnum, offset: u64, count: u64) -> Self {
        Self {
            id: id_gen.next_id(),
            block_offset: 0,
            input: Box::new(input),
            offset,
            count,
        }
    }

    /// 跳过的行数
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// 返回的最大行数
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = count;
    }
}
