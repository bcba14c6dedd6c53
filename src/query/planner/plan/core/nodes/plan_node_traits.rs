//! PlanNode 统一特征定义
//!
//! 定义所有计划节点需要实现的基础特征

use super::plan_node_enum::PlanNodeEnum;
use super::plan_type::PlanType;

/// PlanNode 基础特征
pub trait PlanNode {
    /// 获取节点的唯一ID
    fn id(&self) -> i64;

    /// 获取节点类型的名称
    fn name(&self) -> &'static str;

    /// 获取节点的计划类型
    fn plan_type(&self) -> PlanType;

    /// 节点所在查询块的位置标记
    fn block_offset(&self) -> u32;

    /// 设置位置标记
    fn set_block_offset(&mut self, offset: u32);

    /// 转换为 PlanNodeEnum
    fn into_enum(self) -> PlanNodeEnum;
}

/// 无输入节点特征
pub trait ZeroInputNode: PlanNode {}

/// 单输入节点特征
pub trait SingleInputNode: PlanNode {
    /// 获取输入节点
    fn input(&self) -> &PlanNodeEnum;

    /// 替换输入节点
    fn set_input(&mut self, input: PlanNodeEnum);
}

/// 双输入节点特征
pub trait BinaryInputNode: PlanNode {
    /// 获取左输入节点
    fn left_input(&self) -> &PlanNodeEnum;

    /// 获取右输入节点
    fn right_input(&self) -> &PlanNodeEnum;

    fn set_left_input(&mut self, input: PlanNodeEnum);

    fn set_right_input(&mut self, input: PlanNodeEnum);
}
