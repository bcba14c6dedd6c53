//! 计划节点指纹计算模块
//!
//! 为计划节点生成规范化的字节指纹，用于识别语义等价的计划节点。
//!
//! 指纹布局为 `类型标记(4) ++ 位置标记(4) ++ 负载`，各类型的负载：
//!
//! | 节点       | 负载                                           |
//! |------------|------------------------------------------------|
//! | Projection | `u32(表达式数) ++ 表达式指纹列表`，保持原顺序  |
//! | TableDual  | `u32(行数)`                                    |
//! | Selection  | `u32(条件数) ++ 条件指纹列表`，按字节稳定排序  |
//! | Limit      | `u64(offset) ++ u64(count)`，总长固定 24 字节  |
//!
//! 其余节点类型没有结构化编码，指纹为 `u32(节点ID)` 共 4 字节：
//! 只有同一个节点实例才会得到相同指纹。
//!
//! 节点指纹不包含子计划。需要覆盖整棵子树时使用
//! [`FingerprintCalculator::calculate_subtree_fingerprint`]。

use std::fmt;

use log::trace;
use rayon::prelude::*;

use crate::config::FingerprintConfig;
use crate::core::codec::{
    append_child_list, append_length_prefixed, append_u32_be, append_u64_be, child_list_size,
    length_prefixed_size, ChildListOrder, Fingerprint,
};
use crate::query::planner::plan::core::nodes::{
    LimitNode, PlanNode, PlanNodeEnum, ProjectionNode, SelectionNode, TableDualNode,
};

/// 类型标记与位置标记的总长度
const HEADER_SIZE: usize = 8;
/// Limit 指纹的固定长度
const LIMIT_FINGERPRINT_SIZE: usize = HEADER_SIZE + 16;
/// 节点ID指纹的长度
const IDENTITY_FINGERPRINT_SIZE: usize = 4;

/// 计划节点指纹
///
/// 不透明的字节序列，只有字节相等和字典序有意义。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanFingerprint(Vec<u8>);

impl PlanFingerprint {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 十六进制表示，用于日志
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl AsRef<[u8]> for PlanFingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PlanFingerprint {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PlanFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// 指纹计算器
///
/// 无状态，计算过程不修改计划树，可以在多个线程上同时使用。
#[derive(Debug, Clone, Default)]
pub struct FingerprintCalculator {
    config: FingerprintConfig,
}

impl FingerprintCalculator {
    /// 使用默认配置创建指纹计算器
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FingerprintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// 计算计划节点的指纹
    ///
    /// 总是成功。没有结构化编码的节点类型退化为节点ID指纹。
    pub fn calculate_fingerprint(&self, node: &PlanNodeEnum) -> PlanFingerprint {
        let bytes = match node {
            PlanNodeEnum::Projection(n) => self.encode_projection(n),
            PlanNodeEnum::TableDual(n) => Self::encode_table_dual(n),
            PlanNodeEnum::Selection(n) => self.encode_selection(n),
            PlanNodeEnum::Limit(n) => Self::encode_limit(n),
            PlanNodeEnum::DataSource(_)
            | PlanNodeEnum::Sort(_)
            | PlanNodeEnum::Aggregation(_)
            | PlanNodeEnum::Join(_) => Self::encode_identity(node.id()),
        };
        trace!(
            "{} 指纹: id={}, 结构化={}, 长度={}",
            node.name(),
            node.id(),
            node.plan_type().has_structural_fingerprint(),
            bytes.len()
        );
        PlanFingerprint(bytes)
    }

    /// 计算子树指纹
    ///
    /// `长度前缀(节点指纹) ++ u32(子节点数) ++ 子节点子树指纹列表`，子节点按位置顺序。
    pub fn calculate_subtree_fingerprint(&self, node: &PlanNodeEnum) -> PlanFingerprint {
        let child_fps = node
            .children()
            .into_iter()
            .map(|child| self.calculate_subtree_fingerprint(child))
            .collect();
        self.compose_subtree(node, child_fps)
    }

    /// 用已计算好的子节点子树指纹组合出当前节点的子树指纹
    pub(crate) fn compose_subtree(
        &self,
        node: &PlanNodeEnum,
        child_fps: Vec<PlanFingerprint>,
    ) -> PlanFingerprint {
        let node_fp = self.calculate_fingerprint(node);
        let children: Vec<Vec<u8>> = child_fps.into_iter().map(PlanFingerprint::into_bytes).collect();

        let mut buf =
            Vec::with_capacity(length_prefixed_size(node_fp.len()) + child_list_size(&children));
        append_length_prefixed(&mut buf, node_fp.as_bytes());
        append_child_list(&mut buf, children, ChildListOrder::Positional);
        PlanFingerprint(buf)
    }

    /// 批量计算相互独立的计划的节点指纹
    ///
    /// 结果顺序与输入一致。数量达到 `parallel_batch_threshold` 时并行计算。
    pub fn calculate_batch(&self, plans: &[PlanNodeEnum]) -> Vec<PlanFingerprint> {
        self.batch(plans, |plan| self.calculate_fingerprint(plan))
    }

    /// 批量计算子树指纹，规则同 [`calculate_batch`](Self::calculate_batch)
    pub fn calculate_subtree_batch(&self, plans: &[PlanNodeEnum]) -> Vec<PlanFingerprint> {
        self.batch(plans, |plan| self.calculate_subtree_fingerprint(plan))
    }

    fn batch<F>(&self, plans: &[PlanNodeEnum], f: F) -> Vec<PlanFingerprint>
    where
        F: Fn(&PlanNodeEnum) -> PlanFingerprint + Sync + Send,
    {
        if plans.len() >= self.config.parallel_batch_threshold {
            trace!("并行计算 {} 个计划的指纹", plans.len());
            plans.par_iter().map(f).collect()
        } else {
            plans.iter().map(f).collect()
        }
    }

    fn encode_header(buf: &mut Vec<u8>, node: &impl PlanNode) {
        append_u32_be(buf, node.plan_type().type_id());
        append_u32_be(buf, node.block_offset());
    }

    fn encode_projection(&self, node: &ProjectionNode) -> Vec<u8> {
        let exprs = node.exprs();
        let hint = length_prefixed_size(self.config.projection_expr_size_hint);
        let mut buf = Vec::with_capacity(HEADER_SIZE + 4 + exprs.len() * hint);
        Self::encode_header(&mut buf, node);

        let expr_fps = exprs.iter().map(|expr| expr.fingerprint()).collect();
        append_child_list(&mut buf, expr_fps, ChildListOrder::Positional);
        buf
    }

    fn encode_table_dual(node: &TableDualNode) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE + 4);
        Self::encode_header(&mut buf, node);
        append_u32_be(&mut buf, node.row_count());
        buf
    }

    fn encode_selection(&self, node: &SelectionNode) -> Vec<u8> {
        let conditions = node.conditions();
        let hint = length_prefixed_size(self.config.selection_cond_size_hint);
        let mut buf = Vec::with_capacity(HEADER_SIZE + 4 + conditions.len() * hint);
        Self::encode_header(&mut buf, node);

        // 合取条件顺序无关，排序后编码；重复条件保留
        let cond_fps = conditions.iter().map(|cond| cond.fingerprint()).collect();
        append_child_list(&mut buf, cond_fps, ChildListOrder::Commutative);
        buf
    }

    fn encode_limit(node: &LimitNode) -> Vec<u8> {
        let mut buf = Vec::with_capacity(LIMIT_FINGERPRINT_SIZE);
        Self::encode_header(&mut buf, node);
        append_u64_be(&mut buf, node.offset());
        append_u64_be(&mut buf, node.count());
        buf
    }

    fn encode_identity(id: i64) -> Vec<u8> {
        let mut buf = Vec::with_capacity(IDENTITY_FINGERPRINT_SIZE);
        append_u32_be(&mut buf, id as u32);
        buf
    }
}
