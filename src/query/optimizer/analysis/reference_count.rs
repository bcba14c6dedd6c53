//! 引用计数分析模块
//!
//! 识别计划中结构相同、出现多次的子计划，为公共子表达式消除提供数据支持。
//! 子计划按子树指纹分组，同组节点可以互相替换。

use std::collections::HashMap;

use log::debug;

use crate::query::planner::plan::core::nodes::PlanNodeEnum;

use super::fingerprint::{FingerprintCalculator, PlanFingerprint};

/// 子计划唯一标识，即子树指纹
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubplanId(pub PlanFingerprint);

impl SubplanId {
    pub fn new(fingerprint: PlanFingerprint) -> Self {
        Self(fingerprint)
    }

    pub fn fingerprint(&self) -> &PlanFingerprint {
        &self.0
    }
}

/// 子计划引用信息
#[derive(Debug, Clone)]
pub struct SubplanReferenceInfo {
    /// 子计划的唯一标识
    pub subplan_id: SubplanId,
    /// 首次出现的子计划根节点ID
    pub root_node_id: i64,
    /// 出现次数
    pub reference_count: usize,
    /// 引用位置（父节点ID列表，不重复）
    pub reference_locations: Vec<i64>,
    /// 子计划包含的节点数量
    pub node_count: usize,
}

impl SubplanReferenceInfo {
    pub fn new(subplan_id: SubplanId, root_node_id: i64) -> Self {
        Self {
            subplan_id,
            root_node_id,
            reference_count: 0,
            reference_locations: Vec::new(),
            node_count: 0,
        }
    }

    /// 记录一次出现
    ///
    /// 计划根没有父节点，只计数不记录位置。
    pub fn add_reference(&mut self, location: Option<i64>) {
        self.reference_count += 1;
        if let Some(location) = location {
            if !self.reference_locations.contains(&location) {
                self.reference_locations.push(location);
            }
        }
    }
}

/// 引用计数分析结果
#[derive(Debug, Clone, Default)]
pub struct ReferenceCountAnalysis {
    /// 所有出现多次的子计划（次数 >= 2），按首次出现的根节点ID升序
    pub repeated_subplans: Vec<SubplanReferenceInfo>,
    /// 节点ID到引用信息的映射，只包含重复子计划中的节点
    pub node_reference_map: HashMap<i64, SubplanReferenceInfo>,
}

impl ReferenceCountAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取指定节点的引用信息
    pub fn get_node_info(&self, node_id: i64) -> Option<&SubplanReferenceInfo> {
        self.node_reference_map.get(&node_id)
    }

    /// 检查以该节点为根的子计划是否出现多次
    pub fn is_repeated(&self, node_id: i64) -> bool {
        self.node_reference_map
            .get(&node_id)
            .is_some_and(|info| info.reference_count >= 2)
    }

    /// 获取重复子计划的数量
    pub fn repeated_count(&self) -> usize {
        self.repeated_subplans.len()
    }
}

/// 分析上下文
#[derive(Default)]
struct AnalysisContext {
    /// 指纹到引用信息的映射
    fingerprint_map: HashMap<PlanFingerprint, SubplanReferenceInfo>,
    /// 节点ID到指纹的映射
    node_fingerprint_map: HashMap<i64, PlanFingerprint>,
}

impl AnalysisContext {
    fn record_reference(
        &mut self,
        fingerprint: PlanFingerprint,
        node_id: i64,
        parent_id: Option<i64>,
        node_count: usize,
    ) {
        self.node_fingerprint_map.insert(node_id, fingerprint.clone());

        let info = self
            .fingerprint_map
            .entry(fingerprint.clone())
            .or_insert_with(|| {
                let mut info = SubplanReferenceInfo::new(SubplanId::new(fingerprint), node_id);
                info.node_count = node_count;
                info
            });
        info.add_reference(parent_id);
    }

    fn into_analysis_result(self) -> ReferenceCountAnalysis {
        let mut repeated_subplans: Vec<SubplanReferenceInfo> = self
            .fingerprint_map
            .into_values()
            .filter(|info| info.reference_count >= 2)
            .collect();
        repeated_subplans.sort_by_key(|info| info.root_node_id);

        let repeated: HashMap<&PlanFingerprint, &SubplanReferenceInfo> = repeated_subplans
            .iter()
            .map(|info| (info.subplan_id.fingerprint(), info))
            .collect();

        let node_reference_map = self
            .node_fingerprint_map
            .iter()
            .filter_map(|(node_id, fp)| repeated.get(fp).map(|info| (*node_id, (*info).clone())))
            .collect();

        ReferenceCountAnalysis {
            repeated_subplans,
            node_reference_map,
        }
    }
}

/// 引用计数分析器
///
/// 分析计划树，识别出现多次的子计划。
#[derive(Debug, Clone, Default)]
pub struct ReferenceCountAnalyzer {
    fingerprint_calculator: FingerprintCalculator,
}

impl ReferenceCountAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calculator(fingerprint_calculator: FingerprintCalculator) -> Self {
        Self {
            fingerprint_calculator,
        }
    }

    /// 分析计划的引用计数
    ///
    /// # 算法
    /// 1. 后序遍历计划树
    /// 2. 由子节点的子树指纹组合出每个节点的子树指纹
    /// 3. 按子树指纹统计出现次数
    /// 4. 返回出现多次的子计划信息
    pub fn analyze(&self, plan: &PlanNodeEnum) -> ReferenceCountAnalysis {
        let mut context = AnalysisContext::default();
        self.analyze_recursive(plan, &mut context, None);
        let analysis = context.into_analysis_result();
        debug!(
            "引用计数分析完成: 节点数={}, 重复子计划数={}",
            plan.node_count(),
            analysis.repeated_count()
        );
        analysis
    }

    /// 递归分析计划树，返回当前节点的子树指纹和节点数量
    fn analyze_recursive(
        &self,
        node: &PlanNodeEnum,
        context: &mut AnalysisContext,
        parent_id: Option<i64>,
    ) -> (PlanFingerprint, usize) {
        let node_id = node.id();
        let mut child_fps = Vec::new();
        let mut node_count = 1;
        for child in node.children() {
            let (fp, count) = self.analyze_recursive(child, context, Some(node_id));
            child_fps.push(fp);
            node_count += count;
        }

        let fingerprint = self.fingerprint_calculator.compose_subtree(node, child_fps);
        context.record_reference(fingerprint.clone(), node_id, parent_id, node_count);
        (fingerprint, node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Expression, ScalarOperator};
    use crate::query::planner::plan::core::nodes::{
        JoinNode, JoinType, LimitNode, SelectionNode, TableDualNode,
    };
    use crate::query::planner::plan::core::NodeIdGenerator;

    fn filtered_dual(id_gen: &NodeIdGenerator) -> PlanNodeEnum {
        let cond = Expression::binary(
            ScalarOperator::Lt,
            Expression::column(1, "a"),
            Expression::constant(3i64),
        );
        SelectionNode::new(id_gen, TableDualNode::new(id_gen, 1).into(), vec![cond])
            .expect("Selection node should be created successfully")
            .into()
    }

    #[test]
    fn test_subplan_reference_info() {
        let mut info = SubplanReferenceInfo::new(SubplanId::new(PlanFingerprint::new(vec![1])), 100);
        assert_eq!(info.reference_count, 0);

        info.add_reference(Some(200));
        assert_eq!(info.reference_count, 1);
        assert!(info.reference_locations.contains(&200));

        info.add_reference(Some(200));
        assert_eq!(info.reference_count, 2);
        assert_eq!(info.reference_locations.len(), 1);

        info.add_reference(None);
        assert_eq!(info.reference_count, 3);
        assert_eq!(info.reference_locations.len(), 1);
    }

    #[test]
    fn test_empty_analysis() {
        let analysis = ReferenceCountAnalysis::new();
        assert_eq!(analysis.repeated_count(), 0);
        assert!(!analysis.is_repeated(1));
    }

    #[test]
    fn test_no_repeats_in_chain() {
        let id_gen = NodeIdGenerator::new();
        let plan: PlanNodeEnum = LimitNode::new(&id_gen, filtered_dual(&id_gen), 0, 5).into();
        let analysis = ReferenceCountAnalyzer::new().analyze(&plan);
        assert_eq!(analysis.repeated_count(), 0);
        assert!(analysis.node_reference_map.is_empty());
    }

    #[test]
    fn test_repeated_join_inputs() {
        let id_gen = NodeIdGenerator::new();
        let left = filtered_dual(&id_gen);
        let right = filtered_dual(&id_gen);
        let left_id = left.id();
        let right_id = right.id();
        let join: PlanNodeEnum = JoinNode::new(&id_gen, left, right, JoinType::Cross, vec![], vec![])
            .expect("Join node should be created successfully")
            .into();
        let join_id = join.id();

        let analysis = ReferenceCountAnalyzer::new().analyze(&join);

        // Selection 子树与其下的 TableDual 各重复一次
        assert_eq!(analysis.repeated_count(), 2);
        assert!(analysis.is_repeated(left_id));
        assert!(analysis.is_repeated(right_id));
        assert!(!analysis.is_repeated(join_id));

        let selection_info = analysis
            .get_node_info(left_id)
            .expect("selection should be reported");
        assert_eq!(selection_info.reference_count, 2);
        assert_eq!(selection_info.node_count, 2);
        assert_eq!(selection_info.reference_locations, vec![join_id]);
        assert_eq!(selection_info.root_node_id, left_id);

        // 按首次出现的根节点ID排序，TableDual 先于 Selection 构造
        let roots: Vec<i64> = analysis.repeated_subplans.iter().map(|i| i.root_node_id).collect();
        let mut sorted = roots.clone();
        sorted.sort();
        assert_eq!(roots, sorted);
    }

    #[test]
    fn test_different_location_not_repeated() {
        let id_gen = NodeIdGenerator::new();
        let left = filtered_dual(&id_gen);
        let mut right = filtered_dual(&id_gen);
        right.set_block_offset(1);
        let left_id = left.id();
        let join: PlanNodeEnum = JoinNode::new(&id_gen, left, right, JoinType::Inner, vec![], vec![])
            .expect("Join node should be created successfully")
            .into();

        let analysis = ReferenceCountAnalyzer::new().analyze(&join);
        assert!(!analysis.is_repeated(left_id));
        // TableDual 叶子仍然相同
        assert_eq!(analysis.repeated_count(), 1);
    }
}
