//! 计划类型编码
//!
//! 每种逻辑计划类型对应一个固定的数值类型ID和类型字符串。
//! 类型ID只在进程内有意义，非零且互不相同，作为指纹开头 4 字节的类型标记。

use std::fmt;

/// 逻辑计划类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanType {
    DataSource,
    TableDual,
    Projection,
    Selection,
    Limit,
    Sort,
    Aggregation,
    Join,
}

impl PlanType {
    /// 全部计划类型
    pub const ALL: [PlanType; 8] = [
        PlanType::DataSource,
        PlanType::TableDual,
        PlanType::Projection,
        PlanType::Selection,
        PlanType::Limit,
        PlanType::Sort,
        PlanType::Aggregation,
        PlanType::Join,
    ];

    /// 数值类型ID
    pub const fn type_id(&self) -> u32 {
        match self {
            PlanType::Aggregation => 1,
            PlanType::Join => 3,
            PlanType::Limit => 5,
            PlanType::Projection => 7,
            PlanType::Selection => 8,
            PlanType::Sort => 10,
            PlanType::TableDual => 11,
            PlanType::DataSource => 12,
        }
    }

    /// 类型字符串
    pub const fn type_name(&self) -> &'static str {
        match self {
            PlanType::DataSource => "DataSource",
            PlanType::TableDual => "TableDual",
            PlanType::Projection => "Projection",
            PlanType::Selection => "Selection",
            PlanType::Limit => "Limit",
            PlanType::Sort => "Sort",
            PlanType::Aggregation => "Aggregation",
            PlanType::Join => "Join",
        }
    }

    /// 按类型字符串查找计划类型
    pub fn from_type_name(name: &str) -> Option<PlanType> {
        Self::ALL.iter().copied().find(|t| t.type_name() == name)
    }

    /// 输入节点数量
    pub const fn input_count(&self) -> usize {
        match self {
            PlanType::DataSource | PlanType::TableDual => 0,
            PlanType::Join => 2,
            _ => 1,
        }
    }

    /// 是否有结构化的指纹编码
    ///
    /// 返回 `false` 的类型按节点ID编码，指纹相等只说明是同一个节点。
    pub const fn has_structural_fingerprint(&self) -> bool {
        matches!(
            self,
            PlanType::Projection | PlanType::TableDual | PlanType::Selection | PlanType::Limit
        )
    }
}

/// 类型字符串到类型ID的映射
pub fn type_string_to_id(name: &str) -> Option<u32> {
    PlanType::from_type_name(name).map(|t| t.type_id())
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
