//! 操作符类型定义
//!
//! 定义标量函数与聚合函数，以及指纹规范化需要的运算符性质：
//! - 可交换性：参数列表在编码前按指纹字节排序
//! - 镜像比较：`a > b` 规范化为 `b < a`

use std::fmt;

/// 标量函数操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarOperator {
    // 算术操作
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    UnaryMinus,

    // 比较操作
    Eq,
    Ne,
    NullEq,
    Lt,
    Le,
    Gt,
    Ge,

    // 逻辑操作
    And,
    Or,
    Xor,
    Not,

    // 位操作
    BitAnd,
    BitOr,
    BitXor,

    // 其他
    IsNull,
    Like,
    In,
    Concat,
}

impl ScalarOperator {
    /// 函数名，参与指纹编码
    pub fn name(&self) -> &'static str {
        match self {
            ScalarOperator::Plus => "plus",
            ScalarOperator::Minus => "minus",
            ScalarOperator::Mul => "mul",
            ScalarOperator::Div => "div",
            ScalarOperator::Mod => "mod",
            ScalarOperator::UnaryMinus => "unaryminus",
            ScalarOperator::Eq => "eq",
            ScalarOperator::Ne => "ne",
            ScalarOperator::NullEq => "nulleq",
            ScalarOperator::Lt => "lt",
            ScalarOperator::Le => "le",
            ScalarOperator::Gt => "gt",
            ScalarOperator::Ge => "ge",
            ScalarOperator::And => "and",
            ScalarOperator::Or => "or",
            ScalarOperator::Xor => "xor",
            ScalarOperator::Not => "not",
            ScalarOperator::BitAnd => "bitand",
            ScalarOperator::BitOr => "bitor",
            ScalarOperator::BitXor => "bitxor",
            ScalarOperator::IsNull => "isnull",
            ScalarOperator::Like => "like",
            ScalarOperator::In => "in",
            ScalarOperator::Concat => "concat",
        }
    }

    /// 参数顺序是否不影响语义
    pub fn is_commutative(&self) -> bool {
        matches!(
            self,
            ScalarOperator::Plus
                | ScalarOperator::Mul
                | ScalarOperator::Eq
                | ScalarOperator::Ne
                | ScalarOperator::NullEq
                | ScalarOperator::And
                | ScalarOperator::Or
                | ScalarOperator::Xor
                | ScalarOperator::BitAnd
                | ScalarOperator::BitOr
                | ScalarOperator::BitXor
        )
    }

    /// 镜像比较：交换两个参数后语义等价的操作符
    ///
    /// 只对 `>`、`>=` 返回值，规范形式统一为 `<`、`<=`。
    pub fn mirror(&self) -> Option<ScalarOperator> {
        match self {
            ScalarOperator::Gt => Some(ScalarOperator::Lt),
            ScalarOperator::Ge => Some(ScalarOperator::Le),
            _ => None,
        }
    }

    /// 是否是比较操作
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            ScalarOperator::Eq
                | ScalarOperator::Ne
                | ScalarOperator::NullEq
                | ScalarOperator::Lt
                | ScalarOperator::Le
                | ScalarOperator::Gt
                | ScalarOperator::Ge
        )
    }
}

impl fmt::Display for ScalarOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 聚合函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    FirstRow,
}

impl AggregateFunction {
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::FirstRow => "firstrow",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
