//! 表达式定义
//!
//! 计划节点引用的标量表达式。每个表达式都实现 [`Fingerprint`]，
//! 编码以 1 字节表达式标记开头：
//!
//! | 表达式         | 编码                                                        |
//! |----------------|-------------------------------------------------------------|
//! | Constant       | `0x00 ++ 值编码`                                            |
//! | Column         | `0x01 ++ i64(unique_id)`，固定 9 字节                       |
//! | ScalarFunction | `0x03 ++ 长度前缀(函数名) ++ u32(参数数) ++ 参数指纹列表`   |
//! | Aggregate      | `0x04 ++ 长度前缀(函数名) ++ u8(distinct) ++ 参数指纹列表`  |
//!
//! 可交换函数的参数在编码前排序；`>`、`>=` 先交换参数改写为 `<`、`<=`。

use std::fmt;

use crate::core::codec::{
    append_child_list, append_length_prefixed, append_u64_be, append_u8, child_list_size,
    ChildListOrder, Fingerprint,
};
use crate::core::types::operators::{AggregateFunction, ScalarOperator};
use crate::core::value::encoding::encode_value;
use crate::core::Value;

const CONSTANT_FLAG: u8 = 0x00;
const COLUMN_FLAG: u8 = 0x01;
const SCALAR_FUNCTION_FLAG: u8 = 0x03;
const AGGREGATE_FLAG: u8 = 0x04;

/// 标量表达式
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// 常量
    Constant(Value),

    /// 列引用
    ///
    /// `unique_id` 在一次查询内唯一标识一列，`name` 仅用于展示。
    Column { unique_id: i64, name: String },

    /// 标量函数调用
    ScalarFunction {
        op: ScalarOperator,
        args: Vec<Expression>,
    },

    /// 聚合函数
    Aggregate {
        func: AggregateFunction,
        args: Vec<Expression>,
        distinct: bool,
    },
}

impl Expression {
    /// 创建列引用
    pub fn column(unique_id: i64, name: impl Into<String>) -> Self {
        Expression::Column {
            unique_id,
            name: name.into(),
        }
    }

    /// 创建常量
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    /// 创建标量函数
    pub fn function(op: ScalarOperator, args: Vec<Expression>) -> Self {
        Expression::ScalarFunction { op, args }
    }

    /// 创建二元标量函数
    pub fn binary(op: ScalarOperator, left: Expression, right: Expression) -> Self {
        Expression::ScalarFunction {
            op,
            args: vec![left, right],
        }
    }

    /// 创建聚合函数
    pub fn aggregate(func: AggregateFunction, args: Vec<Expression>, distinct: bool) -> Self {
        Expression::Aggregate {
            func,
            args,
            distinct,
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Expression::Column { .. })
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_))
    }

    /// 子表达式
    pub fn children(&self) -> &[Expression] {
        match self {
            Expression::Constant(_) | Expression::Column { .. } => &[],
            Expression::ScalarFunction { args, .. } | Expression::Aggregate { args, .. } => args,
        }
    }

    fn encode_scalar_function(op: ScalarOperator, args: &[Expression]) -> Vec<u8> {
        let mut arg_fps: Vec<Vec<u8>> = args.iter().map(|arg| arg.fingerprint()).collect();

        // 镜像比较统一改写为 `<` / `<=`
        let op = match op.mirror() {
            Some(mirrored) if arg_fps.len() == 2 => {
                arg_fps.swap(0, 1);
                mirrored
            }
            _ => op,
        };

        let order = if op.is_commutative() {
            ChildListOrder::Commutative
        } else {
            ChildListOrder::Positional
        };

        let name = op.name().as_bytes();
        let mut buf = Vec::with_capacity(1 + 4 + name.len() + child_list_size(&arg_fps));
        append_u8(&mut buf, SCALAR_FUNCTION_FLAG);
        append_length_prefixed(&mut buf, name);
        append_child_list(&mut buf, arg_fps, order);
        buf
    }

    fn encode_aggregate(func: AggregateFunction, args: &[Expression], distinct: bool) -> Vec<u8> {
        let arg_fps: Vec<Vec<u8>> = args.iter().map(|arg| arg.fingerprint()).collect();
        let name = func.name().as_bytes();
        let mut buf = Vec::with_capacity(1 + 4 + name.len() + 1 + child_list_size(&arg_fps));
        append_u8(&mut buf, AGGREGATE_FLAG);
        append_length_prefixed(&mut buf, name);
        append_u8(&mut buf, u8::from(distinct));
        append_child_list(&mut buf, arg_fps, ChildListOrder::Positional);
        buf
    }
}

impl Fingerprint for Expression {
    fn fingerprint(&self) -> Vec<u8> {
        match self {
            Expression::Constant(value) => {
                let mut buf = Vec::with_capacity(10);
                append_u8(&mut buf, CONSTANT_FLAG);
                encode_value(&mut buf, value);
                buf
            }
            Expression::Column { unique_id, .. } => {
                let mut buf = Vec::with_capacity(9);
                append_u8(&mut buf, COLUMN_FLAG);
                append_u64_be(&mut buf, *unique_id as u64);
                buf
            }
            Expression::ScalarFunction { op, args } => Self::encode_scalar_function(*op, args),
            Expression::Aggregate {
                func,
                args,
                distinct,
            } => Self::encode_aggregate(*func, args, *distinct),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Column { name, .. } => write!(f, "{}", name),
            Expression::ScalarFunction { op, args } => {
                write!(f, "{}(", op)?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Expression::Aggregate {
                func,
                args,
                distinct,
            } => {
                write!(f, "{}(", func)?;
                if *distinct {
                    write!(f, "distinct ")?;
                }
                write_args(f, args)?;
                write!(f, ")")
            }
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}
