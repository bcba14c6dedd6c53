pub mod codec;
pub mod error;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{
    ConfigError, OptimizerError, OptimizerResult, PlanCacheError, PlannerError, PlannerResult,
};

// 指纹编码
pub use codec::{ChildListOrder, Fingerprint};

// 核心数据类型
pub use value::Value;

// 表达式系统类型
pub use types::expression::Expression;
pub use types::operators::{AggregateFunction, ScalarOperator};
