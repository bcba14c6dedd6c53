//! 统一错误处理
//!
//! 指纹计算本身是全函数，不返回错误。错误只出现在周边环节：
//! - 计划构造：列表长度超出 32 位编码范围等
//! - 配置加载：IO、TOML 解析、非法取值
//! - 计划缓存：配置非法
//!
//! `OptimizerError` 通过 `#[from]` 汇总各子错误，`OptimizerResult<T>` 为统一返回类型。

use thiserror::Error;

/// 计划构造错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("{node}: {field} 数量 {len} 超出 u32 编码范围")]
    ListTooLong {
        node: &'static str,
        field: &'static str,
        len: usize,
    },
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化失败: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("无效的配置项 {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// 计划缓存错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanCacheError {
    #[error("缓存大小必须大于0")]
    ZeroCapacity,

    #[error("缓存计算失败: {0}")]
    ComputationFailed(String),
}

/// 优化器统一错误类型
#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("计划错误: {0}")]
    Planner(#[from] PlannerError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("计划缓存错误: {0}")]
    PlanCache(#[from] PlanCacheError),

    #[error("日志初始化失败: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

/// 统一的结果类型
pub type OptimizerResult<T> = Result<T, OptimizerError>;

/// 计划构造结果类型
pub type PlannerResult<T> = Result<T, PlannerError>;

/// 检查列表长度能否以 u32 编码
pub fn check_list_len(node: &'static str, field: &'static str, len: usize) -> PlannerResult<()> {
    if u32::try_from(len).is_err() {
        return Err(PlannerError::ListTooLong { node, field, len });
    }
    Ok(())
}
