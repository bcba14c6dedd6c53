//! Codec 模块 - 指纹字节编码
//!
//! 提供计划指纹使用的底层编码原语，所有上层编码规则都只通过这里写入字节。
//!
//! ## 架构
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │            codec::mod.rs            │
//! │       模块入口和公共类型导出         │
//! └─────────────────────────────────────┘
//!              │
//!        ┌─────┴──────────┐
//!        ▼                ▼
//! ┌──────────────┐ ┌─────────────┐
//! │fingerprint_  │ │ canonical   │
//! │writer        │ │ (子列表排序) │
//! └──────────────┘ └─────────────┘
//! ```
//!
//! ## 二进制格式
//!
//! - 定长整数：大端序 u32 / u64
//! - 变长块：4 字节大端长度 + 原始字节
//! - 子指纹列表：4 字节数量 + 逐个变长块
//!
//! 所有变长字段都带长度前缀，保证不同结构不会因边界歧义编码成同一字节串。

pub mod canonical;
pub mod fingerprint_writer;

pub use canonical::{append_child_list, child_list_size, sort_fingerprints, ChildListOrder};
pub use fingerprint_writer::{
    append_fingerprint_list, append_length_prefixed, append_u32_be, append_u64_be,
    append_u8, length_prefixed_size, Fingerprint,
};
