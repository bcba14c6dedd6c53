//! 节点ID生成器
//!
//! 为计划节点分配进程内唯一的ID。
//!
//! 所有生成器共享同一个全局计数器，不同计划构造的节点也不会得到相同ID。
//! 节点ID指纹依赖这一点：ID相同即同一个节点。ID不保证跨进程稳定。

use std::sync::atomic::{AtomicI64, Ordering};

/// 全局节点ID计数器，从1开始，0保留为无效ID
static NEXT_NODE_ID: AtomicI64 = AtomicI64::new(1);

/// 节点ID生成器
///
/// 全局计数器的句柄。按计划创建，传给每个节点构造函数，
/// 同时记录本实例分配过的ID数量。
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    allocated: AtomicI64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取下一个唯一ID
    pub fn next_id(&self) -> i64 {
        self.allocated.fetch_add(1, Ordering::Relaxed);
        NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
    }

    /// 本生成器已分配的ID数量
    pub fn allocated(&self) -> i64 {
        self.allocated.load(Ordering::Relaxed)
    }
}
