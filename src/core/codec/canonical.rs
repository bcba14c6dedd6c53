//! 子指纹列表规范化
//!
//! 每个子指纹列表在编码前都要归类：
//! - 位置相关（Positional）：保持原始顺序，例如投影列
//! - 可交换（Commutative）：按指纹字节字典序稳定排序，例如合取过滤条件
//!
//! 重复元素始终保留，不做去重。

use super::fingerprint_writer::append_fingerprint_list;

/// 子指纹列表的排序规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildListOrder {
    /// 保持原始顺序
    Positional,
    /// 编码前按字节排序
    Commutative,
}

/// 按字节字典序稳定排序指纹
///
/// 相等的指纹保持输入中的相对顺序，重复项不会被折叠。
pub fn sort_fingerprints(fingerprints: &mut [Vec<u8>]) {
    // slice::sort_by 是稳定排序
    fingerprints.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));
}

/// 按排序规则将子指纹列表写入缓冲区
pub fn append_child_list(buf: &mut Vec<u8>, mut children: Vec<Vec<u8>>, order: ChildListOrder) {
    if order == ChildListOrder::Commutative {
        sort_fingerprints(&mut children);
    }
    append_fingerprint_list(buf, &children);
}

/// 估算子指纹列表编码后的字节数：数量字段 + 每项长度前缀和内容
pub fn child_list_size(children: &[Vec<u8>]) -> usize {
    4 + children.iter().map(|c| 4 + c.len()).sum::<usize>()
}
