//! 指纹编码原语
//!
//! 纯函数，向可增长的字节缓冲区追加定长大端整数与带长度前缀的变长块。
//! 调用方保证写入 u32 的值不超过 32 位，这里不做范围检查。

/// 指纹能力
///
/// 计划节点中的表达式字段都需要提供自己的指纹。实现必须满足：
/// - 确定性：未修改的对象多次计算得到相同字节
/// - 可交换运算符在编码前按指纹字节排序其操作数
pub trait Fingerprint {
    /// 计算规范化指纹字节
    fn fingerprint(&self) -> Vec<u8>;
}

impl<T: Fingerprint + ?Sized> Fingerprint for &T {
    fn fingerprint(&self) -> Vec<u8> {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Box<T> {
    fn fingerprint(&self) -> Vec<u8> {
        (**self).fingerprint()
    }
}

/// 追加单字节标记
#[inline]
pub fn append_u8(buf: &mut Vec<u8>, value: u8) {
    buf.push(value);
}

/// 追加 32 位大端整数
///
/// 只写入低 32 位。节点ID、位置标记、列表长度由规划器在上游保证不越界。
#[inline]
pub fn append_u32_be(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// 追加 64 位大端整数
#[inline]
pub fn append_u64_be(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// 追加带 4 字节长度前缀的变长块
#[inline]
pub fn append_length_prefixed(buf: &mut Vec<u8>, bytes: &[u8]) {
    append_u32_be(buf, bytes.len() as u32);
    buf.extend_from_slice(bytes);
}

/// 追加子指纹列表：数量 + 逐个带长度前缀的指纹
///
/// 列表顺序按调用方给定的顺序写入，可交换列表需要先排序。
pub fn append_fingerprint_list<B: AsRef<[u8]>>(buf: &mut Vec<u8>, items: &[B]) {
    append_u32_be(buf, items.len() as u32);
    for item in items {
        append_length_prefixed(buf, item.as_ref());
    }
}

/// 计算一个带长度前缀的块占用的字节数
#[inline]
pub const fn length_prefixed_size(len: usize) -> usize {
    4 + len
}
