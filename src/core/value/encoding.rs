//! 常量值指纹编码
//!
//! 每种值类型以 1 字节类型标记开头，变长内容带长度前缀。

use super::types::Value;
use crate::core::codec::{append_length_prefixed, append_u64_be, append_u8, Fingerprint};

const VALUE_NULL_TAG: u8 = 0x00;
const VALUE_BOOL_TAG: u8 = 0x01;
const VALUE_INT_TAG: u8 = 0x02;
const VALUE_FLOAT_TAG: u8 = 0x03;
const VALUE_STRING_TAG: u8 = 0x04;
const VALUE_BYTES_TAG: u8 = 0x05;

/// 所有 NaN 统一编码为同一位模式
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// 将值编码追加到缓冲区
pub fn encode_value(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => append_u8(buf, VALUE_NULL_TAG),
        Value::Bool(b) => {
            append_u8(buf, VALUE_BOOL_TAG);
            append_u8(buf, u8::from(*b));
        }
        Value::Int(i) => {
            append_u8(buf, VALUE_INT_TAG);
            append_u64_be(buf, *i as u64);
        }
        Value::Float(f) => {
            append_u8(buf, VALUE_FLOAT_TAG);
            append_u64_be(buf, canonical_float_bits(*f));
        }
        Value::String(s) => {
            append_u8(buf, VALUE_STRING_TAG);
            append_length_prefixed(buf, s.as_bytes());
        }
        Value::Bytes(b) => {
            append_u8(buf, VALUE_BYTES_TAG);
            append_length_prefixed(buf, b);
        }
    }
}

/// 浮点数规范位表示：+0.0 与 -0.0 相同，所有 NaN 相同
fn canonical_float_bits(f: f64) -> u64 {
    if f.is_nan() {
        CANONICAL_NAN_BITS
    } else if f == 0.0 {
        0.0_f64.to_bits()
    } else {
        f.to_bits()
    }
}

impl Fingerprint for Value {
    fn fingerprint(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(9);
        encode_value(&mut buf, self);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_encoding() {
        assert_eq!(
            Value::Int(-1).fingerprint(),
            vec![VALUE_INT_TAG, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_float_zero_and_nan_are_canonical() {
        assert_eq!(Value::Float(0.0).fingerprint(), Value::Float(-0.0).fingerprint());
        assert_eq!(
            Value::Float(f64::NAN).fingerprint(),
            Value::Float(-f64::NAN).fingerprint()
        );
        assert_ne!(Value::Float(1.0).fingerprint(), Value::Float(2.0).fingerprint());
    }

    #[test]
    fn test_type_tag_discriminates() {
        // 整数 0 与布尔 false 的负载都为零，类型标记必须区分
        assert_ne!(Value::Int(0).fingerprint(), Value::Bool(false).fingerprint());
        assert_ne!(
            Value::String("a".to_string()).fingerprint(),
            Value::Bytes(b"a".to_vec()).fingerprint()
        );
    }

    #[test]
    fn test_string_is_length_prefixed() {
        assert_eq!(
            Value::from("ab").fingerprint(),
            vec![VALUE_STRING_TAG, 0, 0, 0, 2, b'a', b'b']
        );
        assert_eq!(Value::Null.fingerprint(), vec![VALUE_NULL_TAG]);
    }
}
