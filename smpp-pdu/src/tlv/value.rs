//! Application values accepted by the TLV setter

use crate::text::{Codec, Latin1, Raw, Ucs2};
use bytes::Bytes;
use std::any::Any;
use std::sync::Arc;

/// Value to store under a TLV tag
///
/// Each variant normalizes to one payload:
///
/// | Variant | Payload |
/// |---|---|
/// | `Absent` | empty |
/// | `Unsigned` | one byte |
/// | `Signed` | one byte, low 8 bits of the value |
/// | `Text` | UTF-8 bytes of the string |
/// | `Bytes` | unchanged |
/// | `Encoded` | output of [`Codec::encode`] |
#[derive(Debug)]
pub enum TlvValue {
    Absent,
    Unsigned(u8),
    /// Truncated to 8 bits with no range check
    Signed(i64),
    Text(String),
    Bytes(Vec<u8>),
    Encoded(Box<dyn Codec>),
}

// Clones the downcast value and converts it through its `From` impl.
macro_rules! downcast_into_value {
    ($value:expr; $($t:ty),* $(,)?) => {
        $(
            if let Some(v) = $value.downcast_ref::<$t>() {
                return Some(TlvValue::from(<$t as Clone>::clone(v)));
            }
        )*
    };
}

impl TlvValue {
    /// Normalize the value into payload bytes
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            TlvValue::Absent => Vec::new(),
            TlvValue::Unsigned(v) => vec![v],
            TlvValue::Signed(v) => vec![v as u8],
            TlvValue::Text(s) => s.into_bytes(),
            TlvValue::Bytes(b) => b,
            TlvValue::Encoded(codec) => codec.encode(),
        }
    }

    /// Convert a dynamically typed value
    ///
    /// This is the entry point for values whose type is only known at runtime.
    /// Returns `None` when the value's type is not one of the accepted shapes;
    /// nothing is coerced or stringified.
    ///
    /// Codecs outside this crate cannot be named here, so they are accepted
    /// type-erased as `Box<dyn Codec>` or `Arc<dyn Codec>`. The codec is
    /// encoded at this point since neither can be cloned out of the borrow.
    pub fn from_any(value: &dyn Any) -> Option<Self> {
        downcast_into_value!(
            value;
            (),
            u8,
            i8,
            i16,
            i32,
            i64,
            isize,
            String,
            &'static str,
            Vec<u8>,
            &'static [u8],
            Bytes,
            Raw,
            Latin1,
            Ucs2,
            Arc<dyn Codec>
        );
        if let Some(codec) = value.downcast_ref::<Box<dyn Codec>>() {
            return Some(TlvValue::Bytes(codec.encode()));
        }
        None
    }
}

impl From<()> for TlvValue {
    fn from(_: ()) -> Self {
        TlvValue::Absent
    }
}

impl<T: Into<TlvValue>> From<Option<T>> for TlvValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(TlvValue::Absent, Into::into)
    }
}

impl From<u8> for TlvValue {
    fn from(v: u8) -> Self {
        TlvValue::Unsigned(v)
    }
}

macro_rules! signed_into_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TlvValue {
                fn from(v: $t) -> Self {
                    TlvValue::Signed(v as i64)
                }
            }
        )*
    };
}

signed_into_value!(i8, i16, i32, i64, isize);

impl From<&str> for TlvValue {
    fn from(s: &str) -> Self {
        TlvValue::Text(s.to_string())
    }
}

impl From<String> for TlvValue {
    fn from(s: String) -> Self {
        TlvValue::Text(s)
    }
}

impl From<&[u8]> for TlvValue {
    fn from(b: &[u8]) -> Self {
        TlvValue::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for TlvValue {
    fn from(b: Vec<u8>) -> Self {
        TlvValue::Bytes(b)
    }
}

impl From<Bytes> for TlvValue {
    fn from(b: Bytes) -> Self {
        TlvValue::Bytes(b.to_vec())
    }
}

impl From<Box<dyn Codec>> for TlvValue {
    fn from(codec: Box<dyn Codec>) -> Self {
        TlvValue::Encoded(codec)
    }
}

impl From<Arc<dyn Codec>> for TlvValue {
    fn from(codec: Arc<dyn Codec>) -> Self {
        TlvValue::Bytes(codec.encode())
    }
}

impl From<Raw> for TlvValue {
    fn from(codec: Raw) -> Self {
        TlvValue::Encoded(Box::new(codec))
    }
}

impl From<Latin1> for TlvValue {
    fn from(codec: Latin1) -> Self {
        TlvValue::Encoded(Box::new(codec))
    }
}

impl From<Ucs2> for TlvValue {
    fn from(codec: Ucs2) -> Self {
        TlvValue::Encoded(Box::new(codec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MockCodec;

    #[test]
    fn test_signed_truncation() {
        assert_eq!(TlvValue::from(-1i32).into_payload(), vec![0xFF]);
        assert_eq!(TlvValue::from(0x1234i64).into_payload(), vec![0x34]);
        assert_eq!(TlvValue::from(300i16).into_payload(), vec![0x2C]);
    }

    #[test]
    fn test_absent_shapes() {
        assert!(TlvValue::from(()).into_payload().is_empty());
        assert!(TlvValue::from(None::<&str>).into_payload().is_empty());
        assert_eq!(TlvValue::from(Some(7u8)).into_payload(), vec![7]);
    }

    #[test]
    fn test_encoded_invokes_codec() {
        let mut codec = MockCodec::new();
        codec.expect_encode().times(1).returning(|| vec![0xAA, 0xBB]);
        let value = TlvValue::from(Box::new(codec) as Box<dyn Codec>);
        assert_eq!(value.into_payload(), vec![0xAA, 0xBB]);
    }

    #[test]
    fn test_from_any_accepted() {
        let text = String::from("abc");
        assert!(matches!(TlvValue::from_any(&text), Some(TlvValue::Text(s)) if s == "abc"));
        assert!(matches!(TlvValue::from_any(&5u8), Some(TlvValue::Unsigned(5))));
        assert!(matches!(TlvValue::from_any(&-2i32), Some(TlvValue::Signed(-2))));
        assert!(matches!(TlvValue::from_any(&()), Some(TlvValue::Absent)));
        assert!(matches!(
            TlvValue::from_any(&Ucs2::new("a")),
            Some(TlvValue::Encoded(_))
        ));
    }

    #[test]
    fn test_from_any_erased_codec() {
        let mut boxed = MockCodec::new();
        boxed.expect_encode().times(1).returning(|| vec![0x01, 0x02]);
        let boxed: Box<dyn Codec> = Box::new(boxed);
        let value = TlvValue::from_any(&boxed).unwrap();
        assert_eq!(value.into_payload(), vec![0x01, 0x02]);

        let mut shared = MockCodec::new();
        shared.expect_encode().times(1).returning(|| vec![0x03]);
        let shared: Arc<dyn Codec> = Arc::new(shared);
        let value = TlvValue::from_any(&shared).unwrap();
        assert_eq!(value.into_payload(), vec![0x03]);
    }

    #[test]
    fn test_from_any_rejected() {
        assert!(TlvValue::from_any(&3.14f64).is_none());
        assert!(TlvValue::from_any(&1000u16).is_none());
        assert!(TlvValue::from_any(&vec!["a"]).is_none());
    }
}
