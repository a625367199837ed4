//! A single TLV record

use crate::tlv::tag::TlvTag;
use bytes::{BufMut, BytesMut};
use serde::Serialize;
use smpp_core::SmppResult;
use std::io::Write;

/// Size of the tag + length header preceding every TLV value
pub const TLV_HEADER_LEN: usize = 4;

/// TLV record
///
/// Holds the tag, the declared length and an owned copy of the value bytes.
/// The declared length is derived from the payload by the only mutator,
/// [`TlvBody::set_payload`], and equals it for payloads up to 65535 bytes.
/// The length field is 16 bits wide: a longer payload wraps the declared
/// length modulo 65536, and serializing such a record misframes whatever
/// follows it. Bounding payload size is left to the PDU layer.
///
/// # Encoding Format
///
/// ```text
/// Tag (u16 BE) | Length (u16 BE) | Value (Length bytes)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlvBody {
    tag: TlvTag,
    len: u16,
    #[serde(with = "serde_bytes")]
    data: Vec<u8>,
}

impl TlvBody {
    /// Create a record with the given payload
    ///
    /// # Arguments
    /// * `tag` - Parameter tag
    /// * `data` - Value bytes; the declared length is taken from it
    pub fn new(tag: TlvTag, data: impl Into<Vec<u8>>) -> Self {
        let mut body = Self {
            tag,
            len: 0,
            data: Vec::new(),
        };
        body.set_payload(data);
        body
    }

    /// Create a record with no value
    pub fn empty(tag: TlvTag) -> Self {
        Self {
            tag,
            len: 0,
            data: Vec::new(),
        }
    }

    /// Build a record from a header and value read off the wire
    ///
    /// The decoder has already checked that `data` holds exactly `len` bytes.
    pub(crate) fn from_wire(tag: TlvTag, len: u16, data: Vec<u8>) -> Self {
        debug_assert_eq!(len as usize, data.len());
        Self { tag, len, data }
    }

    /// Get the tag
    pub fn tag(&self) -> TlvTag {
        self.tag
    }

    /// Get the declared length
    pub fn len(&self) -> u16 {
        self.len
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the raw value bytes
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the record and return its value bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Replace the value and recompute the declared length
    ///
    /// A payload over 65535 bytes wraps the declared length and is logged.
    pub fn set_payload(&mut self, data: impl Into<Vec<u8>>) -> &mut Self {
        self.data = data.into();
        if self.data.len() > u16::MAX as usize {
            log::warn!(
                "TLV {} payload of {} bytes overflows the 16-bit length field",
                self.tag,
                self.data.len()
            );
        }
        self.len = self.data.len() as u16;
        self
    }

    /// Number of bytes this record occupies on the wire
    pub fn encoded_len(&self) -> usize {
        TLV_HEADER_LEN + self.data.len()
    }

    /// Append the binary form of the record to a buffer
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.reserve(self.encoded_len());
        buf.put_u16(self.tag.value());
        buf.put_u16(self.len);
        buf.put_slice(&self.data);
    }

    /// Write the binary form of the record to a sink
    ///
    /// Writes exactly `4 + len` bytes in a single `write_all` call. The only
    /// possible error is the sink's own I/O failure.
    pub fn serialize_to<W: Write>(&self, mut w: W) -> SmppResult<()> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        w.write_all(&buf)?;
        Ok(())
    }

    /// Interpret a 1-byte value as an unsigned integer
    pub fn as_u8(&self) -> Option<u8> {
        match self.data.as_slice() {
            [b] => Some(*b),
            _ => None,
        }
    }

    /// Interpret a 2-byte value as a big-endian unsigned integer
    pub fn as_u16(&self) -> Option<u16> {
        match self.data.as_slice() {
            [hi, lo] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }

    /// Interpret the value as UTF-8 text
    ///
    /// C-octet-string parameters (e.g. `receipted_message_id`) carry a trailing
    /// NUL, which is stripped.
    pub fn as_str(&self) -> Option<&str> {
        let data = self.data.strip_suffix(&[0]).unwrap_or(&self.data);
        std::str::from_utf8(data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smpp_core::SmppError;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_serialize_layout() {
        let body = TlvBody::new(TlvTag::SOURCE_PORT, vec![0x12, 0x34]);
        let mut out = Vec::new();
        body.serialize_to(&mut out).unwrap();
        assert_eq!(out, vec![0x02, 0x0A, 0x00, 0x02, 0x12, 0x34]);
        assert_eq!(out.len(), body.encoded_len());
    }

    #[test]
    fn test_serialize_empty_value() {
        let body = TlvBody::empty(TlvTag::DEST_ADDR_SUBUNIT);
        let mut out = Vec::new();
        body.serialize_to(&mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x05, 0x00, 0x00]);
    }

    #[test]
    fn test_serialize_twice_is_identical() {
        let body = TlvBody::new(TlvTag::MESSAGE_PAYLOAD, b"hello".to_vec());
        let mut first = Vec::new();
        let mut second = Vec::new();
        body.serialize_to(&mut first).unwrap();
        body.serialize_to(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialize_sink_error() {
        let body = TlvBody::new(TlvTag::SOURCE_PORT, vec![0x01]);
        let err = body.serialize_to(BrokenPipe).unwrap_err();
        assert!(matches!(err, SmppError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_set_payload_updates_len() {
        let mut body = TlvBody::new(TlvTag::CALLBACK_NUM, vec![0x01]);
        body.set_payload(vec![0x01, 0x02, 0x03]);
        assert_eq!(body.len(), 3);
        assert_eq!(body.bytes(), &[0x01, 0x02, 0x03]);
        body.set_payload(Vec::new());
        assert_eq!(body.len(), 0);
        assert!(body.is_empty());
    }

    #[test]
    fn test_oversized_payload_wraps_len() {
        let body = TlvBody::new(TlvTag::MESSAGE_PAYLOAD, vec![0u8; 65536 + 5]);
        assert_eq!(body.len(), 5);
        assert_eq!(body.bytes().len(), 65541);

        let body = TlvBody::new(TlvTag::MESSAGE_PAYLOAD, vec![0u8; 65535]);
        assert_eq!(body.len(), u16::MAX);
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(TlvBody::new(TlvTag::SAR_TOTAL_SEGMENTS, vec![3]).as_u8(), Some(3));
        assert_eq!(TlvBody::new(TlvTag::SAR_MSG_REF_NUM, vec![0x01, 0x02]).as_u16(), Some(0x0102));
        assert_eq!(TlvBody::new(TlvTag::SAR_MSG_REF_NUM, vec![0x01]).as_u16(), None);

        let id = TlvBody::new(TlvTag::RECEIPTED_MESSAGE_ID, b"abc123\0".to_vec());
        assert_eq!(id.as_str(), Some("abc123"));
    }
}
