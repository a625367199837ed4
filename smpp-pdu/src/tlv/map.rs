//! TLV collection keyed by tag

use crate::tlv::body::{TlvBody, TLV_HEADER_LEN};
use crate::tlv::options::{DecodeOptions, TrailingBytes};
use crate::tlv::tag::TlvTag;
use crate::tlv::value::TlvValue;
use bytes::{Buf, BytesMut};
use smpp_core::{SmppError, SmppResult};
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt::Debug;
use std::io::Write;

/// Collection of TLV records indexed by tag
///
/// Holds at most one record per tag. Iteration and encoding follow the order
/// in which tags were first inserted; replacing a record keeps its position.
///
/// # Thread Safety
///
/// The map has no internal locking. Shared references may be read from many
/// threads once decoding is done; mutation needs `&mut`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvMap {
    entries: HashMap<TlvTag, TlvBody>,
    order: Vec<TlvTag>,
}

impl TlvMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every TLV record in `buf` into a new map
    pub fn from_buf<B: Buf>(buf: &mut B) -> SmppResult<Self> {
        let mut map = Self::new();
        map.decode(buf)?;
        Ok(map)
    }

    /// Decode TLV records from a buffer with default options
    ///
    /// See [`TlvMap::decode_with`].
    pub fn decode<B: Buf>(&mut self, buf: &mut B) -> SmppResult<()> {
        self.decode_with(buf, &DecodeOptions::default())
    }

    /// Decode TLV records from a buffer
    ///
    /// Reads records while at least a full header remains and advances `buf`
    /// past each one. A tag seen twice keeps the later record.
    ///
    /// # Error Handling
    /// Returns `SmppError::TlvFraming` if a record declares more bytes than
    /// remain. The error is fatal for the PDU: the map is left untouched, even
    /// for records decoded before the bad one.
    ///
    /// With `TrailingBytes::Reject`, a 1-3 byte remainder fails with
    /// `SmppError::TrailingBytes`; otherwise it is left unread in `buf`.
    pub fn decode_with<B: Buf>(&mut self, buf: &mut B, options: &DecodeOptions) -> SmppResult<()> {
        let mut decoded = Vec::new();

        while buf.remaining() >= TLV_HEADER_LEN {
            let tag = TlvTag::new(buf.get_u16());
            let len = buf.get_u16();

            if buf.remaining() < len as usize {
                log::warn!(
                    "TLV {} declares {} bytes but only {} remain",
                    tag,
                    len,
                    buf.remaining()
                );
                return Err(SmppError::TlvFraming {
                    tag: tag.value(),
                    want: len,
                    have: buf.remaining(),
                });
            }

            let mut data = vec![0u8; len as usize];
            buf.copy_to_slice(&mut data);
            log::trace!("decoded TLV {} ({} bytes)", tag, len);
            decoded.push(TlvBody::from_wire(tag, len, data));
        }

        let rest = buf.remaining();
        if rest > 0 {
            match options.trailing_bytes_policy() {
                TrailingBytes::Ignore => {
                    log::debug!("ignoring {} trailing byte(s) after TLV records", rest);
                }
                TrailingBytes::Reject => {
                    log::warn!("rejecting {} trailing byte(s) after TLV records", rest);
                    return Err(SmppError::TrailingBytes { count: rest });
                }
            }
        }

        for body in decoded {
            self.insert(body);
        }
        Ok(())
    }

    /// Insert a record under its own tag, returning the record it replaced
    pub fn insert(&mut self, body: TlvBody) -> Option<TlvBody> {
        let tag = body.tag();
        let previous = self.entries.insert(tag, body);
        if previous.is_none() {
            self.order.push(tag);
        }
        previous
    }

    /// Store a value under `tag`, replacing any existing record
    ///
    /// The value is normalized to payload bytes as described on [`TlvValue`].
    pub fn set(&mut self, tag: TlvTag, value: impl Into<TlvValue>) -> &TlvBody {
        let body = TlvBody::new(tag, value.into().into_payload());
        self.insert(body);
        &self.entries[&tag]
    }

    /// Store a dynamically typed value under `tag`
    ///
    /// # Error Handling
    /// Returns `SmppError::UnsupportedValue` if the value is not one of the
    /// shapes accepted by [`TlvValue::from_any`]. The map is not modified.
    ///
    /// A codec type defined outside this crate must be passed boxed, as
    /// `Box<dyn Codec>` or `Arc<dyn Codec>`; the concrete type is rejected.
    pub fn set_any<T: Any + Debug>(&mut self, tag: TlvTag, value: &T) -> SmppResult<()> {
        match TlvValue::from_any(value) {
            Some(value) => {
                self.set(tag, value);
                Ok(())
            }
            None => {
                log::warn!("rejecting {} value for TLV {}", type_name::<T>(), tag);
                Err(SmppError::UnsupportedValue {
                    tag: tag.value(),
                    value: format!("{:?} ({})", value, type_name::<T>()),
                })
            }
        }
    }

    /// Get the record for a tag
    pub fn get(&self, tag: TlvTag) -> Option<&TlvBody> {
        self.entries.get(&tag)
    }

    /// Remove the record for a tag
    pub fn remove(&mut self, tag: TlvTag) -> Option<TlvBody> {
        let removed = self.entries.remove(&tag)?;
        self.order.retain(|t| *t != tag);
        Some(removed)
    }

    /// Check if a record exists for a tag
    pub fn contains(&self, tag: TlvTag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over tags in insertion order
    pub fn tags(&self) -> impl Iterator<Item = TlvTag> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TlvBody> + '_ {
        self.order.iter().map(move |tag| &self.entries[tag])
    }

    /// Number of bytes all records occupy on the wire
    pub fn encoded_len(&self) -> usize {
        self.entries.values().map(TlvBody::encoded_len).sum()
    }

    /// Append every record to a buffer in insertion order
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.reserve(self.encoded_len());
        for body in self.iter() {
            body.encode(buf);
        }
    }

    /// Write every record to a sink in insertion order
    pub fn serialize_to<W: Write>(&self, mut w: W) -> SmppResult<()> {
        for body in self.iter() {
            body.serialize_to(&mut w)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TlvMap {
    type Item = &'a TlvBody;
    type IntoIter = Box<dyn Iterator<Item = &'a TlvBody> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
