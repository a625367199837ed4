//! PDU field codecs for the SMPP protocol
//!
//! This crate provides the optional-parameter (TLV) sublayer appended to SMPP
//! PDU bodies, and the text codecs used to encode message text for the wire.
//!
//! # Usage Example
//!
//! ```rust
//! use smpp_pdu::tlv::{TlvMap, TlvTag};
//!
//! let mut tlvs = TlvMap::new();
//! tlvs.set(TlvTag::SOURCE_PORT, 1u8);
//! tlvs.set(TlvTag::RECEIPTED_MESSAGE_ID, "abc123");
//!
//! let mut wire = Vec::new();
//! tlvs.serialize_to(&mut wire).unwrap();
//!
//! let decoded = TlvMap::from_buf(&mut wire.as_slice()).unwrap();
//! assert_eq!(decoded.get(TlvTag::SOURCE_PORT).unwrap().bytes(), &[0x01]);
//! ```

pub mod text;
pub mod tlv;

pub use smpp_core::{SmppError, SmppResult};
pub use text::{Codec, Latin1, Raw, Ucs2};
pub use tlv::{DecodeOptions, TlvBody, TlvMap, TlvTag, TlvValue, TrailingBytes};
