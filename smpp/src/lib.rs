//! Rust implementation of the SMPP protocol
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `smpp-core`: Error handling and shared wire value types
//! - `smpp-pdu`: PDU field codecs (TLV optional parameters, text codecs)
//!
//! # Usage
//!
//! ```rust
//! use smpp::pdufield::{TlvMap, TlvTag};
//!
//! let mut wire: &[u8] = &[0x00, 0x1E, 0x00, 0x03, b'a', b'b', b'c'];
//! let tlvs = TlvMap::from_buf(&mut wire).unwrap();
//! assert_eq!(tlvs.get(TlvTag::RECEIPTED_MESSAGE_ID).unwrap().as_str(), Some("abc"));
//! ```

// Re-export core types
pub use smpp_core::{DataCoding, SmppError, SmppResult};

// Re-export PDU field codecs
pub mod pdufield {
    pub use smpp_pdu::tlv::*;
}

// Re-export text codecs
pub mod pdutext {
    pub use smpp_pdu::text::*;
}
