//! Text codecs for message text and text-valued TLVs
//!
//! A codec holds application text and knows how to encode it into the byte
//! encoding announced by its `data_coding` value. The TLV setter accepts any
//! codec and stores the bytes produced by [`Codec::encode`].
//!
//! # Supported Encodings
//!
//! | Codec | data_coding | Wire encoding |
//! |---|---|---|
//! | [`Raw`] | 0x00 | bytes passed through unchanged |
//! | [`Latin1`] | 0x03 | ISO-8859-1 |
//! | [`Ucs2`] | 0x08 | UTF-16, big-endian |

pub mod latin1;
pub mod ucs2;

pub use latin1::Latin1;
pub use ucs2::Ucs2;

use smpp_core::{DataCoding, SmppError, SmppResult};
use std::fmt;

/// Text codec interface
#[cfg_attr(test, mockall::automock)]
pub trait Codec: fmt::Debug {
    /// Get the `data_coding` value announcing this encoding
    fn data_coding(&self) -> DataCoding;

    /// Encode the held text to its wire bytes
    fn encode(&self) -> Vec<u8>;
}

/// Raw bytes, sent without any conversion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raw(Vec<u8>);

impl Raw {
    /// Create a raw codec from bytes
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    /// Get the held bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Codec for Raw {
    fn data_coding(&self) -> DataCoding {
        DataCoding::DEFAULT
    }

    fn encode(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// Decode wire bytes announced with `coding` into text
///
/// ISO-8859-1 and UCS2 are converted; every other coding is treated as raw
/// bytes and must be valid UTF-8.
pub fn decode_text(coding: DataCoding, wire: &[u8]) -> SmppResult<String> {
    match coding {
        DataCoding::LATIN1 => Ok(Latin1::from_wire(wire).into_string()),
        DataCoding::UCS2 => Ok(Ucs2::from_wire(wire)?.into_string()),
        _ => String::from_utf8(wire.to_vec()).map_err(|e| {
            SmppError::InvalidText(format!("data_coding {}: {}", coding, e))
        }),
    }
}
