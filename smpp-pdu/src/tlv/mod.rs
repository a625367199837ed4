//! TLV (Tag-Length-Value) optional parameters
//!
//! SMPP appends optional parameters to the mandatory body of a PDU as a run of
//! concatenated TLV records:
//!
//! ```text
//! +----------------+----------------+---------------------+
//! |  Tag (2, BE)   | Length (2, BE) |  Value (Length)     |
//! +----------------+----------------+---------------------+
//! ```
//!
//! There is no separator, terminator or record count: the enclosing PDU's
//! `command_length` bounds the bytes handed to [`TlvMap::decode`].
//!
//! # Error Handling
//!
//! A record whose length runs past the end of the buffer is a framing error
//! and aborts the whole decode. The caller must discard the PDU; there is no
//! way to resynchronize after a corrupt length field.

pub mod body;
pub mod map;
pub mod options;
pub mod tag;
pub mod value;

pub use body::{TlvBody, TLV_HEADER_LEN};
pub use map::TlvMap;
pub use options::{DecodeOptions, TrailingBytes};
pub use tag::TlvTag;
pub use value::TlvValue;
