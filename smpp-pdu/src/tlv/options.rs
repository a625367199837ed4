//! TLV decoder configuration

use serde::{Deserialize, Serialize};

/// Handling of 1-3 bytes left after the last complete TLV record
///
/// Such a remainder is too short to hold a TLV header. Peers in the field do
/// send it, so the default is to leave it in the buffer and succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBytes {
    /// Stop decoding and leave the remainder unread
    #[default]
    Ignore,
    /// Fail with `SmppError::TrailingBytes`
    Reject,
}

/// Options for [`TlvMap::decode_with`](crate::tlv::TlvMap::decode_with)
///
/// # Usage Example
///
/// ```rust
/// use smpp_pdu::tlv::{DecodeOptions, TlvMap, TrailingBytes};
///
/// let options = DecodeOptions::new().trailing_bytes(TrailingBytes::Reject);
/// let mut wire: &[u8] = &[0x02, 0x0A, 0x00, 0x01, 0x01, 0xFF];
/// assert!(TlvMap::new().decode_with(&mut wire, &options).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    trailing_bytes: TrailingBytes,
}

impl DecodeOptions {
    /// Create options with default settings
    ///
    /// # Default Settings
    /// - Trailing bytes: ignored
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject any trailing remainder
    pub fn strict() -> Self {
        Self::new().trailing_bytes(TrailingBytes::Reject)
    }

    /// Set the trailing-byte policy
    pub fn trailing_bytes(mut self, policy: TrailingBytes) -> Self {
        self.trailing_bytes = policy;
        self
    }

    /// Get the trailing-byte policy
    pub fn trailing_bytes_policy(&self) -> TrailingBytes {
        self.trailing_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_trailing_bytes() {
        assert_eq!(DecodeOptions::new().trailing_bytes_policy(), TrailingBytes::Ignore);
    }

    #[test]
    fn test_strict() {
        assert_eq!(DecodeOptions::strict().trailing_bytes_policy(), TrailingBytes::Reject);
    }
}
