//! UCS2 text codec

use crate::text::Codec;
use smpp_core::{DataCoding, SmppError, SmppResult};

/// UCS2 text, encoded as big-endian UTF-16
///
/// Characters outside the BMP are written as surrogate pairs, which is what
/// handsets accept in practice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ucs2(String);

impl Ucs2 {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decode big-endian UTF-16 wire bytes
    ///
    /// # Error Handling
    /// Returns error if the byte count is odd or the code units contain an
    /// unpaired surrogate.
    pub fn from_wire(wire: &[u8]) -> SmppResult<Self> {
        if wire.len() % 2 != 0 {
            return Err(SmppError::InvalidText(format!(
                "UCS2 data has odd length: {} bytes",
                wire.len()
            )));
        }

        let units: Vec<u16> = wire
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();

        String::from_utf16(&units)
            .map(Self)
            .map_err(|e| SmppError::InvalidText(format!("UCS2: {}", e)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Codec for Ucs2 {
    fn data_coding(&self) -> DataCoding {
        DataCoding::UCS2
    }

    fn encode(&self) -> Vec<u8> {
        self.0.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucs2_encode() {
        assert_eq!(Ucs2::new("hé").encode(), vec![0x00, 0x68, 0x00, 0xE9]);
    }

    #[test]
    fn test_ucs2_surrogate_pair() {
        let encoded = Ucs2::new("😀").encode();
        assert_eq!(encoded, vec![0xD8, 0x3D, 0xDE, 0x00]);
        assert_eq!(Ucs2::from_wire(&encoded).unwrap().as_str(), "😀");
    }

    #[test]
    fn test_ucs2_odd_length() {
        assert!(Ucs2::from_wire(&[0x00, 0x68, 0x00]).is_err());
    }

    #[test]
    fn test_ucs2_unpaired_surrogate() {
        assert!(Ucs2::from_wire(&[0xD8, 0x3D]).is_err());
    }
}
