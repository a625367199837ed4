//! ISO-8859-1 text codec

use crate::text::Codec;
use smpp_core::DataCoding;

/// ISO-8859-1 (Latin-1) text
///
/// Characters outside U+0000..=U+00FF have no Latin-1 form and are encoded
/// as `?`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Latin1(String);

impl Latin1 {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decode ISO-8859-1 wire bytes
    ///
    /// Every byte maps to the code point of the same value, so this cannot fail.
    pub fn from_wire(wire: &[u8]) -> Self {
        Self(wire.iter().map(|&b| char::from(b)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Codec for Latin1 {
    fn data_coding(&self) -> DataCoding {
        DataCoding::LATIN1
    }

    fn encode(&self) -> Vec<u8> {
        self.0
            .chars()
            .map(|c| u8::try_from(c).unwrap_or(b'?'))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_encode() {
        assert_eq!(Latin1::new("café").encode(), vec![0x63, 0x61, 0x66, 0xE9]);
    }

    #[test]
    fn test_latin1_unmappable() {
        assert_eq!(Latin1::new("a€b").encode(), b"a?b".to_vec());
    }

    #[test]
    fn test_latin1_from_wire() {
        let text = Latin1::from_wire(&[0x48, 0xE9, 0xFF]);
        assert_eq!(text.as_str(), "Héÿ");
    }
}
