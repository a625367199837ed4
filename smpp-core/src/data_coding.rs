use serde::{Deserialize, Serialize};
use std::fmt;

/// SMPP `data_coding` value
///
/// Identifies the character set of a short message or text TLV. The field is a
/// single octet on the wire; values outside the named constants are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataCoding(u8);

impl DataCoding {
    /// SMSC default alphabet
    pub const DEFAULT: Self = Self(0x00);
    /// IA5 (CCITT T.50) / ASCII
    pub const IA5: Self = Self(0x01);
    /// 8-bit binary
    pub const BINARY: Self = Self(0x02);
    /// ISO-8859-1
    pub const LATIN1: Self = Self(0x03);
    /// 8-bit binary (alternative value)
    pub const BINARY_ALT: Self = Self(0x04);
    /// ISO-8859-5
    pub const CYRILLIC: Self = Self(0x06);
    /// UCS2 (ISO/IEC-10646)
    pub const UCS2: Self = Self(0x08);

    /// Create a data coding from its wire value
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the wire value
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for DataCoding {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<DataCoding> for u8 {
    fn from(coding: DataCoding) -> Self {
        coding.0
    }
}

impl fmt::Display for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_coding_value() {
        assert_eq!(DataCoding::UCS2.value(), 0x08);
        assert_eq!(DataCoding::from(0x03), DataCoding::LATIN1);
        assert_eq!(u8::from(DataCoding::BINARY), 0x02);
    }

    #[test]
    fn test_data_coding_display() {
        assert_eq!(format!("{}", DataCoding::UCS2), "0x08");
    }
}
