use thiserror::Error;

/// Main error type for SMPP operations
#[derive(Error, Debug)]
pub enum SmppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TLV record declares more payload bytes than the buffer holds.
    #[error("not enough data for tag {tag:#06x}: want {want}, have {have}")]
    TlvFraming { tag: u16, want: u16, have: usize },

    /// Bytes left over after the last complete TLV record (strict decoding only).
    #[error("{count} trailing byte(s) after last TLV record")]
    TrailingBytes { count: usize },

    #[error("unsupported field data for tag {tag:#06x}: {value}")]
    UnsupportedValue { tag: u16, value: String },

    #[error("Invalid text: {0}")]
    InvalidText(String),
}

/// Result type alias for SMPP operations
pub type SmppResult<T> = Result<T, SmppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_error_message() {
        let err = SmppError::TlvFraming {
            tag: 0x0030,
            want: 10,
            have: 3,
        };
        assert_eq!(
            err.to_string(),
            "not enough data for tag 0x0030: want 10, have 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SmppError = io.into();
        assert!(matches!(err, SmppError::Io(_)));
    }
}
