//! Error types for CRC-7 operations.
//!
//! The checksum itself cannot fail. Errors come from turning untrusted input
//! (hex text, wide integers, received frames) into bytes the engine accepts.

use thiserror::Error;

/// The main error type for CRC-7 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Crc7Error {
    /// Input text is not a valid hexadecimal byte representation.
    #[error("Invalid hex byte {input:?}: {reason}")]
    Parse {
        /// The offending input text.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// A numeric value lies outside the range the engine accepts.
    #[error("Value {value} at index {index} is out of range (expected 0..={max})")]
    Validation {
        /// Position of the value in the input sequence.
        index: usize,
        /// The rejected value.
        value: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A command frame has the wrong number of bytes.
    #[error("Invalid frame length: expected {expected} bytes, found {found}")]
    FrameLength {
        /// Required frame length.
        expected: usize,
        /// Actual frame length.
        found: usize,
    },

    /// The leading `01` start bits of a command frame are missing.
    #[error("Invalid start bits in command byte {byte:#04x}")]
    InvalidStartBits {
        /// The first frame byte.
        byte: u8,
    },

    /// The CRC byte of a frame does not match its contents.
    #[error("CRC mismatch: expected {expected:#04x}, computed {computed:#04x}")]
    CrcMismatch {
        /// CRC byte found in the frame.
        expected: u8,
        /// CRC byte computed from the frame header.
        computed: u8,
    },
}

/// Result type alias for CRC-7 operations.
pub type Result<T> = std::result::Result<T, Crc7Error>;

impl Crc7Error {
    /// Create a parse error.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error for a value that does not fit in a byte.
    pub fn out_of_byte_range(index: usize, value: i64) -> Self {
        Self::Validation {
            index,
            value,
            max: u8::MAX as i64,
        }
    }

    /// Create a validation error with an explicit upper bound.
    pub fn out_of_range(index: usize, value: i64, max: i64) -> Self {
        Self::Validation { index, value, max }
    }

    /// Create a frame length error.
    pub fn frame_length(expected: usize, found: usize) -> Self {
        Self::FrameLength { expected, found }
    }

    /// Create a CRC mismatch error.
    pub fn crc_mismatch(expected: u8, computed: u8) -> Self {
        Self::CrcMismatch { expected, computed }
    }

    /// Whether this is a text parsing failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Whether this is a range validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Attach an argument position to a validation error raised for a single value.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            Self::Validation { value, max, .. } => Self::Validation { index, value, max },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Crc7Error::parse("zz", "invalid digit");
        assert!(err.to_string().contains("\"zz\""));

        let err = Crc7Error::out_of_byte_range(2, 256);
        assert!(err.to_string().contains("256"));
        assert!(err.to_string().contains("0..=255"));

        let err = Crc7Error::crc_mismatch(0x95, 0x01);
        assert_eq!(err.to_string(), "CRC mismatch: expected 0x95, computed 0x01");
    }

    #[test]
    fn test_error_kinds() {
        assert!(Crc7Error::parse("g", "bad").is_parse());
        assert!(!Crc7Error::parse("g", "bad").is_validation());
        assert!(Crc7Error::out_of_byte_range(0, -1).is_validation());
        assert!(!Crc7Error::frame_length(6, 5).is_parse());
    }

    #[test]
    fn test_at_index() {
        let err = Crc7Error::out_of_byte_range(0, 300).at_index(4);
        assert_eq!(
            err,
            Crc7Error::Validation {
                index: 4,
                value: 300,
                max: 255
            }
        );

        let err = Crc7Error::parse("x", "bad").at_index(4);
        assert!(err.is_parse());
    }
}
