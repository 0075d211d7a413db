//! # CRC-7 Core
//!
//! CRC-7 checksum as used by MMC/SD command framing.
//!
//! - [`crc`]: the CRC-7 engine (table-driven and bit-serial)
//! - [`trace`]: observers for bit-level register tracing
//! - [`hex`]: hexadecimal text to byte conversion
//! - [`command`]: SD/MMC SPI command frames
//! - [`error`]: Error types
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Frame: CommandFrame, SdCommand                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Input: hex text parsing, range validation               │
//! ├─────────────────────────────────────────────────────────┤
//! │ Engine: Crc7 register, lookup table, tracing            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use crc7_core::{CommandFrame, SdCommand, crc7, parse_hex_bytes};
//!
//! let bytes = parse_hex_bytes(["40", "00", "00", "00", "00"]).unwrap();
//! assert_eq!(crc7(&bytes), 0x95);
//!
//! let frame = CommandFrame::from_command(SdCommand::SendIfCond, 0x1AA);
//! assert_eq!(frame.to_bytes(), [0x48, 0x00, 0x00, 0x01, 0xAA, 0x87]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod crc;
pub mod error;
pub mod hex;
pub mod trace;

// Re-exports for convenience
pub use command::{CommandFrame, SdCommand};
pub use crc::{CRC7_POLY, Crc7, crc7, crc7_bitwise, crc7_checked};
pub use error::{Crc7Error, Result};
pub use hex::{parse_hex_byte, parse_hex_bytes, parse_hex_string};
pub use trace::{BitStep, Crc7Observer, NoTrace, TraceRecorder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::command::{CommandFrame, SdCommand};
    pub use crate::crc::{Crc7, crc7};
    pub use crate::error::{Crc7Error, Result};
    pub use crate::hex::parse_hex_bytes;
    pub use crate::trace::{Crc7Observer, TraceRecorder};
}
