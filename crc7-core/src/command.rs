//! SD/MMC command frames protected by CRC-7.
//!
//! In SPI mode every command is a 48-bit frame:
//!
//! ```text
//! 0 1 C C C C C C | A A A A A A A A x4 | R R R R R R R 1
//! start + index     32-bit argument (BE)  CRC-7 + stop bit
//! ```
//!
//! The CRC byte is [`crc7`] over the first five bytes.

use crate::crc::crc7;
use crate::error::{Crc7Error, Result};
use std::fmt;

/// Length of a command frame in bytes.
pub const FRAME_LEN: usize = 6;

/// Start bits `01` in the top of the first frame byte.
pub const START_BITS: u8 = 0x40;

const START_MASK: u8 = 0xC0;

/// Largest command index that fits in six bits.
pub const MAX_COMMAND_INDEX: u8 = 0x3F;

/// Commands issued while bringing up a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdCommand {
    /// CMD0: software reset into idle state.
    GoIdleState,
    /// CMD8: send interface condition (voltage check).
    SendIfCond,
    /// CMD9: read the card-specific data register.
    SendCsd,
    /// CMD10: read the card identification register.
    SendCid,
    /// ACMD41: start initialization; must follow CMD55.
    SendOpCond,
    /// CMD55: next command is an application command.
    AppCommand,
    /// CMD58: read the operating conditions register.
    ReadOcr,
    /// CMD59: turn CRC checking on or off.
    CrcOnOff,
}

impl SdCommand {
    /// All known commands, ordered by index.
    pub const ALL: [SdCommand; 8] = [
        SdCommand::GoIdleState,
        SdCommand::SendIfCond,
        SdCommand::SendCsd,
        SdCommand::SendCid,
        SdCommand::SendOpCond,
        SdCommand::AppCommand,
        SdCommand::ReadOcr,
        SdCommand::CrcOnOff,
    ];

    /// The 6-bit command index.
    pub fn index(self) -> u8 {
        match self {
            SdCommand::GoIdleState => 0,
            SdCommand::SendIfCond => 8,
            SdCommand::SendCsd => 9,
            SdCommand::SendCid => 10,
            SdCommand::SendOpCond => 41,
            SdCommand::AppCommand => 55,
            SdCommand::ReadOcr => 58,
            SdCommand::CrcOnOff => 59,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            SdCommand::GoIdleState => "GO_IDLE_STATE",
            SdCommand::SendIfCond => "SEND_IF_COND",
            SdCommand::SendCsd => "SEND_CSD",
            SdCommand::SendCid => "SEND_CID",
            SdCommand::SendOpCond => "SD_SEND_OP_COND",
            SdCommand::AppCommand => "APP_CMD",
            SdCommand::ReadOcr => "READ_OCR",
            SdCommand::CrcOnOff => "CRC_ON_OFF",
        }
    }

    /// Whether the command must be preceded by CMD55.
    pub fn is_app_command(self) -> bool {
        matches!(self, SdCommand::SendOpCond)
    }

    /// Look up a command by index.
    ///
    /// Index 41 is only meaningful as an application command and is reported
    /// as [`SdCommand::SendOpCond`].
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.index() == index)
    }

    /// Look up a command by name (`"GO_IDLE_STATE"`, `"go-idle-state"`),
    /// short form (`"cmd8"`, `"acmd41"`) or decimal index.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        if let Some(idx) = normalized
            .strip_prefix("ACMD")
            .or_else(|| normalized.strip_prefix("CMD"))
            .or(Some(normalized.as_str()))
            .and_then(|n| n.parse::<u8>().ok())
        {
            return Self::from_index(idx);
        }
        Self::ALL.into_iter().find(|c| {
            c.name() == normalized || c.name().strip_prefix("SD_") == Some(normalized.as_str())
        })
    }
}

impl fmt::Display for SdCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_app_command() { "ACMD" } else { "CMD" };
        write!(f, "{}{} ({})", prefix, self.index(), self.name())
    }
}

/// A command index together with its 32-bit argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandFrame {
    index: u8,
    argument: u32,
}

impl CommandFrame {
    /// Create a frame for a raw command index.
    ///
    /// # Errors
    ///
    /// [`Crc7Error::Validation`] if `index` does not fit in six bits.
    pub fn new(index: u8, argument: u32) -> Result<Self> {
        if index > MAX_COMMAND_INDEX {
            return Err(Crc7Error::out_of_range(
                0,
                index as i64,
                MAX_COMMAND_INDEX as i64,
            ));
        }
        Ok(Self { index, argument })
    }

    /// Create a frame for a known command.
    pub fn from_command(command: SdCommand, argument: u32) -> Self {
        Self {
            index: command.index(),
            argument,
        }
    }

    /// The 6-bit command index.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The 32-bit argument.
    pub fn argument(&self) -> u32 {
        self.argument
    }

    /// The known command for this index, if any.
    pub fn command(&self) -> Option<SdCommand> {
        SdCommand::from_index(self.index)
    }

    /// The five bytes covered by the CRC.
    pub fn header(&self) -> [u8; 5] {
        let [a0, a1, a2, a3] = self.argument.to_be_bytes();
        [START_BITS | self.index, a0, a1, a2, a3]
    }

    /// The framed CRC byte.
    pub fn crc(&self) -> u8 {
        crc7(&self.header())
    }

    /// The full six-byte frame.
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let h = self.header();
        [h[0], h[1], h[2], h[3], h[4], crc7(&h)]
    }

    /// Decode and verify a received frame.
    ///
    /// # Errors
    ///
    /// - [`Crc7Error::FrameLength`] unless exactly six bytes are given
    /// - [`Crc7Error::InvalidStartBits`] if the first byte does not start with `01`
    /// - [`Crc7Error::CrcMismatch`] if the last byte is not the expected CRC
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| Crc7Error::frame_length(FRAME_LEN, bytes.len()))?;

        if bytes[0] & START_MASK != START_BITS {
            return Err(Crc7Error::InvalidStartBits { byte: bytes[0] });
        }

        let computed = crc7(&bytes[..5]);
        if bytes[5] != computed {
            return Err(Crc7Error::crc_mismatch(bytes[5], computed));
        }

        Ok(Self {
            index: bytes[0] & MAX_COMMAND_INDEX,
            argument: u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]),
        })
    }
}

impl fmt::Display for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command() {
            Some(cmd) => write!(f, "{}", cmd)?,
            None => write!(f, "CMD{}", self.index)?,
        }
        write!(f, " arg={:#010x} crc={:#04x}", self.argument, self.crc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_frames() {
        assert_eq!(
            CommandFrame::from_command(SdCommand::GoIdleState, 0).to_bytes(),
            [0x40, 0x00, 0x00, 0x00, 0x00, 0x95]
        );
        assert_eq!(
            CommandFrame::from_command(SdCommand::SendIfCond, 0x1AA).to_bytes(),
            [0x48, 0x00, 0x00, 0x01, 0xAA, 0x87]
        );
        assert_eq!(CommandFrame::from_command(SdCommand::AppCommand, 0).crc(), 0x65);
        assert_eq!(
            CommandFrame::from_command(SdCommand::SendOpCond, 0x4000_0000).crc(),
            0x77
        );
        assert_eq!(CommandFrame::from_command(SdCommand::ReadOcr, 0).crc(), 0xFD);
        assert_eq!(CommandFrame::from_command(SdCommand::CrcOnOff, 0).crc(), 0x91);
    }

    #[test]
    fn test_new_rejects_wide_index() {
        assert!(CommandFrame::new(63, 0).is_ok());
        let err = CommandFrame::new(64, 0).unwrap_err();
        assert_eq!(err, Crc7Error::out_of_range(0, 64, 63));
    }

    #[test]
    fn test_parse_valid() {
        let frame = CommandFrame::parse(&[0x48, 0x00, 0x00, 0x01, 0xAA, 0x87]).unwrap();
        assert_eq!(frame.index(), 8);
        assert_eq!(frame.argument(), 0x1AA);
        assert_eq!(frame.command(), Some(SdCommand::SendIfCond));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            CommandFrame::parse(&[0x40, 0, 0, 0, 0]),
            Err(Crc7Error::frame_length(6, 5))
        );
        assert_eq!(
            CommandFrame::parse(&[0x80, 0, 0, 0, 0, 0x95]),
            Err(Crc7Error::InvalidStartBits { byte: 0x80 })
        );
        assert_eq!(
            CommandFrame::parse(&[0x40, 0, 0, 0, 0, 0x94]),
            Err(Crc7Error::crc_mismatch(0x94, 0x95))
        );
    }

    #[test]
    fn test_command_lookup() {
        for cmd in SdCommand::ALL {
            assert_eq!(SdCommand::from_index(cmd.index()), Some(cmd));
            assert_eq!(SdCommand::from_name(cmd.name()), Some(cmd));
        }
        assert_eq!(SdCommand::from_name("go-idle-state"), Some(SdCommand::GoIdleState));
        assert_eq!(SdCommand::from_name("cmd8"), Some(SdCommand::SendIfCond));
        assert_eq!(SdCommand::from_name("ACMD41"), Some(SdCommand::SendOpCond));
        assert_eq!(SdCommand::from_name("send_op_cond"), Some(SdCommand::SendOpCond));
        assert_eq!(SdCommand::from_name("58"), Some(SdCommand::ReadOcr));
        assert_eq!(SdCommand::from_name("cmd17"), None);
        assert_eq!(SdCommand::from_name("bogus"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SdCommand::SendOpCond.to_string(), "ACMD41 (SD_SEND_OP_COND)");
        let frame = CommandFrame::from_command(SdCommand::GoIdleState, 0);
        assert_eq!(frame.to_string(), "CMD0 (GO_IDLE_STATE) arg=0x00000000 crc=0x95");
        let frame = CommandFrame::new(17, 0x200).unwrap();
        assert_eq!(frame.to_string(), "CMD17 arg=0x00000200 crc=0x79");
    }
}
