//! Frame command implementation.

use crate::utils::{format_hex_bytes, parse_argument};
use crc7_core::{CommandFrame, Crc7Error, SdCommand};
use serde::Serialize;

/// JSON output for a built frame.
#[derive(Debug, Serialize)]
pub(crate) struct FrameJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub index: u8,
    pub argument: u32,
    pub crc: u8,
    pub bytes: String,
}

impl FrameJson {
    pub(crate) fn from_frame(frame: &CommandFrame) -> Self {
        Self {
            command: frame.command().map(|c| c.name().to_string()),
            index: frame.index(),
            argument: frame.argument(),
            crc: frame.crc(),
            bytes: format_hex_bytes(&frame.to_bytes()),
        }
    }
}

/// Resolve a command given by name, `cmdN` short form or bare index.
fn resolve_frame(command: &str, argument: u32) -> Result<CommandFrame, Crc7Error> {
    if let Some(cmd) = SdCommand::from_name(command) {
        return Ok(CommandFrame::from_command(cmd, argument));
    }

    let lower = command.trim().to_ascii_lowercase();
    let digits = lower
        .strip_prefix("acmd")
        .or_else(|| lower.strip_prefix("cmd"))
        .unwrap_or(lower.as_str());
    let index: u8 = digits
        .parse()
        .map_err(|_| Crc7Error::parse(command, "unknown command"))?;
    CommandFrame::new(index, argument)
}

pub fn cmd_frame(
    command: &str,
    argument: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let argument = parse_argument(argument)?;
    let frame = resolve_frame(command, argument)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&FrameJson::from_frame(&frame))?
        );
        return Ok(());
    }

    if frame.command().is_some_and(SdCommand::is_app_command) {
        println!("Note: send CMD55 (APP_CMD) first");
    }
    println!("Command: {}", frame);
    println!("Frame: {}", format_hex_bytes(&frame.to_bytes()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name() {
        let frame = resolve_frame("go-idle-state", 0).unwrap();
        assert_eq!(frame.to_bytes(), [0x40, 0x00, 0x00, 0x00, 0x00, 0x95]);
    }

    #[test]
    fn test_resolve_raw_index() {
        let frame = resolve_frame("cmd17", 0x200).unwrap();
        assert_eq!(frame.index(), 17);
        assert_eq!(frame.command(), None);

        let frame = resolve_frame("24", 0).unwrap();
        assert_eq!(frame.index(), 24);
    }

    #[test]
    fn test_resolve_errors() {
        assert!(resolve_frame("cmd64", 0).unwrap_err().is_validation());
        assert!(resolve_frame("read-everything", 0).unwrap_err().is_parse());
    }

    #[test]
    fn test_frame_json() {
        let frame = CommandFrame::from_command(SdCommand::SendIfCond, 0x1AA);
        let json = serde_json::to_value(FrameJson::from_frame(&frame)).unwrap();
        assert_eq!(json["command"], "SEND_IF_COND");
        assert_eq!(json["crc"], 0x87);
        assert_eq!(json["bytes"], "48 00 00 01 aa 87");
    }
}
