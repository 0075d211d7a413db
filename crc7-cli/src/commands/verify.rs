//! Verify command implementation.

use super::frame::FrameJson;
use crc7_core::{CommandFrame, parse_hex_string};

pub fn cmd_verify(bytes: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let wire = parse_hex_string(&bytes.join(" "))?;
    let frame = CommandFrame::parse(&wire)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&FrameJson::from_frame(&frame))?
        );
        return Ok(());
    }

    println!("OK: {}", frame);
    Ok(())
}
