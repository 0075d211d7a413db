//! Utility functions for the CLI.

use clap::ValueEnum;
use crc7_core::{BitStep, Crc7Error, TraceRecorder};

/// Line printed after the last bit of each input byte in a trace.
pub const TRACE_BYTE_SEPARATOR: &str = "-----";

/// How the resulting CRC byte is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Decimal (default)
    #[default]
    Dec,
    /// Hexadecimal with 0x prefix
    Hex,
    /// Binary with 0b prefix
    Bin,
}

/// Render a byte in the requested format.
pub fn format_byte(value: u8, format: OutputFormat) -> String {
    match format {
        OutputFormat::Dec => value.to_string(),
        OutputFormat::Hex => format!("{:#04x}", value),
        OutputFormat::Bin => format!("{:#010b}", value),
    }
}

/// Render bytes as space-separated two-digit hex.
pub fn format_hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one register step as `<register> <shifted byte>`.
pub fn format_trace_step(step: &BitStep) -> String {
    format!("{} {}", step.register, step.shifted)
}

/// Render a recorded trace: one line per bit, a separator after each byte.
pub fn format_trace(trace: &TraceRecorder) -> Vec<String> {
    let mut lines = Vec::with_capacity(trace.steps().len() + trace.byte_ends().len());
    for byte_index in 0..trace.byte_ends().len() {
        lines.extend(trace.steps_for_byte(byte_index).iter().map(format_trace_step));
        lines.push(TRACE_BYTE_SEPARATOR.to_string());
    }
    lines
}

/// Parse a command argument given in decimal or as `0x` hex.
pub fn parse_argument(text: &str) -> Result<u32, Crc7Error> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|e| Crc7Error::parse(text, e.to_string()))
}
