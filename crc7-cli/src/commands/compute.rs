//! Checksum computation over hex byte arguments.

use crate::utils::{OutputFormat, format_byte, format_hex_bytes, format_trace};
use crc7_core::{Crc7, TraceRecorder, parse_hex_bytes};
use serde::Serialize;

/// Options for computing a checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeOptions {
    pub trace: bool,
    pub format: OutputFormat,
    pub json: bool,
}

/// JSON output for a computed checksum.
#[derive(Debug, Serialize)]
struct ComputeJson {
    input: String,
    length: usize,
    crc: u8,
    crc7: u8,
}

/// Render everything the compute command prints; the result is always the last line.
fn render_compute(bytes: &[u8], options: &ComputeOptions) -> Result<String, serde_json::Error> {
    let mut crc = Crc7::new();

    if options.json {
        crc.update(bytes);
        let out = ComputeJson {
            input: format_hex_bytes(bytes),
            length: bytes.len(),
            crc: crc.finalize(),
            crc7: crc.value(),
        };
        return serde_json::to_string_pretty(&out);
    }

    let mut lines = if options.trace {
        let mut trace = TraceRecorder::new();
        crc.update_traced(bytes, &mut trace);
        format_trace(&trace)
    } else {
        crc.update(bytes);
        Vec::new()
    };
    lines.push(format_byte(crc.finalize(), options.format));

    Ok(lines.join("\n"))
}

pub fn cmd_compute(
    args: &[String],
    options: &ComputeOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = parse_hex_bytes(args)?;
    println!("{}", render_compute(&bytes, options)?);
    Ok(())
}
