//! CRC-7 CLI
//!
//! Computes the MMC/SD CRC-7 of hex bytes given on the command line and
//! builds or checks SD command frames.

mod commands;
mod utils;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{ComputeOptions, cmd_compute, cmd_frame, cmd_verify};
use utils::OutputFormat;

#[derive(Parser)]
#[command(name = "crc7")]
#[command(author, version, about = "CRC-7 checksum for MMC/SD command framing")]
#[command(long_about = "
Computes the 7-bit CRC (polynomial 0x09) of a sequence of hex bytes and prints
the framed result byte (CRC shifted left, stop bit set) as the final line.

Examples:
  crc7 40 00 00 00 00
  crc7 --trace ff 05
  crc7 --format hex 48 00 00 01 aa
  crc7 -- -a
  crc7 frame go-idle-state 0
  crc7 frame cmd8 0x1aa
  crc7 verify 48 00 00 01 aa 87
  crc7 completions bash
")]
#[command(args_conflicts_with_subcommands = true, allow_negative_numbers = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    compute: ComputeArgs,
}

/// Arguments for the default checksum computation.
#[derive(Args, Debug)]
struct ComputeArgs {
    /// Input bytes in hex (ff, 05, 0x40); put values starting with '-' after --
    bytes: Vec<String>,

    /// Print the shift register after every input bit (not with --json)
    #[arg(short, long, conflicts_with = "json")]
    trace: bool,

    /// Output format for the result
    #[arg(short, long, value_enum, default_value = "dec")]
    format: OutputFormat,

    /// Output as JSON (machine-readable)
    #[arg(short, long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an SD command frame
    Frame {
        /// Command name (go-idle-state, send-if-cond, ...), cmdN or index
        command: String,

        /// 32-bit argument, decimal or 0x hex
        #[arg(default_value = "0")]
        argument: String,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Verify a received six-byte command frame
    #[command(alias = "v")]
    Verify {
        /// Frame bytes in hex, separate or packed
        #[arg(required = true, num_args = 1..)]
        bytes: Vec<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Frame {
            command,
            argument,
            json,
        }) => cmd_frame(&command, &argument, json),
        Some(Commands::Verify { bytes, json }) => cmd_verify(&bytes, json),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "crc7", &mut std::io::stdout());
            Ok(())
        }
        None => {
            let options = ComputeOptions {
                trace: cli.compute.trace,
                format: cli.compute.format,
                json: cli.compute.json,
            };
            cmd_compute(&cli.compute.bytes, &options)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
