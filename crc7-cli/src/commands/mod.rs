//! Command implementations for the CRC-7 CLI.

pub mod compute;
pub mod frame;
pub mod verify;

pub use compute::{ComputeOptions, cmd_compute};
pub use frame::cmd_frame;
pub use verify::cmd_verify;
