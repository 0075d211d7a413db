//! CRC-7 implementation.
//!
//! This is the 7-bit CRC used to protect MMC/SD command frames:
//!
//! - Polynomial: x^7 + x^3 + 1 (0x09, leading term implicit)
//! - Initial value: 0
//! - Input: MSB-first, no reflection
//! - Output: the 7-bit CRC shifted left by one with the stop bit set
//!
//! The register is kept as a `u8` in the same convention the bit-serial
//! algorithm uses: after each shift the tap is applied when the incoming data
//! bit differs from register bit 7. Only the low seven bits form the CRC.
//!
//! [`Crc7::update`] processes whole bytes through a 256-entry lookup table.
//! Feeding byte `b` into register `r` is exactly `TABLE[(r << 1) ^ b]`, so the
//! table path and the bit-serial path ([`crc7_bitwise`]) produce identical
//! registers, not only identical results.

use crate::error::{Crc7Error, Result};
use crate::trace::{BitStep, Crc7Observer};

/// Feedback polynomial tap.
pub const CRC7_POLY: u8 = 0x09;

/// Framing bit forced on in the low position of the result.
pub const CRC7_STOP_BIT: u8 = 0x01;

/// Mask selecting the seven CRC bits of the register.
pub const CRC7_MASK: u8 = 0x7F;

/// CRC-7 lookup table (polynomial 0x09, MSB-first).
const CRC7_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = crc7_step(0, i as u8);
        i += 1;
    }
    table
};

/// Run the register through the eight bits of `byte`, most significant first.
#[inline]
const fn crc7_step(register: u8, byte: u8) -> u8 {
    let mut crc = register;
    let mut k = 0;
    while k < 8 {
        crc <<= 1;
        let bit = (byte >> (7 - k)) & 1;
        if bit != (crc >> 7) {
            crc ^= CRC7_POLY;
        }
        k += 1;
    }
    crc
}

/// Apply the framing transform to a raw register.
#[inline(always)]
const fn frame(register: u8) -> u8 {
    (register << 1) | CRC7_STOP_BIT
}

/// CRC-7 calculator.
///
/// # Example
///
/// ```
/// use crc7_core::crc::Crc7;
///
/// let mut crc = Crc7::new();
/// crc.update(&[0x40, 0x00]);
/// crc.update(&[0x00, 0x00, 0x00]);
/// assert_eq!(crc.finalize(), 0x95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc7 {
    register: u8,
}

impl Crc7 {
    /// Create a new CRC-7 calculator.
    pub const fn new() -> Self {
        Self { register: 0 }
    }

    /// Reset the CRC to its initial state.
    pub fn reset(&mut self) {
        self.register = 0;
    }

    /// Update the CRC with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        let mut reg = self.register;
        for &byte in data {
            reg = CRC7_TABLE[((reg << 1) ^ byte) as usize];
        }
        self.register = reg;
    }

    /// Update the CRC with a single byte.
    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        self.register = CRC7_TABLE[((self.register << 1) ^ byte) as usize];
    }

    /// Update the CRC one bit at a time, reporting each step to `observer`.
    ///
    /// Byte indices passed to the observer are relative to `data`.
    pub fn update_traced<O: Crc7Observer>(&mut self, data: &[u8], mut observer: O) {
        let mut crc = self.register;
        for (byte_index, &byte) in data.iter().enumerate() {
            for bit_index in 0..8u8 {
                crc <<= 1;
                let input_bit = (byte >> (7 - bit_index)) & 1 == 1;
                let feedback = input_bit != (crc & 0x80 != 0);
                if feedback {
                    crc ^= CRC7_POLY;
                }
                observer.on_bit(&BitStep {
                    byte_index,
                    bit_index,
                    input_bit,
                    feedback,
                    register: crc,
                    shifted: (byte as u16) << (bit_index + 1),
                });
            }
            observer.on_byte_end(byte_index, crc);
        }
        self.register = crc;
    }

    /// The raw 8-bit shift register.
    #[inline(always)]
    pub fn register(&self) -> u8 {
        self.register
    }

    /// Get the current 7-bit CRC (without the stop bit).
    #[inline(always)]
    pub fn value(&self) -> u8 {
        self.register & CRC7_MASK
    }

    /// Finalize and return the framed CRC byte.
    #[inline(always)]
    pub fn finalize(self) -> u8 {
        frame(self.register)
    }

    /// Compute the framed CRC-7 of a slice in one call.
    #[inline]
    pub fn compute(data: &[u8]) -> u8 {
        let mut crc = Self::new();
        crc.update(data);
        crc.finalize()
    }
}

impl Default for Crc7 {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the framed CRC-7 of `data`.
///
/// ```
/// assert_eq!(crc7_core::crc7(&[]), 0x01);
/// assert_eq!(crc7_core::crc7(b"123456789"), 0xEB);
/// ```
#[inline]
pub fn crc7(data: &[u8]) -> u8 {
    Crc7::compute(data)
}

/// Compute the framed CRC-7 of `data` with the bit-serial algorithm.
///
/// Slower than [`crc7`] but follows the shift register bit by bit.
pub fn crc7_bitwise(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        crc = crc7_step(crc, byte);
    }
    frame(crc)
}

/// Compute the framed CRC-7 of integer values, rejecting anything outside 0..=255.
///
/// # Errors
///
/// Returns [`Crc7Error::Validation`] for the first out-of-range value.
pub fn crc7_checked<T: Copy + Into<i64>>(values: &[T]) -> Result<u8> {
    let mut crc = Crc7::new();
    for (index, &value) in values.iter().enumerate() {
        let value: i64 = value.into();
        let byte = u8::try_from(value).map_err(|_| Crc7Error::out_of_byte_range(index, value))?;
        crc.update_byte(byte);
    }
    Ok(crc.finalize())
}
