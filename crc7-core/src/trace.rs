//! Bit-level tracing of the CRC-7 shift register.
//!
//! [`Crc7::update_traced`](crate::crc::Crc7::update_traced) reports every
//! register step to a [`Crc7Observer`]. Tracing is purely diagnostic and never
//! changes the computed value.

/// State of the shift register after one input bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitStep {
    /// Index of the input byte this bit belongs to.
    pub byte_index: usize,
    /// Bit position within the byte, 0 being the most significant bit.
    pub bit_index: u8,
    /// The input bit that was fed in.
    pub input_bit: bool,
    /// Whether the polynomial tap was applied on this step.
    pub feedback: bool,
    /// The 8-bit register after the step.
    pub register: u8,
    /// The input byte shifted left past the consumed bit.
    pub shifted: u16,
}

/// Receives register steps while a CRC is being computed.
pub trait Crc7Observer {
    /// Called after every input bit.
    fn on_bit(&mut self, step: &BitStep);

    /// Called after the eighth bit of each input byte.
    fn on_byte_end(&mut self, byte_index: usize, register: u8) {
        let _ = (byte_index, register);
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Crc7Observer for NoTrace {
    #[inline(always)]
    fn on_bit(&mut self, _step: &BitStep) {}
}

/// Observer that records every step for later inspection.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    steps: Vec<BitStep>,
    byte_ends: Vec<u8>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded bit steps, in input order.
    pub fn steps(&self) -> &[BitStep] {
        &self.steps
    }

    /// Register value at the end of each input byte.
    pub fn byte_ends(&self) -> &[u8] {
        &self.byte_ends
    }

    /// Steps recorded for a single input byte.
    pub fn steps_for_byte(&self, byte_index: usize) -> &[BitStep] {
        let start = (byte_index * 8).min(self.steps.len());
        let end = (start + 8).min(self.steps.len());
        &self.steps[start..end]
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.byte_ends.clear();
    }
}

impl Crc7Observer for TraceRecorder {
    fn on_bit(&mut self, step: &BitStep) {
        self.steps.push(*step);
    }

    fn on_byte_end(&mut self, _byte_index: usize, register: u8) {
        self.byte_ends.push(register);
    }
}

impl<O: Crc7Observer + ?Sized> Crc7Observer for &mut O {
    fn on_bit(&mut self, step: &BitStep) {
        (**self).on_bit(step);
    }

    fn on_byte_end(&mut self, byte_index: usize, register: u8) {
        (**self).on_byte_end(byte_index, register);
    }
}
