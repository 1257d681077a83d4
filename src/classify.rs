// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Capture / compare classification
//!
//! A TC interrupt means an input capture iff the unit has its event input
//! enabled (`EVCTRL.TCEI`) and capture channel 0 enabled (`CPTEN0` on
//! SAMD21, `CAPTEN0` on SAMD51). Anything else is a compare/match.
//!
//! The registers are read on every interrupt. The owning consumer may switch
//! a unit between capture and compare between two interrupts, so nothing is
//! cached here, and nothing is written.

use crate::family::ChipFamily;
use crate::reg::Registers;

/// The two configuration bits that decide a TC interrupt's meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeBits {
    /// Event input enabled
    pub event_input: bool,
    /// Capture channel 0 enabled
    pub capture_ch0: bool,
}

impl ModeBits {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.event_input && self.capture_ch0
    }
}

/// Meaning of one timer interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Input capture, routed to frequency measurement
    Capture,
    /// Compare/match, routed to pulse generation
    Compare,
}

impl From<ModeBits> for Event {
    fn from(bits: ModeBits) -> Self {
        if bits.is_capture() {
            Event::Capture
        } else {
            Event::Compare
        }
    }
}

/// Classify the interrupt currently raised by the TC unit behind `tc`
#[inline]
pub fn classify<F: ChipFamily, R: Registers>(tc: &R) -> Event {
    Event::from(F::mode_bits(tc))
}
