// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Shared timer interrupt dispatch
//!
//! Every TC and TCC vector ends up here. A TC interrupt is forwarded to
//! exactly one of the two consumer subsystems:
//!
//! - [`Event::Capture`] → frequency measurement
//! - [`Event::Compare`] → pulse generation
//!
//! with the chip-family independent logical index, so consumers never see
//! the SAMD21/SAMD51 numbering difference.
//!
//! TCC interrupts currently have no consumer. They take their own branch,
//! which forwards nothing.
//!
//! # Consumers
//!
//! The consumer set is fixed. [`Consumers`] is implemented by a type known at
//! compile time and called through static dispatch; there is no runtime
//! registration. Firmware builds with the `rt` feature use
//! [`LinkedConsumers`], which calls the entry points exported by the
//! `#[pulse_handler]` and `#[frequency_handler]` attributes.

use crate::classify::{classify, Event};
use crate::family::{logical_index, ChipFamily};
use crate::inventory::{Inventory, TimerClass};
use crate::reg::Registers;
use crate::trace::tm_trace;
use crate::types::{Addr, LogicalIndex, PhysicalUnit};

/// Interrupt entry points of the two consumer subsystems
pub trait Consumers {
    /// Pulse generation: a compare/match fired on TC `index`
    fn pulse_interrupt(&self, index: LogicalIndex);

    /// Frequency measurement: a capture fired on TC `index`
    fn frequency_interrupt(&self, index: LogicalIndex);
}

/// Route one classified interrupt
///
/// For [`TimerClass::Tc`] exactly one consumer entry point is called with
/// `index`. For [`TimerClass::Tcc`] nothing is called.
#[inline]
pub fn dispatch<C: Consumers>(consumers: &C, class: TimerClass, index: LogicalIndex, event: Event) {
    match class {
        TimerClass::Tc => match event {
            Event::Capture => {
                tm_trace!("tc{} capture -> frequency", index);
                consumers.frequency_interrupt(index)
            }
            Event::Compare => {
                tm_trace!("tc{} compare -> pulse", index);
                consumers.pulse_interrupt(index)
            }
        },
        TimerClass::Tcc => {
            tm_trace!("tcc{} {:?}: no consumer", index, event);
        }
    }
}

/// Vector body for physical TC unit `physical`
///
/// Classifies the interrupt from the unit's registers and dispatches it
/// with the index corrected by `F::TC_OFFSET`.
#[inline]
pub fn service_tc<F: ChipFamily, R: Registers, C: Consumers>(
    tc: &R,
    consumers: &C,
    physical: PhysicalUnit,
) {
    let event = classify::<F, R>(tc);
    dispatch(consumers, TimerClass::Tc, logical_index::<F>(physical), event);
}

/// Vector body for physical TC unit `physical`, looked up in `inventory`
///
/// The unit's register block is obtained by handing its base address to
/// `regs_at`. `inventory` must be the TC table of family `F`.
#[inline]
pub fn service_tc_unit<F, R, C, const N: usize>(
    inventory: &Inventory<N>,
    regs_at: impl FnOnce(Addr) -> R,
    consumers: &C,
    physical: PhysicalUnit,
) where
    F: ChipFamily,
    R: Registers,
    C: Consumers,
{
    let unit = inventory.unit(usize::from(logical_index::<F>(physical)));
    debug_assert_eq!(unit.physical, physical);
    let tc = regs_at(unit.base);
    service_tc::<F, R, C>(&tc, consumers, physical);
}

/// Vector body for TCC unit `index`
#[inline]
pub fn service_tcc<C: Consumers>(consumers: &C, index: LogicalIndex) {
    dispatch(consumers, TimerClass::Tcc, index, Event::Compare);
}

// ============================================================================
// Link-time binding
// ============================================================================

#[cfg(feature = "rt")]
extern "C" {
    fn __timermux_pulse_interrupt(index: LogicalIndex);
    fn __timermux_frequency_interrupt(index: LogicalIndex);
}

/// Consumers provided at link time by `#[pulse_handler]` / `#[frequency_handler]`
#[cfg(feature = "rt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedConsumers;

#[cfg(feature = "rt")]
impl Consumers for LinkedConsumers {
    #[inline]
    fn pulse_interrupt(&self, index: LogicalIndex) {
        // SAFETY: the symbol is defined by `#[pulse_handler]` with this exact signature.
        unsafe { __timermux_pulse_interrupt(index) }
    }

    #[inline]
    fn frequency_interrupt(&self, index: LogicalIndex) {
        // SAFETY: the symbol is defined by `#[frequency_handler]` with this exact signature.
        unsafe { __timermux_frequency_interrupt(index) }
    }
}
