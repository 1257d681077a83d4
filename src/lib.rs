// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Timermux - shared TC/TCC interrupt routing for SAMD21/SAMD51
//!
//! Two subsystems share the chip's generic timer/counters: pulse generation
//! (compare/match) and frequency measurement (input capture). Both need the
//! same interrupt vectors. This crate owns those vectors, decides per
//! interrupt which subsystem it belongs to, and forwards it with a
//! family-independent unit index.
//!
//! # Layout
//!
//! - [`inventory`]: which units exist in this build, their IRQ lines and register blocks
//! - [`nvic`]: opening and closing a unit's interrupt line
//! - [`sync`]: CTRLA writes that wait for the peripheral clock domain
//! - [`classify`]: capture vs. compare from the unit's configuration
//! - [`dispatch`]: routing to the consumer subsystems
//!
//! # Configuration
//!
//! Exactly one family feature (`samd21`, `samd51`) plus the presence
//! features of the units on the part (`tc0`..`tc7`, `tcc0`..`tcc4`). The
//! variant features (`samd21g`, `samd51j`, ...) select both. `rt` exports
//! the vector handlers and binds them to the functions marked with
//! [`pulse_handler`] and [`frequency_handler`]. `log` routes trace output
//! through the `log` crate.
//!
//! The default features are `log` and `samd51j`, so that host builds and
//! tests have a concrete inventory. Any other part has to turn the defaults
//! off, or two families end up selected and the build stops:
//!
//! ```toml
//! timermux = { version = "0.1", default-features = false, features = ["log", "samd21g", "rt"] }
//! ```

#![cfg_attr(not(test), no_std)]

mod trace;

pub mod classify;
pub mod dispatch;
pub mod err;
pub mod family;
pub mod inventory;
pub mod nvic;
pub mod reg;
pub mod regs;
pub mod sync;
pub mod types;

#[cfg(all(feature = "rt", target_os = "none"))]
mod vectors;

#[cfg(test)]
mod fake;

pub use classify::{classify, Event, ModeBits};
pub use dispatch::{dispatch, service_tc, service_tc_unit, service_tcc, Consumers};
pub use err::{Error, Result};
pub use family::{logical_index, ActiveFamily, ChipFamily, Samd21, Samd51};
pub use inventory::{Inventory, TimerClass, TimerUnit, TCC_INVENTORY, TC_INVENTORY};
pub use nvic::{
    disable_interrupts, enable_interrupts, tc_disable_interrupts, tc_enable_interrupts,
    tcc_disable_interrupts, tcc_enable_interrupts, InterruptController, Nvic,
};
pub use reg::{Mmio, Registers};
pub use sync::{
    tc_reset, tc_reset_within, tc_set_enable, tc_set_enable_within, tcc_reset, tcc_reset_within,
    tcc_set_enable, tcc_set_enable_within,
};

#[cfg(feature = "rt")]
pub use dispatch::LinkedConsumers;

pub use timermux_macros::{frequency_handler, pulse_handler};
