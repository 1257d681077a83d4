// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Interrupt vector entry points
//!
//! One parameterless handler per present TC/TCC interrupt line, exported
//! under the vector name the device crate's vector table refers to
//! (`TC3`, `TCC0`, ...). Defining the symbol overrides the weak default
//! handler. Each handler only fixes its physical unit number; classification
//! and routing live in [`crate::dispatch`].
//!
//! On SAMD51 a TCC has several interrupt lines. Only the first one
//! (`TCCn_0`, overflow and match) is handled here.

use crate::dispatch::{service_tc_unit, service_tcc, LinkedConsumers};
use crate::family::ActiveFamily;
use crate::inventory::{TC_INST_NUM, TC_INVENTORY};
use crate::reg::Mmio;
use crate::types::PhysicalUnit;

#[inline(always)]
fn on_tc_interrupt(physical: PhysicalUnit) {
    service_tc_unit::<ActiveFamily, _, _, TC_INST_NUM>(
        &TC_INVENTORY,
        // SAFETY: inventory bases are the TC register blocks of the active family.
        |base| unsafe { Mmio::new(base) },
        &LinkedConsumers,
        physical,
    );
}

#[inline(always)]
fn on_tcc_interrupt(index: u8) {
    service_tcc(&LinkedConsumers, index);
}

macro_rules! tc_vectors {
    ($($name:ident => $feature:literal, $physical:literal;)*) => {
        $(
            #[cfg(feature = $feature)]
            #[no_mangle]
            pub extern "C" fn $name() {
                on_tc_interrupt($physical);
            }
        )*
    };
}

macro_rules! tcc_vectors {
    ($($name:ident => $feature:literal, $index:literal;)*) => {
        $(
            #[cfg(feature = $feature)]
            #[no_mangle]
            pub extern "C" fn $name() {
                on_tcc_interrupt($index);
            }
        )*
    };
}

// TC0-TC2 only exist as generic timers on SAMD51; build.rs rejects them on SAMD21.
tc_vectors! {
    TC0 => "tc0", 0;
    TC1 => "tc1", 1;
    TC2 => "tc2", 2;
    TC3 => "tc3", 3;
    TC4 => "tc4", 4;
    TC5 => "tc5", 5;
    TC6 => "tc6", 6;
    TC7 => "tc7", 7;
}

#[cfg(feature = "samd21")]
tcc_vectors! {
    TCC0 => "tcc0", 0;
    TCC1 => "tcc1", 1;
    TCC2 => "tcc2", 2;
}

#[cfg(feature = "samd51")]
tcc_vectors! {
    TCC0_0 => "tcc0", 0;
    TCC1_0 => "tcc1", 1;
    TCC2_0 => "tcc2", 2;
    TCC3_0 => "tcc3", 3;
    TCC4_0 => "tcc4", 4;
}
