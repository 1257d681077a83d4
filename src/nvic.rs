// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Timer interrupt line control
//!
//! This module provides the enable/disable primitives for a timer unit's
//! interrupt line at the Cortex-M Nested Vectored Interrupt Controller.
//! No timer register is touched here, and none of the writes has an
//! acknowledgment protocol.
//!
//! # Ordering
//!
//! Enabling always goes disable → clear pending → enable. A request latched
//! while the unit was being reconfigured is discarded before the line is
//! opened, so the handler never runs against stale state.

use crate::inventory::{Inventory, TCC_INVENTORY, TC_INVENTORY};
use crate::reg::{Mmio, Registers};
use crate::trace::tm_debug;
use crate::types::{Addr, Irq};

/// Interrupt controller operations needed by this crate
pub trait InterruptController {
    fn disable_irq(&mut self, irq: Irq);
    fn clear_pending(&mut self, irq: Irq);
    fn enable_irq(&mut self, irq: Irq);
    fn is_enabled(&self, irq: Irq) -> bool;
    fn is_pending(&self, irq: Irq) -> bool;
}

// NVIC register offsets from NVIC_BASE
const NVIC_BASE: Addr = 0xE000_E100;
const NVIC_ISER: usize = 0x000;
const NVIC_ICER: usize = 0x080;
const NVIC_ISPR: usize = 0x100;
const NVIC_ICPR: usize = 0x180;

/// Cortex-M NVIC
pub struct Nvic {
    regs: Mmio,
}

impl Nvic {
    /// Obtain a handle to the NVIC
    ///
    /// # Safety
    ///
    /// Must only be called on a Cortex-M core. The handle does not exclude
    /// other NVIC users; callers must not race on the same interrupt line.
    pub unsafe fn steal() -> Self {
        Self {
            regs: Mmio::new(NVIC_BASE),
        }
    }

    #[inline]
    fn word(irq: Irq) -> usize {
        usize::from(irq / 32) * 4
    }

    #[inline]
    fn bit(irq: Irq) -> u32 {
        1 << (irq % 32)
    }
}

/// Make sure a disable has taken effect before anything that follows
#[inline]
fn barrier() {
    #[cfg(target_arch = "arm")]
    {
        cortex_m::asm::dsb();
        cortex_m::asm::isb();
    }
    #[cfg(not(target_arch = "arm"))]
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

impl InterruptController for Nvic {
    fn disable_irq(&mut self, irq: Irq) {
        // ICER is write-one-to-clear; other lines are unaffected.
        self.regs.write_u32(NVIC_ICER + Self::word(irq), Self::bit(irq));
        barrier();
    }

    fn clear_pending(&mut self, irq: Irq) {
        self.regs.write_u32(NVIC_ICPR + Self::word(irq), Self::bit(irq));
    }

    fn enable_irq(&mut self, irq: Irq) {
        self.regs.write_u32(NVIC_ISER + Self::word(irq), Self::bit(irq));
    }

    fn is_enabled(&self, irq: Irq) -> bool {
        self.regs.read_u32(NVIC_ISER + Self::word(irq)) & Self::bit(irq) != 0
    }

    fn is_pending(&self, irq: Irq) -> bool {
        self.regs.read_u32(NVIC_ISPR + Self::word(irq)) & Self::bit(irq) != 0
    }
}

// ============================================================================
// Line control by logical index
// ============================================================================

/// Open the interrupt line of unit `index` in `inventory`, discarding any stale request
///
/// `index` must be below `inventory.len()`.
pub fn enable_interrupts<C: InterruptController, const N: usize>(
    nvic: &mut C,
    inventory: &Inventory<N>,
    index: usize,
) {
    let irq = inventory.irq(index);
    tm_debug!("enable irq {} for unit {}", irq, index);
    nvic.disable_irq(irq);
    nvic.clear_pending(irq);
    nvic.enable_irq(irq);
}

/// Close the interrupt line of unit `index` and drop any pending request
///
/// `index` must be below `inventory.len()`.
pub fn disable_interrupts<C: InterruptController, const N: usize>(
    nvic: &mut C,
    inventory: &Inventory<N>,
    index: usize,
) {
    let irq = inventory.irq(index);
    tm_debug!("disable irq {} for unit {}", irq, index);
    nvic.disable_irq(irq);
    nvic.clear_pending(irq);
}

/// [`enable_interrupts`] on the build's TC table
pub fn tc_enable_interrupts<C: InterruptController>(nvic: &mut C, tc_index: usize) {
    enable_interrupts(nvic, &TC_INVENTORY, tc_index)
}

/// [`disable_interrupts`] on the build's TC table
pub fn tc_disable_interrupts<C: InterruptController>(nvic: &mut C, tc_index: usize) {
    disable_interrupts(nvic, &TC_INVENTORY, tc_index)
}

/// [`enable_interrupts`] on the build's TCC table
pub fn tcc_enable_interrupts<C: InterruptController>(nvic: &mut C, tcc_index: usize) {
    enable_interrupts(nvic, &TCC_INVENTORY, tcc_index)
}

/// [`disable_interrupts`] on the build's TCC table
pub fn tcc_disable_interrupts<C: InterruptController>(nvic: &mut C, tcc_index: usize) {
    disable_interrupts(nvic, &TCC_INVENTORY, tcc_index)
}
