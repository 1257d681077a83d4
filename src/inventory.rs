// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Peripheral Inventory
//!
//! Immutable tables, indexed by logical unit, of the timer units compiled
//! into this build. `build.rs` turns the presence features into
//! `PRESENT_TC` / `PRESENT_TCC`; the tables here resolve each present unit
//! to its interrupt line and register block through the active
//! [`ChipFamily`].
//!
//! # Invariants
//!
//! - The table length equals the number of present units.
//! - Entry `i` is logical unit `i`: TC entries are the physical units
//!   `TC_OFFSET`, `TC_OFFSET + 1`, ... with no gaps, TCC entries are
//!   `TCC0`, `TCC1`, ...
//!
//! Both are checked while the table is built. For the build's own tables
//! that happens during const evaluation, so a bad presence list is a
//! compile error.

use crate::family::{ActiveFamily, ChipFamily};
use crate::types::{Addr, Irq, PhysicalUnit};

include!(concat!(env!("OUT_DIR"), "/present.rs"));

/// Timer/counter class of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerClass {
    /// Generic TC: compare/match or input capture
    Tc,
    /// TCC: compare/match only
    Tcc,
}

/// One physical counter peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerUnit {
    pub class: TimerClass,
    /// Number as in the datasheet (`TC3` → 3)
    pub physical: PhysicalUnit,
    pub irq: Irq,
    pub base: Addr,
}

impl TimerUnit {
    const EMPTY: TimerUnit = TimerUnit {
        class: TimerClass::Tc,
        physical: 0,
        irq: 0,
        base: 0,
    };

    /// Whether the unit can run in input-capture mode
    pub const fn supports_capture(&self) -> bool {
        matches!(self.class, TimerClass::Tc)
    }
}

/// Logical-index → unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory<const N: usize> {
    units: [TimerUnit; N],
}

impl<const N: usize> Inventory<N> {
    /// Build the TC table for family `F` from the list of present physical units
    ///
    /// # Panics
    ///
    /// If a unit does not exist on `F`, or the list is not the gap-free run
    /// starting at `F::TC_OFFSET`.
    pub const fn tc<F: ChipFamily>(present: [PhysicalUnit; N]) -> Self {
        let mut units = [TimerUnit::EMPTY; N];
        let mut i = 0;
        while i < N {
            let physical = present[i];
            if physical as usize != F::TC_OFFSET as usize + i {
                panic!("TC units must be contiguous from the family's first generic TC");
            }
            let (irq, base) = match (
                F::TC_IRQ[physical as usize],
                F::TC_BASE[physical as usize],
            ) {
                (Some(irq), Some(base)) => (irq, base),
                _ => panic!("TC unit is not present on this chip family"),
            };
            units[i] = TimerUnit {
                class: TimerClass::Tc,
                physical,
                irq,
                base,
            };
            i += 1;
        }
        Self { units }
    }

    /// Build the TCC table for family `F` from the list of present units
    ///
    /// # Panics
    ///
    /// If a unit does not exist on `F`, or the list is not `0, 1, 2, ...`.
    pub const fn tcc<F: ChipFamily>(present: [PhysicalUnit; N]) -> Self {
        let mut units = [TimerUnit::EMPTY; N];
        let mut i = 0;
        while i < N {
            let physical = present[i];
            if physical as usize != i {
                panic!("TCC units must be contiguous from TCC0");
            }
            let (irq, base) = match (
                F::TCC_IRQ[physical as usize],
                F::TCC_BASE[physical as usize],
            ) {
                (Some(irq), Some(base)) => (irq, base),
                _ => panic!("TCC unit is not present on this chip family"),
            };
            units[i] = TimerUnit {
                class: TimerClass::Tcc,
                physical,
                irq,
                base,
            };
            i += 1;
        }
        Self { units }
    }

    /// Number of units in the table
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Unit at logical `index`; out of range is a caller bug and panics
    #[inline]
    pub const fn unit(&self, index: usize) -> &TimerUnit {
        &self.units[index]
    }

    /// Interrupt line of logical unit `index`
    #[inline]
    pub const fn irq(&self, index: usize) -> Irq {
        self.units[index].irq
    }

    /// Logical index of a physical unit, if it is in the table
    pub fn position(&self, physical: PhysicalUnit) -> Option<usize> {
        self.units.iter().position(|unit| unit.physical == physical)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, TimerUnit> {
        self.units.iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Inventory<N> {
    type Item = &'a TimerUnit;
    type IntoIter = core::slice::Iter<'a, TimerUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

// ============================================================================
// Build tables
// ============================================================================

/// Generic timers present in this build, by logical index
pub static TC_INVENTORY: Inventory<TC_INST_NUM> = Inventory::tc::<ActiveFamily>(PRESENT_TC);

/// TCC units present in this build
pub static TCC_INVENTORY: Inventory<TCC_INST_NUM> = Inventory::tcc::<ActiveFamily>(PRESENT_TCC);
