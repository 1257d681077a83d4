// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Chip Families
//!
//! SAMD21 and SAMD51 expose the same timer concepts with different numbering
//! and register layouts:
//!
//! | | SAMD21 | SAMD51 |
//! |---|---|---|
//! | generic TC units | TC3..TC7 | TC0..TC7 |
//! | TC index offset | 3 | 0 |
//! | capture channel 0 enable | `CTRLC.CPTEN0` | `CTRLA.CAPTEN0` |
//! | TC enable sync indicator | `STATUS.SYNCBUSY` | `SYNCBUSY.ENABLE` |
//! | TCC units | TCC0..TCC2 | TCC0..TCC4 |
//!
//! Each family is a zero-sized type implementing [`ChipFamily`]. Code that
//! depends on the family is generic over it, and the firmware build fixes
//! the choice through [`ActiveFamily`], so the interrupt path never branches
//! on a family tag at runtime.

use crate::classify::ModeBits;
use crate::reg::Registers;
use crate::regs::{self, TcEvctrl};
use crate::types::{Addr, Irq, LogicalIndex, PhysicalUnit};

/// Upper bound on TC units across all families
pub const MAX_TC_UNITS: usize = 8;

/// Upper bound on TCC units across all families
pub const MAX_TCC_UNITS: usize = 5;

/// Per-family hardware facts and register accessors
pub trait ChipFamily {
    const NAME: &'static str;

    /// Subtracted from a physical TC number to get the consumer-facing index
    const TC_OFFSET: u8;

    /// Interrupt line of each physical TC unit, `None` where the family has no such unit
    const TC_IRQ: [Option<Irq>; MAX_TC_UNITS];
    const TC_BASE: [Option<Addr>; MAX_TC_UNITS];

    /// Interrupt line of each TCC unit; on families with several lines per
    /// TCC this is the first (overflow/match) line
    const TCC_IRQ: [Option<Irq>; MAX_TCC_UNITS];
    const TCC_BASE: [Option<Addr>; MAX_TCC_UNITS];

    /// Read the event-input and capture-channel-0 enables of a TC unit
    fn mode_bits<R: Registers>(tc: &R) -> ModeBits;

    /// Read TC CTRLA widened to 32 bits
    fn tc_ctrla<R: Registers>(tc: &R) -> u32;

    /// Write TC CTRLA at the family's register width
    fn write_tc_ctrla<R: Registers>(tc: &R, value: u32);

    /// Whether a TC CTRLA.ENABLE write is still propagating
    fn tc_enable_syncing<R: Registers>(tc: &R) -> bool;
}

/// Translate a physical TC number into the consumer index space
///
/// `physical` must be at least `F::TC_OFFSET`; lower TC numbers do not
/// exist as generic timers on that family.
#[inline]
pub const fn logical_index<F: ChipFamily>(physical: PhysicalUnit) -> LogicalIndex {
    debug_assert!(physical >= F::TC_OFFSET);
    physical - F::TC_OFFSET
}

// ============================================================================
// SAMD21
// ============================================================================

/// SAMD21 family: TC0-TC2 slots are taken by the TCC class, generic TCs start at TC3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Samd21;

impl ChipFamily for Samd21 {
    const NAME: &'static str = "samd21";
    const TC_OFFSET: u8 = 3;

    const TC_IRQ: [Option<Irq>; MAX_TC_UNITS] = [
        None,
        None,
        None,
        Some(18),
        Some(19),
        Some(20),
        Some(21),
        Some(22),
    ];
    const TC_BASE: [Option<Addr>; MAX_TC_UNITS] = [
        None,
        None,
        None,
        Some(0x4200_2C00),
        Some(0x4200_3000),
        Some(0x4200_3400),
        Some(0x4200_3800),
        Some(0x4200_3C00),
    ];

    const TCC_IRQ: [Option<Irq>; MAX_TCC_UNITS] = [Some(15), Some(16), Some(17), None, None];
    const TCC_BASE: [Option<Addr>; MAX_TCC_UNITS] = [
        Some(0x4200_2000),
        Some(0x4200_2400),
        Some(0x4200_2800),
        None,
        None,
    ];

    #[inline]
    fn mode_bits<R: Registers>(tc: &R) -> ModeBits {
        let evctrl = TcEvctrl::from_bits_retain(tc.read_u16(regs::samd21::TC_EVCTRL));
        let ctrlc = regs::samd21::TcCtrlc::from_bits_retain(tc.read_u8(regs::samd21::TC_CTRLC));
        ModeBits {
            event_input: evctrl.contains(TcEvctrl::TCEI),
            capture_ch0: ctrlc.contains(regs::samd21::TcCtrlc::CPTEN0),
        }
    }

    fn tc_ctrla<R: Registers>(tc: &R) -> u32 {
        u32::from(tc.read_u16(regs::samd21::TC_CTRLA))
    }

    fn write_tc_ctrla<R: Registers>(tc: &R, value: u32) {
        // CTRLA is a 16-bit register on this family.
        tc.write_u16(regs::samd21::TC_CTRLA, value as u16);
    }

    fn tc_enable_syncing<R: Registers>(tc: &R) -> bool {
        regs::samd21::TcStatus::from_bits_retain(tc.read_u8(regs::samd21::TC_STATUS))
            .contains(regs::samd21::TcStatus::SYNCBUSY)
    }
}

// ============================================================================
// SAMD51
// ============================================================================

/// SAMD51 family: generic TCs are numbered from TC0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Samd51;

impl ChipFamily for Samd51 {
    const NAME: &'static str = "samd51";
    const TC_OFFSET: u8 = 0;

    const TC_IRQ: [Option<Irq>; MAX_TC_UNITS] = [
        Some(107),
        Some(108),
        Some(109),
        Some(110),
        Some(111),
        Some(112),
        Some(113),
        Some(114),
    ];
    const TC_BASE: [Option<Addr>; MAX_TC_UNITS] = [
        Some(0x4000_3800),
        Some(0x4000_3C00),
        Some(0x4101_A000),
        Some(0x4101_C000),
        Some(0x4200_1400),
        Some(0x4200_1800),
        Some(0x4300_1400),
        Some(0x4300_1800),
    ];

    // First line (TCCn_0) of each TCC; TCC0..TCC4 own 7, 5, 4, 3 and 3 lines.
    const TCC_IRQ: [Option<Irq>; MAX_TCC_UNITS] = [Some(85), Some(92), Some(97), Some(101), Some(104)];
    const TCC_BASE: [Option<Addr>; MAX_TCC_UNITS] = [
        Some(0x4101_6000),
        Some(0x4101_8000),
        Some(0x4200_0C00),
        Some(0x4200_1000),
        Some(0x4300_1000),
    ];

    #[inline]
    fn mode_bits<R: Registers>(tc: &R) -> ModeBits {
        let evctrl = TcEvctrl::from_bits_retain(tc.read_u16(regs::samd51::TC_EVCTRL));
        let ctrla = regs::samd51::TcCtrla::from_bits_retain(tc.read_u32(regs::samd51::TC_CTRLA));
        ModeBits {
            event_input: evctrl.contains(TcEvctrl::TCEI),
            capture_ch0: ctrla.contains(regs::samd51::TcCtrla::CAPTEN0),
        }
    }

    fn tc_ctrla<R: Registers>(tc: &R) -> u32 {
        tc.read_u32(regs::samd51::TC_CTRLA)
    }

    fn write_tc_ctrla<R: Registers>(tc: &R, value: u32) {
        tc.write_u32(regs::samd51::TC_CTRLA, value);
    }

    fn tc_enable_syncing<R: Registers>(tc: &R) -> bool {
        regs::samd51::TcSyncbusy::from_bits_retain(tc.read_u32(regs::samd51::TC_SYNCBUSY))
            .contains(regs::samd51::TcSyncbusy::ENABLE)
    }
}

// ============================================================================
// Build selection
// ============================================================================

/// Family selected by the `samd21` / `samd51` feature
#[cfg(feature = "samd21")]
pub type ActiveFamily = Samd21;

/// Family selected by the `samd21` / `samd51` feature
#[cfg(feature = "samd51")]
pub type ActiveFamily = Samd51;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_correction_samd51() {
        assert_eq!(logical_index::<Samd51>(0), 0);
        assert_eq!(logical_index::<Samd51>(3), 3);
        assert_eq!(logical_index::<Samd51>(7), 7);
    }

    #[test]
    fn test_index_correction_samd21() {
        assert_eq!(logical_index::<Samd21>(3), 0);
        assert_eq!(logical_index::<Samd21>(4), 1);
        assert_eq!(logical_index::<Samd21>(5), 2);
        assert_eq!(logical_index::<Samd21>(7), 4);
    }

    #[test]
    fn test_samd21_reserves_low_tc_slots() {
        for n in 0..Samd21::TC_OFFSET as usize {
            assert!(Samd21::TC_IRQ[n].is_none());
            assert!(Samd21::TC_BASE[n].is_none());
        }
        assert!(Samd21::TC_IRQ[3].is_some());
    }

    #[test]
    fn test_samd51_tcc_lines_are_consecutive_blocks() {
        // Lines per TCC: TCC0_0..TCC0_6, TCC1_0..TCC1_4, TCC2_0..TCC2_3, then three each.
        const LINES: [Irq; MAX_TCC_UNITS] = [7, 5, 4, 3, 3];
        for n in 1..MAX_TCC_UNITS {
            let prev = Samd51::TCC_IRQ[n - 1].unwrap();
            assert_eq!(Samd51::TCC_IRQ[n], Some(prev + LINES[n - 1]), "TCC{}_0", n);
        }
        assert_eq!(Samd51::TCC_IRQ[4], Some(104));
        // TC0 follows the last TCC4 line.
        assert_eq!(Samd51::TC_IRQ[0], Some(Samd51::TCC_IRQ[4].unwrap() + LINES[4]));
    }

    #[test]
    fn test_active_family_follows_feature() {
        #[cfg(feature = "samd21")]
        assert_eq!(ActiveFamily::NAME, "samd21");
        #[cfg(feature = "samd51")]
        assert_eq!(ActiveFamily::NAME, "samd51");
        assert!(!(cfg!(feature = "samd21") && cfg!(feature = "samd51")));
    }

    #[test]
    fn test_tables_agree_on_presence() {
        for n in 0..MAX_TC_UNITS {
            assert_eq!(Samd21::TC_IRQ[n].is_some(), Samd21::TC_BASE[n].is_some());
            assert_eq!(Samd51::TC_IRQ[n].is_some(), Samd51::TC_BASE[n].is_some());
        }
        for n in 0..MAX_TCC_UNITS {
            assert_eq!(Samd21::TCC_IRQ[n].is_some(), Samd21::TCC_BASE[n].is_some());
            assert_eq!(Samd51::TCC_IRQ[n].is_some(), Samd51::TCC_BASE[n].is_some());
        }
    }
}
