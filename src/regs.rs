// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! TC/TCC Register Definitions
//!
//! Offsets and bit definitions for the parts of the TC (16-bit counter mode)
//! and TCC register blocks this crate reads or writes. Only fields that the
//! routing and synchronization code depends on are described here; the rest
//! of each block belongs to the consumer subsystems.
//!
//! | Register | SAMD21 TC | SAMD51 TC | TCC (both) |
//! |----------|-----------|-----------|------------|
//! | CTRLA    | 0x00 (16-bit) | 0x00 (32-bit) | 0x00 (32-bit) |
//! | CTRLC    | 0x06 | - | - |
//! | EVCTRL   | 0x0A | 0x06 | - |
//! | STATUS   | 0x0F | - | - |
//! | SYNCBUSY | - | 0x10 | 0x08 |

use bitflags::bitflags;

// ============================================================================
// TC, SAMD21 layout
// ============================================================================

pub mod samd21 {
    use bitflags::bitflags;

    pub const TC_CTRLA: usize = 0x00;
    pub const TC_CTRLC: usize = 0x06;
    pub const TC_EVCTRL: usize = 0x0A;
    pub const TC_STATUS: usize = 0x0F;

    bitflags! {
        /// COUNT16.CTRLA
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct TcCtrla: u16 {
            const SWRST = 1 << 0;
            const ENABLE = 1 << 1;
        }
    }

    bitflags! {
        /// COUNT16.CTRLC
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct TcCtrlc: u8 {
            const INVEN0 = 1 << 0;
            const INVEN1 = 1 << 1;
            const CPTEN0 = 1 << 4;
            const CPTEN1 = 1 << 5;
        }
    }

    bitflags! {
        /// COUNT16.STATUS
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct TcStatus: u8 {
            const STOP = 1 << 3;
            const SLAVE = 1 << 4;
            const SYNCBUSY = 1 << 7;
        }
    }
}

// ============================================================================
// TC, SAMD51 layout
// ============================================================================

pub mod samd51 {
    use bitflags::bitflags;

    pub const TC_CTRLA: usize = 0x00;
    pub const TC_EVCTRL: usize = 0x06;
    pub const TC_SYNCBUSY: usize = 0x10;

    bitflags! {
        /// COUNT16.CTRLA
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct TcCtrla: u32 {
            const SWRST = 1 << 0;
            const ENABLE = 1 << 1;
            const CAPTEN0 = 1 << 16;
            const CAPTEN1 = 1 << 17;
            const COPEN0 = 1 << 20;
            const COPEN1 = 1 << 21;
        }
    }

    bitflags! {
        /// COUNT16.SYNCBUSY
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct TcSyncbusy: u32 {
            const SWRST = 1 << 0;
            const ENABLE = 1 << 1;
            const CTRLB = 1 << 2;
            const STATUS = 1 << 3;
            const COUNT = 1 << 4;
            const PER = 1 << 5;
            const CC0 = 1 << 6;
            const CC1 = 1 << 7;
        }
    }
}

// ============================================================================
// Shared TC fields
// ============================================================================

bitflags! {
    /// COUNT16.EVCTRL, identical bit positions on both families
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TcEvctrl: u16 {
        const TCINV = 1 << 4;
        /// TC event input enable
        const TCEI = 1 << 5;
        const OVFEO = 1 << 8;
        const MCEO0 = 1 << 12;
        const MCEO1 = 1 << 13;
    }
}

// ============================================================================
// TCC (both families)
// ============================================================================

pub const TCC_CTRLA: usize = 0x00;
pub const TCC_SYNCBUSY: usize = 0x08;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TccCtrla: u32 {
        const SWRST = 1 << 0;
        const ENABLE = 1 << 1;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TccSyncbusy: u32 {
        const SWRST = 1 << 0;
        const ENABLE = 1 << 1;
        const CTRLB = 1 << 2;
        const STATUS = 1 << 3;
        const COUNT = 1 << 4;
        const PATT = 1 << 5;
        const WAVE = 1 << 6;
        const PER = 1 << 7;
    }
}

// ============================================================================
// Prescaler
// ============================================================================

/// Clock divisor for each CTRLA.PRESCALER setting (DIV1 through DIV1024)
pub const PRESCALER_DIVISORS: [u16; 8] = [1, 2, 4, 8, 16, 64, 256, 1024];

/// Divisor applied by a CTRLA.PRESCALER setting, `None` for values outside the 3-bit field
pub const fn prescaler_divisor(setting: u8) -> Option<u16> {
    if (setting as usize) < PRESCALER_DIVISORS.len() {
        Some(PRESCALER_DIVISORS[setting as usize])
    } else {
        None
    }
}
