// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Register Access
//!
//! Every peripheral touched by this crate is reached through the
//! [`Registers`] trait: byte offsets into a register block, volatile on real
//! hardware. Writes take `&self` because the block is memory-mapped I/O, not
//! Rust-owned memory. Keeping the access behind a trait lets the same
//! classification and synchronization code run against a register double on
//! the host.

use crate::types::Addr;

/// Byte-addressed access to one peripheral register block
pub trait Registers {
    fn read_u8(&self, offset: usize) -> u8;
    fn read_u16(&self, offset: usize) -> u16;
    fn read_u32(&self, offset: usize) -> u32;
    fn write_u8(&self, offset: usize, value: u8);
    fn write_u16(&self, offset: usize, value: u16);
    fn write_u32(&self, offset: usize, value: u32);
}

/// Memory-mapped register block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mmio {
    base: Addr,
}

impl Mmio {
    /// Create a handle for the register block at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of a peripheral register block that stays
    /// mapped for the life of the handle, and every offset later passed to
    /// the accessors must be valid and naturally aligned for that block.
    pub const unsafe fn new(base: Addr) -> Self {
        Self { base }
    }

    /// Base address of the block
    pub const fn base(&self) -> Addr {
        self.base
    }
}

impl Registers for Mmio {
    #[inline]
    fn read_u8(&self, offset: usize) -> u8 {
        // SAFETY: validity of `base + offset` is the contract of `Mmio::new`.
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u8) }
    }

    #[inline]
    fn read_u16(&self, offset: usize) -> u16 {
        // SAFETY: see `read_u8`.
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u16) }
    }

    #[inline]
    fn read_u32(&self, offset: usize) -> u32 {
        // SAFETY: see `read_u8`.
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u32) }
    }

    #[inline]
    fn write_u8(&self, offset: usize, value: u8) {
        // SAFETY: see `read_u8`.
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u8, value) }
    }

    #[inline]
    fn write_u16(&self, offset: usize, value: u16) {
        // SAFETY: see `read_u8`.
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u16, value) }
    }

    #[inline]
    fn write_u32(&self, offset: usize, value: u32) {
        // SAFETY: see `read_u8`.
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}

impl<R: Registers + ?Sized> Registers for &R {
    fn read_u8(&self, offset: usize) -> u8 {
        (**self).read_u8(offset)
    }
    fn read_u16(&self, offset: usize) -> u16 {
        (**self).read_u16(offset)
    }
    fn read_u32(&self, offset: usize) -> u32 {
        (**self).read_u32(offset)
    }
    fn write_u8(&self, offset: usize, value: u8) {
        (**self).write_u8(offset, value)
    }
    fn write_u16(&self, offset: usize, value: u16) {
        (**self).write_u16(offset, value)
    }
    fn write_u32(&self, offset: usize, value: u32) {
        (**self).write_u32(offset, value)
    }
}
