// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Common type aliases used throughout the crate

/// Peripheral register block base address
pub type Addr = usize;

/// Error code type (negative values indicate errors)
pub type Status = i32;

/// Interrupt line number at the processor's NVIC
pub type Irq = u16;

/// Hardware unit number as printed in the datasheet (the `3` in `TC3`)
pub type PhysicalUnit = u8;

/// Chip-family independent unit number handed to consumers
pub type LogicalIndex = u8;
