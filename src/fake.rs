// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Host test doubles for registers, the NVIC and the consumer subsystems

use std::cell::RefCell;
use std::collections::HashMap;

use crate::dispatch::Consumers;
use crate::nvic::InterruptController;
use crate::reg::Registers;
use crate::types::{Irq, LogicalIndex};

const BLOCK_SIZE: usize = 0x40;

/// A bit that reads as set for a number of reads, then clears itself
struct Hold {
    offset: usize,
    mask: u32,
    remaining: u32,
}

/// Little-endian register file with self-clearing bits and read counters
pub struct FakeRegisters {
    mem: RefCell<[u8; BLOCK_SIZE]>,
    holds: RefCell<Vec<Hold>>,
    reads: RefCell<HashMap<usize, usize>>,
}

impl FakeRegisters {
    pub fn new() -> Self {
        Self {
            mem: RefCell::new([0; BLOCK_SIZE]),
            holds: RefCell::new(Vec::new()),
            reads: RefCell::new(HashMap::new()),
        }
    }

    /// Keep `mask` set in the register at `offset` for the next `reads` reads
    /// of that register; the following read finds it clear.
    pub fn hold(&self, offset: usize, mask: u32, reads: u32) {
        self.holds.borrow_mut().push(Hold {
            offset,
            mask,
            remaining: reads,
        });
    }

    /// Number of reads issued against `offset`
    pub fn reads_of(&self, offset: usize) -> usize {
        self.reads.borrow().get(&offset).copied().unwrap_or(0)
    }

    /// Peek at raw memory without counting a read
    pub fn peek_u32(&self, offset: usize) -> u32 {
        self.load(offset, 4)
    }

    fn load(&self, offset: usize, width: usize) -> u32 {
        let mem = self.mem.borrow();
        let mut value = 0u32;
        for i in 0..width {
            value |= u32::from(mem[offset + i]) << (8 * i);
        }
        value
    }

    fn store(&self, offset: usize, width: usize, value: u32) {
        let mut mem = self.mem.borrow_mut();
        for i in 0..width {
            mem[offset + i] = (value >> (8 * i)) as u8;
        }
    }

    fn read(&self, offset: usize, width: usize) -> u32 {
        *self.reads.borrow_mut().entry(offset).or_insert(0) += 1;

        let mut value = self.load(offset, width);
        let mut holds = self.holds.borrow_mut();
        let mut cleared = 0u32;
        holds.retain_mut(|hold| {
            if hold.offset != offset {
                return true;
            }
            if hold.remaining > 0 {
                hold.remaining -= 1;
                value |= hold.mask;
                true
            } else {
                cleared |= hold.mask;
                false
            }
        });
        drop(holds);

        if cleared != 0 {
            value &= !cleared;
            let stored = self.load(offset, width) & !cleared;
            self.store(offset, width, stored);
        }
        value
    }
}

impl Registers for FakeRegisters {
    fn read_u8(&self, offset: usize) -> u8 {
        self.read(offset, 1) as u8
    }
    fn read_u16(&self, offset: usize) -> u16 {
        self.read(offset, 2) as u16
    }
    fn read_u32(&self, offset: usize) -> u32 {
        self.read(offset, 4)
    }
    fn write_u8(&self, offset: usize, value: u8) {
        self.store(offset, 1, u32::from(value));
    }
    fn write_u16(&self, offset: usize, value: u16) {
        self.store(offset, 2, u32::from(value));
    }
    fn write_u32(&self, offset: usize, value: u32) {
        self.store(offset, 4, value);
    }
}

// ============================================================================
// NVIC
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NvicOp {
    Disable(Irq),
    ClearPending(Irq),
    Enable(Irq),
}

/// Interrupt controller model with an operation log
pub struct FakeNvic {
    enabled: [bool; 128],
    pending: [bool; 128],
    pub ops: Vec<NvicOp>,
}

impl FakeNvic {
    pub fn new() -> Self {
        Self {
            enabled: [false; 128],
            pending: [false; 128],
            ops: Vec::new(),
        }
    }

    /// Latch an interrupt request as the hardware would
    pub fn raise(&mut self, irq: Irq) {
        self.pending[irq as usize] = true;
    }
}

impl InterruptController for FakeNvic {
    fn disable_irq(&mut self, irq: Irq) {
        self.ops.push(NvicOp::Disable(irq));
        self.enabled[irq as usize] = false;
    }

    fn clear_pending(&mut self, irq: Irq) {
        self.ops.push(NvicOp::ClearPending(irq));
        self.pending[irq as usize] = false;
    }

    fn enable_irq(&mut self, irq: Irq) {
        self.ops.push(NvicOp::Enable(irq));
        self.enabled[irq as usize] = true;
    }

    fn is_enabled(&self, irq: Irq) -> bool {
        self.enabled[irq as usize]
    }

    fn is_pending(&self, irq: Irq) -> bool {
        self.pending[irq as usize]
    }
}

// ============================================================================
// Consumers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Pulse(LogicalIndex),
    Frequency(LogicalIndex),
}

/// Records every consumer entry point invocation
pub struct RecordingConsumers {
    calls: RefCell<Vec<Call>>,
}

impl RecordingConsumers {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Consumers for RecordingConsumers {
    fn pulse_interrupt(&self, index: LogicalIndex) {
        self.calls.borrow_mut().push(Call::Pulse(index));
    }

    fn frequency_interrupt(&self, index: LogicalIndex) {
        self.calls.borrow_mut().push(Call::Frequency(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_clears_after_budget() {
        let regs = FakeRegisters::new();
        regs.hold(0x08, 0b10, 2);

        assert_eq!(regs.read_u32(0x08) & 0b10, 0b10);
        assert_eq!(regs.read_u32(0x08) & 0b10, 0b10);
        assert_eq!(regs.read_u32(0x08) & 0b10, 0);
        assert_eq!(regs.read_u32(0x08) & 0b10, 0);
        assert_eq!(regs.reads_of(0x08), 4);
    }

    #[test]
    fn test_hold_clears_written_bit() {
        let regs = FakeRegisters::new();
        regs.write_u16(0x00, 0b11);
        regs.hold(0x00, 0b01, 1);

        assert_eq!(regs.read_u16(0x00), 0b11);
        assert_eq!(regs.read_u16(0x00), 0b10);
        assert_eq!(regs.peek_u32(0x00), 0b10);
    }
}
