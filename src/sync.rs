// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Synchronized register writes
//!
//! TC and TCC registers live in the peripheral's clock domain. A write to
//! CTRLA is not seen by the counter logic until the peripheral drops its
//! sync-busy flag (or, for a software reset, the reset-request bit itself),
//! so the operations here write and then poll until the hardware
//! acknowledges.
//!
//! # Waiting
//!
//! The plain operations wait without limit. A peripheral that never
//! acknowledges (unclocked, held in reset) hangs the caller; there is no
//! diagnostic. Do not call them from an interrupt that must not be delayed
//! by a few peripheral clock cycles.
//!
//! The `*_within` variants take a poll budget and return
//! [`Error::TimedOut`] once it is spent with the flag still set.

use crate::err::{Error, Result};
use crate::family::ChipFamily;
use crate::reg::Registers;
use crate::regs::{TccCtrla, TccSyncbusy, TCC_CTRLA, TCC_SYNCBUSY};
use crate::trace::{tm_debug, tm_warn};

// CTRLA bits shared by both TC layouts
const TC_CTRLA_SWRST: u32 = 1 << 0;
const TC_CTRLA_ENABLE: u32 = 1 << 1;

/// Poll `busy` until it reports false
#[inline]
fn spin_while(mut busy: impl FnMut() -> bool) {
    while busy() {
        core::hint::spin_loop();
    }
}

/// Poll `busy` until it reports false, giving up after `limit` polls found it set
///
/// Returns the number of polls that found the flag still set.
#[inline]
fn wait_while(mut busy: impl FnMut() -> bool, limit: u32) -> Result<u32> {
    let mut polls = 0u32;
    while busy() {
        if polls >= limit {
            return Err(Error::TimedOut);
        }
        polls += 1;
        core::hint::spin_loop();
    }
    Ok(polls)
}

// ============================================================================
// TCC
// ============================================================================

fn tcc_write_enable<R: Registers>(tcc: &R, enable: bool) {
    let mut ctrla = TccCtrla::from_bits_retain(tcc.read_u32(TCC_CTRLA));
    ctrla.set(TccCtrla::ENABLE, enable);
    tcc.write_u32(TCC_CTRLA, ctrla.bits());
}

fn tcc_enable_syncing<R: Registers>(tcc: &R) -> bool {
    TccSyncbusy::from_bits_retain(tcc.read_u32(TCC_SYNCBUSY)).contains(TccSyncbusy::ENABLE)
}

fn tcc_reset_pending<R: Registers>(tcc: &R) -> bool {
    TccCtrla::from_bits_retain(tcc.read_u32(TCC_CTRLA)).contains(TccCtrla::SWRST)
}

/// Set or clear a TCC's CTRLA.ENABLE and wait for SYNCBUSY.ENABLE to drop
pub fn tcc_set_enable<R: Registers>(tcc: &R, enable: bool) {
    tcc_write_enable(tcc, enable);
    spin_while(|| tcc_enable_syncing(tcc));
    tm_debug!("tcc enable={} synchronized", enable);
}

/// [`tcc_set_enable`] giving up after `max_polls` busy polls
pub fn tcc_set_enable_within<R: Registers>(tcc: &R, enable: bool, max_polls: u32) -> Result<u32> {
    tcc_write_enable(tcc, enable);
    wait_while(|| tcc_enable_syncing(tcc), max_polls).map_err(|err| {
        tm_warn!("tcc enable={} still syncing after {} polls", enable, max_polls);
        err
    })
}

/// Software-reset a TCC and wait until the reset request clears
pub fn tcc_reset<R: Registers>(tcc: &R) {
    tcc.write_u32(TCC_CTRLA, TccCtrla::SWRST.bits());
    spin_while(|| tcc_reset_pending(tcc));
    tm_debug!("tcc reset complete");
}

/// [`tcc_reset`] giving up after `max_polls` busy polls
pub fn tcc_reset_within<R: Registers>(tcc: &R, max_polls: u32) -> Result<u32> {
    tcc.write_u32(TCC_CTRLA, TccCtrla::SWRST.bits());
    wait_while(|| tcc_reset_pending(tcc), max_polls).map_err(|err| {
        tm_warn!("tcc reset still pending after {} polls", max_polls);
        err
    })
}

// ============================================================================
// TC
// ============================================================================

fn tc_write_enable<F: ChipFamily, R: Registers>(tc: &R, enable: bool) {
    let mut ctrla = F::tc_ctrla(tc);
    if enable {
        ctrla |= TC_CTRLA_ENABLE;
    } else {
        ctrla &= !TC_CTRLA_ENABLE;
    }
    F::write_tc_ctrla(tc, ctrla);
}

fn tc_reset_pending<F: ChipFamily, R: Registers>(tc: &R) -> bool {
    F::tc_ctrla(tc) & TC_CTRLA_SWRST != 0
}

/// Set or clear a TC's CTRLA.ENABLE and wait for the family's enable sync flag to drop
pub fn tc_set_enable<F: ChipFamily, R: Registers>(tc: &R, enable: bool) {
    tc_write_enable::<F, R>(tc, enable);
    spin_while(|| F::tc_enable_syncing(tc));
    tm_debug!("{} tc enable={} synchronized", F::NAME, enable);
}

/// [`tc_set_enable`] giving up after `max_polls` busy polls
pub fn tc_set_enable_within<F: ChipFamily, R: Registers>(
    tc: &R,
    enable: bool,
    max_polls: u32,
) -> Result<u32> {
    tc_write_enable::<F, R>(tc, enable);
    wait_while(|| F::tc_enable_syncing(tc), max_polls).map_err(|err| {
        tm_warn!("{} tc enable={} still syncing after {} polls", F::NAME, enable, max_polls);
        err
    })
}

/// Software-reset a TC and wait until the hardware clears CTRLA.SWRST
pub fn tc_reset<F: ChipFamily, R: Registers>(tc: &R) {
    F::write_tc_ctrla(tc, TC_CTRLA_SWRST);
    spin_while(|| tc_reset_pending::<F, R>(tc));
    tm_debug!("{} tc reset complete", F::NAME);
}

/// [`tc_reset`] giving up after `max_polls` busy polls
pub fn tc_reset_within<F: ChipFamily, R: Registers>(tc: &R, max_polls: u32) -> Result<u32> {
    F::write_tc_ctrla(tc, TC_CTRLA_SWRST);
    wait_while(|| tc_reset_pending::<F, R>(tc), max_polls).map_err(|err| {
        tm_warn!("{} tc reset still pending after {} polls", F::NAME, max_polls);
        err
    })
}
