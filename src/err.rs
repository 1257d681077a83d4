// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Error Codes
//!
//! The routing layer itself has no runtime failures: interrupt controller
//! writes are fire-and-forget and the default synchronized writes wait for
//! the hardware indefinitely. The only fallible operations are the bounded
//! synchronized writes in [`crate::sync`], which give up after a poll budget.

use crate::types::Status;

/// Result type for operations that can fail
pub type Result<T = ()> = core::result::Result<T, Error>;

/// Error codes
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sync-busy or reset-request bit was still set when the poll budget ran out
    TimedOut = -7,
}

impl Error {
    /// Convert error to status code for callers that report C-style statuses
    pub fn to_status(self) -> Status {
        self as Status
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        err.to_status()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::TimedOut => f.write_str("peripheral synchronization timed out"),
        }
    }
}
