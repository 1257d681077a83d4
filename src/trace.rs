// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Trace and Logging Support
//!
//! Thin wrappers over the `log` crate. With the `log` feature disabled the
//! arguments are still type-checked but nothing is emitted, so the interrupt
//! path carries no formatting cost.

/// Per-interrupt trace record
macro_rules! tm_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::trace!(target: "timermux", $($arg)*);
        }
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Configuration-level debug record
macro_rules! tm_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::debug!(target: "timermux", $($arg)*);
        }
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Warning record
macro_rules! tm_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::warn!(target: "timermux", $($arg)*);
        }
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use tm_debug;
pub(crate) use tm_trace;
pub(crate) use tm_warn;
