// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-vec.
use thiserror::Error;

/// Errors from checked container and cursor operations.
///
/// All failures are synchronous and surfaced at the offending call; nothing
/// is retried or recovered internally.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum VecError {
    /// An index, offset or range reached outside the live window.
    ///
    /// Raised by checked access (`at`), by every cursor step or jump that
    /// would leave `[0, len]`, and by dereferencing the one-past-end
    /// sentinel.
    #[error("out of range")]
    OutOfRange = 0,

    /// `pop()` was called on an empty container.
    #[error("pop from empty vector")]
    Underflow = 1,

    /// A cursor or mark from one container was used with another.
    ///
    /// Raised by cursor subtraction and by `erase`/`swap_elements` when a
    /// mark's owner is not the container being operated on. Plain equality
    /// between foreign cursors is `false`, never this error.
    #[error("position belongs to a different vector")]
    CrossContainer = 2,
}
