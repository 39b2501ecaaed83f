// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous growable vector with placement construction and checked cursors.
//!
//! `PalisadeVec<T>` owns a single raw buffer and manages element lifetimes by
//! hand: storage is acquired uninitialized, elements are written in place as
//! the logical length grows and dropped in place as it shrinks. Length and
//! capacity diverge freely; growth doubles capacity for amortized O(1) append.
//!
//! # Core Guarantees
//!
//! - **Placement lifetimes**: no element is ever default-constructed behind
//!   your back. Slots in `[len, capacity)` are raw storage, never touched
//!   implicitly.
//! - **Exact capacity control**: [`PalisadeVec::set_capacity`] reallocates to
//!   exactly the requested slot count. Shrinking below the current length is a
//!   documented lossy truncation, not an error.
//! - **Checked navigation**: [`Cursor`] validates every step, offset jump and
//!   dereference against the container's live length; [`Mark`] positions are
//!   verified to belong to the container they are used on.
//!
//! # Example: Growth and Access
//!
//! ```rust
//! use palisade_vec::{PalisadeVec, VecError};
//!
//! fn example() -> Result<(), VecError> {
//!     let mut vec = PalisadeVec::new();
//!     vec.push(1);
//!     vec.push(2);
//!     vec.push(3);
//!
//!     // Doubling policy: 0 -> 1 -> 2 -> 4
//!     assert_eq!(vec.len(), 3);
//!     assert_eq!(vec.capacity(), 4);
//!
//!     assert_eq!(*vec.at(2)?, 3);
//!     assert!(vec.at(3).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Cursors and Range Erase
//!
//! ```rust
//! use palisade_vec::{PalisadeVec, VecError};
//!
//! fn example() -> Result<(), VecError> {
//!     let mut vec = PalisadeVec::new();
//!     for i in [1, 2, 3, 4, 5] {
//!         vec.push(i);
//!     }
//!
//!     let start = vec.mark_at(1)?;
//!     let end = vec.mark_at(3)?;
//!     vec.erase(start, end)?;
//!
//!     assert_eq!(vec.as_slice(), [1, 4, 5]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # What this crate does not do
//!
//! No internal locking (single-owner container), no custom allocators, no
//! inline small-buffer storage, and no strong exception-safety guarantee
//! across reallocation: a panic while moving elements into a fresh buffer
//! aborts the transfer without rollback.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cursor;
mod error;
mod vec;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, Mark};
pub use error::VecError;
pub use vec::PalisadeVec;
