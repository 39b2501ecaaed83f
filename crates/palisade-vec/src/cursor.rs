// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Checked position handles over a `PalisadeVec`.
//!
//! [`Cursor`] is the navigation handle: it borrows the vector, so the live
//! window cannot move or shrink underneath it, and every step, jump and
//! dereference is validated against the current length. [`Mark`] is the
//! detached counterpart that mutating operations (`erase`, `swap_elements`)
//! accept while holding the vector mutably; it carries the owning vector's
//! identity so foreign positions are rejected instead of misused.

use core::fmt;

use crate::error::VecError;
use crate::vec::PalisadeVec;

/// A copyable, bounds-checked cursor over a vector's live window.
///
/// The offset ranges over `[0, len]`; `len` is the one-past-end sentinel,
/// reachable but never dereferenceable. Every operation that would leave
/// that window fails with [`VecError::OutOfRange`] instead of wrapping or
/// clamping.
///
/// `Cursor` is `Copy`, so the pre/post-step distinction is made at the call
/// site: copy first to keep the old position, then [`advance`](Self::advance).
pub struct Cursor<'a, T> {
    vec: &'a PalisadeVec<T>,
    offset: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(vec: &'a PalisadeVec<T>, offset: usize) -> Self {
        Self { vec, offset }
    }

    /// Returns the current offset within the live window.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Detaches this position into a [`Mark`] usable with mutating
    /// operations on the owning vector.
    pub fn mark(&self) -> Mark {
        Mark {
            owner: self.vec.identity(),
            offset: self.offset,
        }
    }

    /// Steps forward by one. Fails at the sentinel.
    pub fn advance(&mut self) -> Result<(), VecError> {
        if self.offset == self.vec.len() {
            return Err(VecError::OutOfRange);
        }
        self.offset += 1;
        Ok(())
    }

    /// Steps backward by one. Fails at offset 0.
    pub fn retreat(&mut self) -> Result<(), VecError> {
        if self.offset == 0 {
            return Err(VecError::OutOfRange);
        }
        self.offset -= 1;
        Ok(())
    }

    /// Returns a cursor `k` positions forward. Fails when that would pass
    /// the sentinel.
    pub fn forward(self, k: usize) -> Result<Self, VecError> {
        let offset = self
            .offset
            .checked_add(k)
            .filter(|offset| *offset <= self.vec.len())
            .ok_or(VecError::OutOfRange)?;

        Ok(Self { offset, ..self })
    }

    /// Returns a cursor `k` positions backward. Fails when `k` exceeds the
    /// current offset.
    pub fn back(self, k: usize) -> Result<Self, VecError> {
        if k > self.offset {
            return Err(VecError::OutOfRange);
        }

        Ok(Self {
            offset: self.offset - k,
            ..self
        })
    }

    /// Signed distance from `other` to `self` (negative when `self`
    /// precedes `other`).
    ///
    /// Fails with [`VecError::CrossContainer`] when the cursors borrow
    /// different vectors. Contrast with equality, which treats foreign
    /// cursors as plainly unequal.
    pub fn distance(self, other: Self) -> Result<isize, VecError> {
        if self.vec.identity() != other.vec.identity() {
            return Err(VecError::CrossContainer);
        }
        Ok(self.offset as isize - other.offset as isize)
    }

    /// Returns the live element under the cursor.
    ///
    /// Fails with [`VecError::OutOfRange`] at the sentinel.
    pub fn get(self) -> Result<&'a T, VecError> {
        self.vec.at(self.offset)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    /// Same vector identity and same offset. Cursors over different vectors
    /// are unequal, never an error.
    fn eq(&self, other: &Self) -> bool {
        self.vec.identity() == other.vec.identity() && self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("len", &self.vec.len())
            .finish()
    }
}

/// A detached `(owner, offset)` position.
///
/// Marks carry no borrow, which is what lets `erase` and `swap_elements`
/// accept positions while the vector is mutably borrowed. The owner identity
/// is only ever compared, never dereferenced; a mark whose owner does not
/// match the vector it is handed to yields [`VecError::CrossContainer`].
///
/// A mark records an offset, not an element: container mutations issued after
/// the mark was taken (erase shifts, pops) may leave it denoting a different
/// element, and every use is re-validated against the length at that moment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mark {
    pub(crate) owner: *const (),
    pub(crate) offset: usize,
}

impl Mark {
    /// Returns the recorded offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<T> PalisadeVec<T> {
    /// Returns a cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor at the one-past-end sentinel.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Returns a cursor at `offset`. Fails when `offset` passes the
    /// sentinel.
    pub fn cursor_at(&self, offset: usize) -> Result<Cursor<'_, T>, VecError> {
        if offset > self.len() {
            return Err(VecError::OutOfRange);
        }
        Ok(Cursor::new(self, offset))
    }

    /// Returns a mark at `offset`, owned by this vector. Fails when
    /// `offset` passes the sentinel.
    pub fn mark_at(&self, offset: usize) -> Result<Mark, VecError> {
        if offset > self.len() {
            return Err(VecError::OutOfRange);
        }
        Ok(Mark {
            owner: self.identity(),
            offset,
        })
    }
}
