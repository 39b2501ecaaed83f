// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PalisadeVec - contiguous storage with hand-managed element lifetimes.
//!
//! The buffer is acquired as raw, uninitialized storage sized to `cap`;
//! elements are placement-written as `len` grows and dropped in place as it
//! shrinks. `len <= cap` holds after every public operation.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use crate::cursor::Mark;
use crate::error::VecError;

/// A growable contiguous vector with explicit capacity control.
///
/// Slots in `[0, len)` hold live elements; slots in `[len, capacity)` are raw
/// storage that is never read or constructed implicitly. Append doubles
/// capacity when full (0 becomes 1, otherwise 2x), giving amortized O(1)
/// [`push`](Self::push).
///
/// # Panics and Aborts
///
/// Capacity arithmetic that overflows `usize` panics; allocation failure
/// aborts via [`handle_alloc_error`]. A panic raised by an element's `clone`
/// or `drop` mid-operation leaves the container with a consistent `len` but
/// makes no rollback attempt (no strong exception-safety guarantee).
pub struct PalisadeVec<T> {
    buf: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// Safety: PalisadeVec owns its elements exclusively; it is exactly as
// thread-compatible as T itself (same bounds as the std Vec).
unsafe impl<T: Send> Send for PalisadeVec<T> {}
unsafe impl<T: Sync> Sync for PalisadeVec<T> {}

impl<T> PalisadeVec<T> {
    /// Creates an empty vector with no backing storage.
    pub const fn new() -> Self {
        Self {
            buf: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with raw storage for exactly `capacity`
    /// elements. No element is constructed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Self::allocate(capacity),
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): `buf` is valid for reads of `len`
        // initialized elements; a dangling buf is only paired with len == 0.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): same as `as_slice`, and `&mut self`
        // guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns the raw storage pointer.
    ///
    /// Only the first `len()` slots are initialized. The pointer is dangling
    /// (non-null, aligned, never dereferenceable) when capacity is 0. It is
    /// invalidated by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns the raw storage pointer, mutably.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns a reference to the first live element, or `None` when empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last live element, or `None` when empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a checked reference to the element at `index`.
    ///
    /// Unchecked access is available through indexing (`vec[i]`, panicking)
    /// or `get_unchecked` on the deref'd slice.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        self.as_slice().get(index).ok_or(VecError::OutOfRange)
    }

    /// Returns a checked mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        self.as_mut_slice().get_mut(index).ok_or(VecError::OutOfRange)
    }

    /// Appends `value`, growing capacity first if the vector is full.
    ///
    /// Growth doubles the current capacity (a capacity of 0 becomes 1), which
    /// is what makes repeated appends amortized O(1). Reallocation invalidates
    /// previously obtained raw pointers and slices.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            let new_cap = if self.cap == 0 { 1 } else { self.cap * 2 };
            self.set_capacity(new_cap);
        }

        // SAFETY (PRECONDITIONS ARE MET): slot `len` is within the allocated
        // block (len < cap after growth) and holds no live element.
        unsafe {
            ptr::write(self.buf.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes and returns the last live element.
    ///
    /// Never reallocates. Fails with [`VecError::Underflow`] on an empty
    /// vector.
    pub fn pop(&mut self) -> Result<T, VecError> {
        if self.len == 0 {
            return Err(VecError::Underflow);
        }

        self.len -= 1;
        // SAFETY (PRECONDITIONS ARE MET): slot `len` held a live element and
        // is no longer part of the live window, so ownership moves out.
        Ok(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Reallocates to exactly `new_capacity` slots.
    ///
    /// This is the primitive both growth and shrink reduce to. No-op when
    /// `new_capacity` equals the current capacity. The first
    /// `min(len, new_capacity)` elements move into the fresh block in index
    /// order; a truncated tail is dropped. Shrinking below `len` is a
    /// deliberate lossy truncation, not an error.
    pub fn set_capacity(&mut self, new_capacity: usize) {
        if new_capacity == self.cap {
            return;
        }

        let new_buf = Self::allocate(new_capacity);
        let keep = self.len.min(new_capacity);

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): both blocks are valid for
            // `keep` elements and distinct; the old copies are forgotten,
            // not dropped, so each element stays live exactly once.
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), keep);

            // SAFETY (PRECONDITIONS ARE MET): slots [keep, len) still hold
            // live elements that did not move; drop them in index order.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(keep),
                self.len - keep,
            ));
        }

        Self::release(self.buf, self.cap);
        self.buf = new_buf;
        self.cap = new_capacity;
        self.len = keep;
    }

    /// Drops all live elements in index order. Capacity is unchanged.
    pub fn clear(&mut self) {
        let live = self.len;
        // Truncate first so a panicking Drop cannot cause a double drop.
        self.len = 0;
        // SAFETY (PRECONDITIONS ARE MET): the first `live` slots held live
        // elements and are no longer reachable through the live window.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), live));
        }
    }

    /// Removes the half-open range `[start, end)` and closes the gap.
    ///
    /// Elements after the range shift left, preserving their relative order;
    /// O(len) in the worst case. An empty range is a no-op. Fails with
    /// [`VecError::CrossContainer`] when either mark belongs to another
    /// vector, and with [`VecError::OutOfRange`] when `start > end` or `end`
    /// reaches past the live window.
    pub fn erase(&mut self, start: Mark, end: Mark) -> Result<(), VecError> {
        let start = self.claim(start)?;
        let end = self.claim(end)?;

        if start > end || end > self.len {
            return Err(VecError::OutOfRange);
        }
        if start == end {
            return Ok(());
        }

        let count = end - start;
        let tail = self.len - end;
        // Shrink the live window before touching element lifetimes so a
        // panicking Drop leaves no dropped slot inside it.
        self.len = start;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [start, end) holds live
            // elements outside the (already shrunk) live window.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(start),
                count,
            ));

            // SAFETY (PRECONDITIONS ARE MET): source [end, end + tail) holds
            // live elements; destination slots are vacant; regions may
            // overlap, hence `copy`.
            ptr::copy(
                self.buf.as_ptr().add(end),
                self.buf.as_ptr().add(start),
                tail,
            );
        }

        self.len = start + tail;
        Ok(())
    }

    /// Exchanges the live elements at two marked positions in place.
    ///
    /// Fails with [`VecError::CrossContainer`] for foreign marks and
    /// [`VecError::OutOfRange`] unless both offsets are below `len()`.
    pub fn swap_elements(&mut self, a: Mark, b: Mark) -> Result<(), VecError> {
        let a = self.claim(a)?;
        let b = self.claim(b)?;

        if a >= self.len || b >= self.len {
            return Err(VecError::OutOfRange);
        }

        // SAFETY (PRECONDITIONS ARE MET): both offsets index live elements;
        // `ptr::swap` tolerates a == b.
        unsafe {
            ptr::swap(self.buf.as_ptr().add(a), self.buf.as_ptr().add(b));
        }
        Ok(())
    }

    /// Moves the contents out, leaving this vector empty with no storage.
    ///
    /// O(1) ownership transfer; the drained vector remains fully usable.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Verifies that `mark` was issued by this vector and unwraps its offset.
    pub(crate) fn claim(&self, mark: Mark) -> Result<usize, VecError> {
        if mark.owner != self.identity() {
            return Err(VecError::CrossContainer);
        }
        Ok(mark.offset)
    }

    pub(crate) fn identity(&self) -> *const () {
        (self as *const Self).cast()
    }

    fn allocate(capacity: usize) -> NonNull<T> {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return NonNull::dangling();
        }

        let Ok(layout) = Layout::array::<T>(capacity) else {
            panic!("capacity overflow");
        };

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size (capacity
        // and element size both checked above).
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(buf) => buf,
            None => handle_alloc_error(layout),
        }
    }

    fn release(buf: NonNull<T>, capacity: usize) {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        let Ok(layout) = Layout::array::<T>(capacity) else {
            // allocate() accepted this capacity, so the layout fits.
            unreachable!();
        };

        // SAFETY (PRECONDITIONS ARE MET): `buf` came from `allocate` with the
        // same capacity, hence the same layout.
        unsafe {
            dealloc(buf.as_ptr().cast(), layout);
        }
    }
}

impl<T> Drop for PalisadeVec<T> {
    fn drop(&mut self) {
        self.clear();
        Self::release(self.buf, self.cap);
    }
}

impl<T> Default for PalisadeVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for PalisadeVec<T> {
    /// Deep copy. Replicates the source's *capacity*, not just its length;
    /// the copy shares no storage with the source.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.cap);
        for item in self.as_slice() {
            // `len` advances per element, so a panicking `clone` drops only
            // the elements already constructed.
            // SAFETY (PRECONDITIONS ARE MET): `copy.len < copy.cap` because
            // the source satisfies len <= cap, and the slot is vacant.
            unsafe {
                ptr::write(copy.buf.as_ptr().add(copy.len), item.clone());
            }
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for PalisadeVec<T> {
    /// Length plus element-wise comparison of the live windows; capacity does
    /// not participate.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for PalisadeVec<T> {}

impl<T> Deref for PalisadeVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for PalisadeVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for PalisadeVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PalisadeVec")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for PalisadeVec<T> {
    /// Renders the live elements in index order, each followed by a single
    /// space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.as_slice() {
            write!(f, "{item} ")?;
        }
        Ok(())
    }
}
