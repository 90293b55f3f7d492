// WRT - wrt-foundation
// Module: Memory providers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Reservation of the backing storage an [`Arena`](crate::Arena) bumps
//! through.
//!
//! Splitting this out of `Arena` itself separates the bump pointer over
//! a region from how that region's backing storage is obtained and
//! released. A host embedding the loader on a platform without a
//! global allocator can supply its own [`MemoryProvider`] over a
//! static or stack buffer instead of [`StdMemoryProvider`].

use core::ptr::NonNull;

/// The maximum alignment an [`Arena`](crate::Arena) guarantees for any
/// record pushed into it. Matches the strictest alignment any value
/// type in the decoded module graph requires (`u64`/`i64`).
pub const MAX_ALIGN: usize = 16;

/// Reserves and releases the contiguous byte range an [`Arena`](crate::Arena)
/// bumps through.
///
/// # Safety
///
/// Implementations must return a pointer to at least `size` bytes of
/// memory aligned to [`MAX_ALIGN`], valid until a matching call to
/// [`unreserve`](MemoryProvider::unreserve) with the same pointer and
/// size. `reserve` returning `None` is treated as the reservation
/// failing; it must not return a dangling or under-sized pointer.
pub unsafe trait MemoryProvider {
    /// Reserves `size` bytes, zero-initialized, aligned to [`MAX_ALIGN`].
    fn reserve(&self, size: usize) -> Option<NonNull<u8>>;

    /// Releases a region previously returned by `reserve(size)`.
    ///
    /// # Safety
    ///
    /// `ptr` and `size` must be exactly the values a prior `reserve`
    /// call returned and was given; the region must not be used again
    /// after this call.
    unsafe fn unreserve(&self, ptr: NonNull<u8>, size: usize);
}

/// A [`MemoryProvider`] backed by the global allocator.
///
/// This is the provider `wrtd` uses: it has no reason to avoid `alloc`,
/// so the arena's backing storage is just a zeroed heap allocation.
#[cfg(feature = "alloc")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdMemoryProvider;

#[cfg(feature = "alloc")]
fn layout_for(size: usize) -> core::alloc::Layout {
    // SAFETY: MAX_ALIGN is a small power of two and `size` rounded up to
    // it never overflows `isize` for any capacity this loader is asked
    // to reserve in practice.
    core::alloc::Layout::from_size_align(size.max(1), MAX_ALIGN)
        .unwrap_or_else(|_| core::alloc::Layout::new::<u8>())
}

#[cfg(feature = "alloc")]
// SAFETY: `reserve` returns either `None` or a pointer from
// `alloc::alloc::alloc_zeroed` sized and aligned per `layout_for`;
// `unreserve` frees it with the identical layout.
unsafe impl MemoryProvider for StdMemoryProvider {
    fn reserve(&self, size: usize) -> Option<NonNull<u8>> {
        let layout = layout_for(size);
        // SAFETY: layout has non-zero size by construction (see `layout_for`).
        let raw = unsafe { alloc::alloc::alloc_zeroed(layout) };
        NonNull::new(raw)
    }

    unsafe fn unreserve(&self, ptr: NonNull<u8>, size: usize) {
        let layout = layout_for(size);
        // SAFETY: forwarded from the caller's contract on `unreserve`.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
