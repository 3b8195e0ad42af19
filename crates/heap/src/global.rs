//! The process-wide default heap.
//!
//! One [`FirstFitHeap`] behind a spin lock that masks interrupts, exposed
//! as malloc-style free functions: caller errors and exhaustion come back
//! as `None`, structural corruption escalates to a non-returning panic.

use core::{
    alloc::{GlobalAlloc, Layout},
    ptr::{self, NonNull},
};

use log::{error, warn};

use crate::{WORD_SIZE, error::HeapFault, first_fit::FirstFitHeap, spinlock::SpinMutex};

static HEAP: SpinMutex<FirstFitHeap> = SpinMutex::new(FirstFitHeap::new());

/// Hands `region` to the default heap. Invalid arguments are logged and
/// ignored, leaving the heap untouched.
///
/// # Safety
///
/// `region..region + len` must be valid for reads and writes, unused by
/// anything else, and stay valid for the rest of the program.
pub unsafe fn init(region: *mut u8, len: usize) {
    if let Err(err) = unsafe { HEAP.lock().init(region, len) } {
        warn!("heap init rejected: {err}");
    }
}

/// Allocates `size` bytes from the default heap.
///
/// Returns `None` when `size` is zero, exceeds
/// [`MAX_PAYLOAD`](crate::MAX_PAYLOAD), or no free block fits.
pub fn allocate(size: usize) -> Option<NonNull<u8>> {
    unwrap_or_die(HEAP.lock().allocate(size))
}

/// Allocates `count * size` zero-filled bytes from the default heap.
pub fn zero_allocate(count: usize, size: usize) -> Option<NonNull<u8>> {
    unwrap_or_die(HEAP.lock().zero_allocate(count, size))
}

/// Resizes a payload on the default heap. On failure the original
/// allocation is preserved and `None` is returned.
///
/// # Safety
///
/// `ptr` must be null or a payload pointer previously returned by the
/// default heap and not freed since.
pub unsafe fn reallocate(ptr: *mut u8, size: usize) -> Option<NonNull<u8>> {
    unwrap_or_die(unsafe { HEAP.lock().reallocate(ptr, size) })
}

/// Returns a payload to the default heap. Null is a no-op; double-free and
/// wild pointers are fatal.
///
/// # Safety
///
/// `ptr` must be null or a payload pointer previously returned by the
/// default heap and not freed since.
pub unsafe fn free(ptr: *mut u8) {
    unwrap_or_die(unsafe { HEAP.lock().free(ptr) });
}

fn unwrap_or_die<T>(result: Result<T, HeapFault>) -> T {
    match result {
        Ok(value) => value,
        Err(fault) => die(&fault),
    }
}

fn die(fault: &HeapFault) -> ! {
    error!("heap corruption detected: {fault}");
    panic!("heap corruption detected: {fault}");
}

/// Adapter exposing the default heap as a [`GlobalAlloc`].
///
/// Payloads are only word-aligned, so layouts asking for more alignment
/// are refused with null.
pub struct GlobalHeap;

unsafe impl GlobalAlloc for GlobalHeap {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if layout.align() > WORD_SIZE {
            return ptr::null_mut();
        }
        allocate(layout.size()).map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
        unsafe { free(ptr) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        if layout.align() > WORD_SIZE {
            return ptr::null_mut();
        }
        zero_allocate(1, layout.size()).map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if layout.align() > WORD_SIZE {
            return ptr::null_mut();
        }
        unsafe { reallocate(ptr, new_size) }.map_or(ptr::null_mut(), NonNull::as_ptr)
    }
}
