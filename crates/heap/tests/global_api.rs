//! One linear scenario over the process-wide surface.
//!
//! Kept to a single test function: the default heap is shared state and
//! the harness runs tests concurrently.

use core::{
    alloc::{GlobalAlloc, Layout},
    ptr,
};

use heap::{GlobalHeap, HEADER_SIZE, WORD_SIZE, global};

#[test]
fn malloc_style_surface() {
    let mut backing = vec![0_usize; 1024];
    let region_len = backing.len() * WORD_SIZE;
    unsafe { global::init(backing.as_mut_ptr().cast(), region_len) };

    // Bad arguments are ignored and the heap keeps working.
    unsafe { global::init(ptr::null_mut(), region_len) };

    let p = global::allocate(64).expect("fresh heap has space");
    unsafe { p.as_ptr().write_bytes(0xAB, 64) };

    let z = global::zero_allocate(8, 16).expect("fresh heap has space");
    for i in 0..128 {
        assert_eq!(unsafe { z.as_ptr().add(i).read() }, 0);
    }

    let grown = unsafe { global::reallocate(p.as_ptr(), 256) }.expect("fresh heap has space");
    for i in 0..64 {
        assert_eq!(unsafe { grown.as_ptr().add(i).read() }, 0xAB);
    }

    unsafe {
        global::free(grown.as_ptr());
        global::free(z.as_ptr());
        global::free(ptr::null_mut());
    }

    // The allocator adapter serves word-aligned layouts and refuses
    // anything stricter.
    let allocator = GlobalHeap;
    let layout = Layout::from_size_align(32, WORD_SIZE).unwrap();
    unsafe {
        let g = allocator.alloc(layout);
        assert!(!g.is_null());
        let zeroed = allocator.alloc_zeroed(layout);
        assert!(!zeroed.is_null());
        for i in 0..32 {
            assert_eq!(zeroed.add(i).read(), 0);
        }
        allocator.dealloc(g, layout);
        allocator.dealloc(zeroed, layout);

        let over_aligned = Layout::from_size_align(32, 4 * WORD_SIZE).unwrap();
        assert!(allocator.alloc(over_aligned).is_null());
    }

    // With everything freed the whole payload is allocatable in one piece.
    let all = global::allocate(region_len - 2 * HEADER_SIZE).expect("heap fully coalesced");
    unsafe { global::free(all.as_ptr()) };
}
