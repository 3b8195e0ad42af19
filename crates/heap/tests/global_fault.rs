//! Corruption through the process-wide surface is fatal.
//!
//! Separate binary: the deliberately mistreated default heap must not be
//! visible to any other test.

use heap::{WORD_SIZE, global};

#[test]
#[should_panic(expected = "heap corruption detected")]
fn double_free_is_fatal() {
    let mut backing = vec![0_usize; 64];
    let region_len = backing.len() * WORD_SIZE;
    unsafe { global::init(backing.as_mut_ptr().cast(), region_len) };

    let p = global::allocate(16).expect("fresh heap has space");
    unsafe {
        global::free(p.as_ptr());
        global::free(p.as_ptr());
    }
}
