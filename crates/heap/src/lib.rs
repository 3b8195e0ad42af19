//! Single-region first-fit heap allocator for kernel-space usage.
//!
//! This crate manages one contiguous, word-aligned memory region handed over
//! once at boot. It provides the classic four-operation allocator contract
//! (allocate, free, reallocate, zero-allocate) with structural integrity
//! checking on every list walk.
//!
//! # Memory Layout
//!
//! Every block, allocated or free, is preceded by a two-word header holding
//! the address-ordered forward link and the payload size with the used flag
//! packed into bit 0 (payload sizes are word multiples, so the bit is free).
//! The headers tile the region without gaps and end in a terminal sentinel
//! that marks the right edge:
//!
//! ```text
//! region_base                                                region_end
//! ┌────────┬─────────────┬────────┬───────────┬   ┬──────────┐
//! │ header │ payload     │ header │ payload   │ … │ sentinel │
//! │ next ──┼─────────────^ next ──┼───────────^   │ next=null│
//! └────────┴─────────────┴────────┴───────────┴   ┴──────────┘
//! ```
//!
//! # Algorithm
//!
//! - **Allocation**: first-fit walk over the address-ordered block list,
//!   splitting the chosen block when the surplus can hold another header
//!   plus a minimum payload. When fragmentation passes a threshold, a
//!   coalescing sweep runs before the search.
//! - **Deallocation**: the freed block is merged with its successor
//!   immediately and with its predecessor after an O(n) walk to find it.
//!
//! # Corruption Handling
//!
//! Every header visited on an operation path is validated against the
//! region bounds and the adjacency equation. [`FirstFitHeap`] reports
//! violations as [`HeapFault`] values; the process-wide surface in
//! [`global`] escalates them to a non-returning panic, because a heap that
//! failed validation cannot be trusted to continue.
//!
//! # Concurrency
//!
//! [`FirstFitHeap`] is `Send` but not `Sync` and performs no locking of its
//! own. The [`global`] surface wraps the default heap in a spin lock that
//! masks interrupts for the duration of each operation, so it is safe to
//! call from task and kernel context alike.
//!
//! # Usage Example
//!
//! ```
//! use heap::FirstFitHeap;
//!
//! let mut backing = vec![0_usize; 128];
//! let len = backing.len() * size_of::<usize>();
//!
//! let mut heap = FirstFitHeap::new();
//! unsafe {
//!     heap.init(backing.as_mut_ptr().cast(), len).unwrap();
//! }
//!
//! let p = heap.allocate(64).unwrap().expect("fresh heap has space");
//! unsafe {
//!     heap.free(p.as_ptr()).unwrap();
//! }
//! ```

#![no_std]

mod block;
pub mod error;
pub mod first_fit;
pub mod global;
pub mod interrupt;
pub mod spinlock;

pub use crate::{
    error::{HeapFault, InitError},
    first_fit::FirstFitHeap,
    global::GlobalHeap,
};

/// Allocation alignment unit: the platform's native word size.
pub const WORD_SIZE: usize = size_of::<usize>();

/// Size of the header preceding every payload, two words.
pub const HEADER_SIZE: usize = size_of::<block::BlockHeader>();

/// Smallest payload ever carved out; requests below this are clamped up.
pub const MIN_PAYLOAD: usize = 2 * WORD_SIZE;

/// Upper clamp on a single payload. Larger requests fail without touching
/// the heap.
pub const MAX_PAYLOAD: usize = 1 << 30;

/// Free-block count above which allocation paths run a coalescing sweep
/// before searching.
pub const COALESCE_THRESHOLD: usize = 8;
