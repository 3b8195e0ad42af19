//! Error types reported by the heap.
//!
//! [`InitError`] covers rejected `init` arguments; the region is left
//! untouched. [`HeapFault`] covers structural corruption detected during an
//! operation; the heap must be treated as compromised once one is reported.

use snafu::{Location, Snafu};

/// Rejected heap-region arguments. No state change has occurred.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum InitError {
    #[snafu(display("heap region pointer is null"))]
    NullRegion {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("heap region {addr:#x} is not word-aligned"))]
    MisalignedRegion {
        addr: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display(
        "heap region of {len} bytes cannot hold two headers plus a minimum payload ({min} bytes)"
    ))]
    RegionTooSmall {
        len: usize,
        min: usize,
        #[snafu(implicit)]
        location: Location,
    },
}

/// Structural corruption detected on an operation path.
///
/// Recovery is never attempted; continued use of a heap that reported a
/// fault propagates the damage.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum HeapFault {
    #[snafu(display("block header {addr:#x} is outside the heap region or misaligned"))]
    HeaderOutOfRegion {
        addr: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("block {addr:#x} has impossible payload size {size:#x}"))]
    BadPayloadSize {
        addr: usize,
        size: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("block {addr:#x} with payload size {size:#x} overruns the region end"))]
    BlockOverrun {
        addr: usize,
        size: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("block {addr:#x} does not abut its successor {next:#x}"))]
    BrokenAdjacency {
        addr: usize,
        next: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("terminal sentinel at {addr:#x} is malformed"))]
    BadSentinel {
        addr: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("block {addr:#x} is not marked in use"))]
    BlockNotInUse {
        addr: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("block {addr:#x} is not linked into the heap list"))]
    UnlinkedBlock {
        addr: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("free-block counter underflow"))]
    FreeCountUnderflow {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("split of {size:#x} bytes exceeds the payload of block {addr:#x}"))]
    SplitOverrun {
        addr: usize,
        size: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("adjacent free blocks at {addr:#x} and {next:#x}"))]
    AdjacentFreeBlocks {
        addr: usize,
        next: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("free-block counter records {recorded} blocks but the list holds {counted}"))]
    FreeCountMismatch {
        recorded: usize,
        counted: usize,
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("block bytes total {total:#x} but the region spans {len:#x} bytes"))]
    RegionSizeMismatch {
        total: usize,
        len: usize,
        #[snafu(implicit)]
        location: Location,
    },
}
