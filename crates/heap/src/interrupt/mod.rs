//! Interrupt masking for heap critical sections.
//!
//! Guards nest: the machine state is captured by the outermost
//! [`disable`] call and restored when the outermost guard drops, so code
//! already running with interrupts masked can take another guard safely.

use core::{
    cell::UnsafeCell,
    marker::PhantomData,
    sync::atomic::{AtomicUsize, Ordering},
};

mod imp;

static DISABLED_DEPTH: AtomicUsize = AtomicUsize::new(0);
static INITIAL_STATE: InitialState = InitialState(UnsafeCell::new(imp::State::new()));

struct InitialState(UnsafeCell<imp::State>);

// SAFETY: the cell is only written by the guard that takes the depth from 0
// to 1 and only read by the guard that brings it back, both with interrupts
// masked.
unsafe impl Sync for InitialState {}

/// Masks interrupts until the returned guard is dropped.
pub fn disable() -> InterruptGuard {
    let state = imp::read_and_disable();
    let depth = DISABLED_DEPTH.fetch_add(1, Ordering::Acquire);
    if depth == 0 {
        unsafe {
            *INITIAL_STATE.0.get() = state;
        }
    }
    InterruptGuard {
        _not_send: PhantomData,
    }
}

#[must_use]
pub fn is_enabled() -> bool {
    imp::is_enabled()
}

/// Keeps interrupts masked while alive. Not `Send`: the restore must happen
/// on the hart that saved the state.
pub struct InterruptGuard {
    _not_send: PhantomData<*mut ()>,
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        let depth = DISABLED_DEPTH.fetch_sub(1, Ordering::Release);
        if depth == 1 {
            unsafe {
                imp::restore(*INITIAL_STATE.0.get());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_nest() {
        let outer = disable();
        assert_eq!(DISABLED_DEPTH.load(Ordering::Relaxed), 1);
        {
            let _inner = disable();
            assert_eq!(DISABLED_DEPTH.load(Ordering::Relaxed), 2);
        }
        assert_eq!(DISABLED_DEPTH.load(Ordering::Relaxed), 1);
        drop(outer);
        assert_eq!(DISABLED_DEPTH.load(Ordering::Relaxed), 0);
    }
}
