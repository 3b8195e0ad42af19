//! Spin lock that doubles as a critical section.
//!
//! Locking first masks interrupts, then spins. The interrupt guard lives
//! inside the lock guard, so preemption stays off for exactly as long as
//! the protected data is held.

use core::{
    cell::UnsafeCell,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::interrupt::{self, InterruptGuard};

pub struct SpinMutex<T> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

impl<T> Default for SpinMutex<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

// SAFETY: the lock hands out access to the data one holder at a time.
unsafe impl<T> Sync for SpinMutex<T> where T: Send {}

impl<T> SpinMutex<T> {
    pub const fn new(data: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            data: UnsafeCell::new(data),
        }
    }

    pub fn lock(&self) -> SpinMutexGuard<'_, T> {
        let interrupt_guard = interrupt::disable();

        while self.locked.swap(true, Ordering::Acquire) {
            core::hint::spin_loop();
        }

        SpinMutexGuard {
            mutex: self,
            _interrupt_guard: interrupt_guard,
        }
    }
}

pub struct SpinMutexGuard<'a, T> {
    mutex: &'a SpinMutex<T>,
    _interrupt_guard: InterruptGuard,
}

impl<T> Drop for SpinMutexGuard<'_, T> {
    fn drop(&mut self) {
        self.mutex.locked.store(false, Ordering::Release);
    }
}

impl<T> Deref for SpinMutexGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.mutex.data.get() }
    }
}

impl<T> DerefMut for SpinMutexGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.mutex.data.get() }
    }
}
