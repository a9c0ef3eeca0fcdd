//! Readers-writer gate shared by the concurrent containers
//!
//! A mutual-exclusion gate built from a mutex-guarded counter pair and a
//! condition variable rather than a language-provided lock. Read access is
//! shared among any number of concurrent readers and blocked only while a
//! writer is active; write access is exclusive and blocked while any reader
//! or writer is active. Releasing a reader wakes one waiter, releasing a
//! writer wakes all waiters.
//!
//! No fairness is guaranteed: a continuous stream of incoming readers can
//! starve a waiting writer. There is no cancellation and no timeout;
//! acquisition only ever waits on in-flight access to the same gate.

#![allow(unsafe_code)]

use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::sync::{Condvar, Mutex};

/// Active reader/writer counters guarded by the gate's mutex
#[derive(Debug, Default)]
struct GateState {
    readers: usize,
    writers: usize,
}

/// Shared-read / exclusive-write cell protecting a single value
///
/// Access is handed out as RAII guards, so the counters are restored on
/// every exit path, including early error returns and unwinding.
pub struct ReadWriteGate<T> {
    state: Mutex<GateState>,
    cond: Condvar,
    value: UnsafeCell<T>,
}

// The UnsafeCell is only ever dereferenced while the gate protocol grants
// the matching access mode, which restores the usual reference rules.
unsafe impl<T: Send> Send for ReadWriteGate<T> {}
unsafe impl<T: Send + Sync> Sync for ReadWriteGate<T> {}

impl<T> ReadWriteGate<T> {
    /// Wrap a value behind the gate
    pub fn new(value: T) -> Self {
        Self {
            state: Mutex::new(GateState::default()),
            cond: Condvar::new(),
            value: UnsafeCell::new(value),
        }
    }

    /// Acquire shared read access, blocking while a writer is active
    pub fn read(&self) -> ReadGuard<'_, T> {
        let mut state = self.state.lock().unwrap();
        while state.writers != 0 {
            state = self.cond.wait(state).unwrap();
        }
        state.readers += 1;
        ReadGuard { gate: self }
    }

    /// Acquire exclusive write access, blocking while any reader or writer
    /// is active
    pub fn write(&self) -> WriteGuard<'_, T> {
        let mut state = self.state.lock().unwrap();
        while state.writers != 0 || state.readers != 0 {
            state = self.cond.wait(state).unwrap();
        }
        state.writers += 1;
        WriteGuard { gate: self }
    }

    /// Consume the gate and return the protected value
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

/// Shared read access to a gated value; released on drop
pub struct ReadGuard<'a, T> {
    gate: &'a ReadWriteGate<T>,
}

impl<T> Deref for ReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Readers hold the gate in read mode: no writer can be active.
        unsafe { &*self.gate.value.get() }
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self.gate.state.lock().unwrap();
        state.readers -= 1;
        self.gate.cond.notify_one();
    }
}

/// Exclusive write access to a gated value; released on drop
pub struct WriteGuard<'a, T> {
    gate: &'a ReadWriteGate<T>,
}

impl<T> Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // The writer is the only active accessor.
        unsafe { &*self.gate.value.get() }
    }
}

impl<T> DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.gate.value.get() }
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self.gate.state.lock().unwrap();
        state.writers -= 1;
        self.gate.cond.notify_all();
    }
}
