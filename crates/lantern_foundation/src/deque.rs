//! Bounded blocking double-ended channel.
//!
//! [`BlockingDeque`] is a fixed-capacity ring buffer shared between an
//! input-producing thread and the thread that runs commands. Both ends
//! support non-blocking (`try_*`) and blocking operations.
//!
//! # Synchronization
//!
//! All state lives behind a single mutex with one associated condition
//! variable. Every successful mutation wakes *all* waiters; a blocking
//! operation re-checks its condition under the lock after each wakeup, so
//! spurious wakeups are harmless and no wakeup can be lost between the check
//! and the wait.
//!
//! # Cancellation
//!
//! [`BlockingDeque::interrupt`] is sticky: once called, every blocking call
//! (already waiting or issued later) returns [`Interrupted`] instead of
//! waiting. Non-blocking calls keep working so queued items can be drained.

use std::fmt;

use parking_lot::{Condvar, Mutex};

use crate::error::{Error, ErrorKind, Result};

/// Returned by a blocking operation that was interrupted.
///
/// For pushes the rejected item is handed back to the caller.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Interrupted<T = ()>(pub T);

impl<T> Interrupted<T> {
    /// Returns the item that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Interrupted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Interrupted(..)")
    }
}

impl<T> fmt::Display for Interrupted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("blocking wait interrupted")
    }
}

impl<T> std::error::Error for Interrupted<T> {}

impl<T> From<Interrupted<T>> for Error {
    fn from(_: Interrupted<T>) -> Self {
        Error::new(ErrorKind::Interrupted)
    }
}

/// Ring buffer state guarded by the deque's mutex.
struct Ring<T> {
    slots: Vec<Option<T>>,
    start: usize,
    len: usize,
    interrupted: bool,
}

impl<T> Ring<T> {
    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            start: 0,
            len: 0,
            interrupted: false,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    fn push_back(&mut self, item: T) -> std::result::Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let index = (self.start + self.len) % self.capacity();
        self.slots[index] = Some(item);
        self.len += 1;
        Ok(())
    }

    fn push_front(&mut self, item: T) -> std::result::Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.start = (self.start + self.capacity() - 1) % self.capacity();
        self.slots[self.start] = Some(item);
        self.len += 1;
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.start].take();
        self.start = (self.start + 1) % self.capacity();
        self.len -= 1;
        item
    }

    fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let index = (self.start + self.len - 1) % self.capacity();
        self.len -= 1;
        self.slots[index].take()
    }
}

/// A fixed-capacity, thread-safe double-ended queue with blocking operations.
pub struct BlockingDeque<T> {
    ring: Mutex<Ring<T>>,
    changed: Condvar,
}

impl<T> BlockingDeque<T> {
    /// Creates an empty deque holding at most `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidCapacity(capacity)));
        }
        Ok(Self {
            ring: Mutex::new(Ring::with_capacity(capacity)),
            changed: Condvar::new(),
        })
    }

    /// Returns the maximum number of items.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.lock().capacity()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn size(&self) -> usize {
        self.ring.lock().len
    }

    /// Returns true if no items are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.lock().len == 0
    }

    /// Returns true if the deque is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.lock().is_full()
    }

    /// Pushes to the back without blocking.
    ///
    /// # Errors
    ///
    /// Hands the item back if the deque is full.
    pub fn try_push_back(&self, item: T) -> std::result::Result<(), T> {
        let mut ring = self.ring.lock();
        ring.push_back(item)?;
        self.changed.notify_all();
        Ok(())
    }

    /// Pushes to the front without blocking.
    ///
    /// # Errors
    ///
    /// Hands the item back if the deque is full.
    pub fn try_push_front(&self, item: T) -> std::result::Result<(), T> {
        let mut ring = self.ring.lock();
        ring.push_front(item)?;
        self.changed.notify_all();
        Ok(())
    }

    /// Pops from the front without blocking.
    pub fn try_pop_front(&self) -> Option<T> {
        let mut ring = self.ring.lock();
        let item = ring.pop_front()?;
        self.changed.notify_all();
        Some(item)
    }

    /// Pops from the back without blocking.
    pub fn try_pop_back(&self) -> Option<T> {
        let mut ring = self.ring.lock();
        let item = ring.pop_back()?;
        self.changed.notify_all();
        Some(item)
    }

    /// Pushes to the back, waiting for free capacity.
    ///
    /// # Errors
    ///
    /// Returns the item inside [`Interrupted`] if the deque is interrupted.
    pub fn push_back(&self, item: T) -> std::result::Result<(), Interrupted<T>> {
        self.push_with(item, Ring::push_back)
    }

    /// Pushes to the front, waiting for free capacity.
    ///
    /// # Errors
    ///
    /// Returns the item inside [`Interrupted`] if the deque is interrupted.
    pub fn push_front(&self, item: T) -> std::result::Result<(), Interrupted<T>> {
        self.push_with(item, Ring::push_front)
    }

    /// Pops from the front, waiting for an item.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if the deque is interrupted.
    pub fn pop_front(&self) -> std::result::Result<T, Interrupted> {
        self.pop_with(Ring::pop_front)
    }

    /// Pops from the back, waiting for an item.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if the deque is interrupted.
    pub fn pop_back(&self) -> std::result::Result<T, Interrupted> {
        self.pop_with(Ring::pop_back)
    }

    /// Interrupts every current and future blocking call.
    pub fn interrupt(&self) {
        let mut ring = self.ring.lock();
        ring.interrupted = true;
        self.changed.notify_all();
    }

    /// Returns true once [`interrupt`](Self::interrupt) has been called.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.ring.lock().interrupted
    }

    fn push_with(
        &self,
        mut item: T,
        push: fn(&mut Ring<T>, T) -> std::result::Result<(), T>,
    ) -> std::result::Result<(), Interrupted<T>> {
        let mut ring = self.ring.lock();
        loop {
            if ring.interrupted {
                return Err(Interrupted(item));
            }
            match push(&mut *ring, item) {
                Ok(()) => {
                    self.changed.notify_all();
                    return Ok(());
                }
                Err(rejected) => {
                    item = rejected;
                    self.changed.wait(&mut ring);
                }
            }
        }
    }

    fn pop_with(&self, pop: fn(&mut Ring<T>) -> Option<T>) -> std::result::Result<T, Interrupted> {
        let mut ring = self.ring.lock();
        loop {
            if ring.interrupted {
                return Err(Interrupted(()));
            }
            if let Some(item) = pop(&mut *ring) {
                self.changed.notify_all();
                return Ok(item);
            }
            self.changed.wait(&mut ring);
        }
    }
}

impl<T> fmt::Debug for BlockingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ring = self.ring.lock();
        f.debug_struct("BlockingDeque")
            .field("capacity", &ring.capacity())
            .field("len", &ring.len)
            .field("start", &ring.start)
            .field("interrupted", &ring.interrupted)
            .finish_non_exhaustive()
    }
}
