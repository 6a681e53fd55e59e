//! Thread-local depth counter with scoped increments.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Current call depth on this thread.
pub fn current() -> usize {
    DEPTH.with(Cell::get)
}

/// Increment the depth for the lifetime of the returned guard.
pub fn enter() -> DepthGuard {
    let entered_at = DEPTH.with(|depth| {
        let before = depth.get();
        depth.set(before + 1);
        before
    });

    DepthGuard {
        entered_at,
        _thread_bound: PhantomData,
    }
}

/// Scoped depth increment.
///
/// Dropping the guard restores the depth observed when it was created, on
/// normal return and while unwinding alike. The guard is tied to the thread
/// that created it.
#[must_use = "dropping the guard immediately restores the previous depth"]
#[derive(Debug)]
pub struct DepthGuard {
    entered_at: usize,
    _thread_bound: PhantomData<*const ()>,
}

impl DepthGuard {
    /// Depth that was active before this guard was taken.
    pub fn entered_at(&self) -> usize {
        self.entered_at
    }

    /// Depth inside the guarded scope.
    pub fn depth(&self) -> usize {
        self.entered_at + 1
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(self.entered_at));
    }
}
