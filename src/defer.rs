//! Scope guards running cleanup code when a scope is left.
//!
//! The cleanup runs on every exit path, including early returns taken by
//! the propagation macros and unwinding.
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use faultline::{bail, defer};
//!
//! let closed = Cell::new(false);
//! let result = (|| -> faultline::Result<()> {
//!     defer!(closed.set(true));
//!     bail!(5, "Read failed");
//! })();
//! assert!(result.is_err());
//! assert!(closed.get());
//! ```

/// Runs a closure when dropped, unless cancelled.
#[must_use = "the action runs immediately if the guard is not bound"]
pub struct Defer<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    /// Creates a guard running `action` when dropped.
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Disarms the guard; the action will not run.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl<F: FnOnce()> core::fmt::Debug for Defer<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Defer")
            .field("armed", &self.action.is_some())
            .finish()
    }
}

/// Runs the given statements when the current scope is left.
///
/// Guards declared in the same scope run in reverse order of declaration.
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::defer::Defer::new(|| { $($body)*; });
    };
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};
    use core::cell::{Cell, RefCell};

    use super::*;

    #[test]
    fn test_runs_on_scope_exit() {
        let ran = Cell::new(false);
        {
            let _guard = Defer::new(|| ran.set(true));
            assert!(!ran.get());
        }
        assert!(ran.get());
    }

    #[test]
    fn test_cancel() {
        let ran = Cell::new(false);
        let guard = Defer::new(|| ran.set(true));
        guard.cancel();
        assert!(!ran.get());
    }

    #[test]
    fn test_macro_reverse_order() {
        let order = RefCell::new(Vec::new());
        {
            crate::defer!(order.borrow_mut().push(1));
            crate::defer!(order.borrow_mut().push(2));
        }
        assert_eq!(*order.borrow(), vec![2, 1]);
    }

    #[test]
    fn test_runs_on_early_return() {
        fn work(closed: &Cell<u32>) -> crate::Result<()> {
            crate::defer!(closed.set(closed.get() + 1));
            crate::bail!(5, "Read failed");
        }
        let closed = Cell::new(0);
        assert!(work(&closed).is_err());
        assert_eq!(closed.get(), 1);
    }
}
