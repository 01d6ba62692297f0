//! Hooks that run whenever an [`Error`] is created.
//!
//! Creation hooks observe the freshly built error before it is returned to
//! the code that created it. They run for [`Error::new`], the creation macros
//! and conversions from foreign error types, but not when an existing error
//! is wrapped or traced.
//!
//! Hooks must not create errors themselves.
//!
//! ```rust
//! use core::sync::atomic::{AtomicUsize, Ordering};
//!
//! use faultline::hooks::creation::register_creation_hook;
//!
//! static CREATED: AtomicUsize = AtomicUsize::new(0);
//!
//! register_creation_hook(|_: &faultline::Error| {
//!     CREATED.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! let _error = faultline::Error::new(1, "counted");
//! assert!(CREATED.load(Ordering::Relaxed) >= 1);
//! ```
//!
//! [`Error`]: crate::Error
//! [`Error::new`]: crate::Error::new

use alloc::{boxed::Box, vec::Vec};

use crate::{Error, hooks::hook_slot::HookSlot};

type HookSet = Vec<Box<dyn ErrorCreationHook>>;

static HOOKS: HookSlot<HookSet> = HookSlot::new();

/// A hook that is called whenever an [`Error`] is created.
///
/// Implemented for every `Fn(&Error)` closure that is `Send + Sync`.
pub trait ErrorCreationHook: 'static + Send + Sync {
    /// Called with the newly created error.
    fn on_creation(&self, error: &Error);
}

impl<F> ErrorCreationHook for F
where
    F: Fn(&Error) + 'static + Send + Sync,
{
    fn on_creation(&self, error: &Error) {
        self(error)
    }
}

/// Registers a hook to be run for every error created from now on.
///
/// Hooks run in registration order.
pub fn register_creation_hook(hook: impl ErrorCreationHook) {
    let hook: Box<dyn ErrorCreationHook> = Box::new(hook);
    HOOKS.update(|hooks| hooks.get_or_insert_with(Vec::new).push(hook));
}

/// Removes all registered creation hooks.
pub fn clear_creation_hooks() {
    HOOKS.replace(None);
}

pub(crate) fn run_creation_hooks(error: &Error) {
    HOOKS.with(|hooks| {
        for hook in hooks.into_iter().flatten() {
            hook.on_creation(error);
        }
    });
}
