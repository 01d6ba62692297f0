//! A creation hook that stops an attached debugger where errors are created.
//!
//! ```rust,no_run
//! use faultline::hooks::{builtin_hooks::debug_trap::DebugTrap, creation::register_creation_hook};
//!
//! if cfg!(debug_assertions) {
//!     register_creation_hook(DebugTrap);
//! }
//! ```
//!
//! Without a debugger attached, the trap terminates the process with
//! `SIGTRAP` (or the platform equivalent), so only register it during
//! development. On architectures without a known breakpoint instruction the
//! hook does nothing.

use crate::{Error, hooks::creation::ErrorCreationHook};

/// Executes a breakpoint instruction every time an error is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugTrap;

impl ErrorCreationHook for DebugTrap {
    fn on_creation(&self, _error: &Error) {
        breakpoint();
    }
}

#[inline(always)]
fn breakpoint() {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    // SAFETY: `int3` only raises a debug exception; it touches no memory
    // and no registers besides the instruction pointer.
    unsafe {
        core::arch::asm!("int3", options(nomem, nostack));
    }

    #[cfg(target_arch = "aarch64")]
    // SAFETY: `brk` only raises a debug exception; it touches no memory.
    unsafe {
        core::arch::asm!("brk #0xf000", options(nomem, nostack));
    }
}
