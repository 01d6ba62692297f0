//! Built-in hooks: the default error formatter and a debugger trap.

pub mod debug_trap;
pub mod error_formatter;
