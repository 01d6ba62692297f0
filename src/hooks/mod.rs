//! Hooks for observing error creation and customizing how errors print.
//!
//! # Hook Types
//!
//! - **[`creation`]**: Runs for every newly created [`Error`], for example to
//!   count failures, forward them to monitoring, or stop in a debugger (see
//!   [`DebugTrap`]).
//! - **[`formatting`]**: Controls how a full error report is laid out. Only one
//!   formatter is active at a time; by default the [`DefaultErrorFormatter`]
//!   is used.
//!
//! Hooks are process-wide. Register them once at startup, before errors are
//! created on other threads.
//!
//! ```rust
//! use faultline::hooks::{
//!     builtin_hooks::error_formatter::DefaultErrorFormatter, creation::register_creation_hook,
//!     formatting::register_error_formatter_hook,
//! };
//!
//! register_creation_hook(|error: &faultline::Error| {
//!     eprintln!("error {} created", error.code());
//! });
//! register_error_formatter_hook(DefaultErrorFormatter::ANSI);
//! ```
//!
//! [`Error`]: crate::Error
//! [`DebugTrap`]: builtin_hooks::debug_trap::DebugTrap
//! [`DefaultErrorFormatter`]: builtin_hooks::error_formatter::DefaultErrorFormatter

pub mod builtin_hooks;
pub mod creation;
pub mod formatting;

mod hook_slot;
