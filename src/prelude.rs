//! Commonly used items for convenient importing.
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> faultline::Result<i32> {
//!     ensure!(b != 0, 101, "Division by zero");
//!     Ok(a / b)
//! }
//!
//! fn average(values: &[i32]) -> faultline::Result<i32> {
//!     let sum: i32 = values.iter().sum();
//!     let count = i32::try_from(values.len()).context("too many values")?;
//!     Ok(check!(divide(sum, count)))
//! }
//!
//! assert_eq!(average(&[2, 4]).unwrap(), 3);
//! assert_eq!(average(&[]).unwrap_err().code(), 101);
//! ```
//!
//! # What's Included
//!
//! - **[`Error`]**: the error type
//! - **[`ResultExt`]** and **[`OptionExt`]**: extension methods
//! - the creation and propagation macros
//! - **[`defer!`]**: scope guards

pub use crate::{
    Error, bail, check, check_ctx, check_into, defer, ensure, ensure_into, error, expect,
    option_ext::OptionExt, result_ext::ResultExt, try_or, try_some, unwrap,
};
#[cfg(feature = "std")]
pub use crate::{check_sys, system_error};
