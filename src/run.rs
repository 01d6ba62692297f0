//! Turning the outcome of a program into an exit status.
//!
//! ```rust,no_run
//! use std::process::ExitCode;
//!
//! fn app_main() -> faultline::Result<()> {
//!     faultline::ensure!(std::env::args().count() > 1, 2, "missing argument");
//!     Ok(())
//! }
//!
//! fn main() -> ExitCode {
//!     faultline::exit_code(app_main())
//! }
//! ```

use std::process::ExitCode;

use crate::Error;

/// Returns `0` for success. A failure is logged at
/// [`Level::Error`](crate::log::Level::Error) and yields `1`.
pub fn run<T>(result: Result<T, Error>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(error) => {
            crate::log::log_error(&error);
            1
        }
    }
}

/// Like [`run`], returning an [`ExitCode`] for use in `main`.
pub fn exit_code<T>(result: Result<T, Error>) -> ExitCode {
    match run(result) {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
