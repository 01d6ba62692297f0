//! Creating an error and letting it end the program.
//!
//! `safe_div` fails with its own code, `app_main` propagates the failure with
//! `check!`, and `exit_code` logs the report and exits with status 1.

use std::process::ExitCode;

use faultline::prelude::*;

fn safe_div(a: i32, b: i32) -> faultline::Result<i32> {
    if b == 0 {
        bail!(101, "Division by zero");
    }
    Ok(a / b)
}

fn app_main() -> faultline::Result<()> {
    let result = check!(safe_div(10, 2));
    println!("10 / 2 = {result}");

    let bad = check!(safe_div(10, 0));
    println!("This line is never reached! {bad}");

    Ok(())
}

fn main() -> ExitCode {
    faultline::exit_code(app_main())
}
