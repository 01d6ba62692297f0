//! An error crossing several layers on its way to `main`.
//!
//! Each layer adds what it was doing with `check_ctx!`, and the report
//! printed at exit shows the original failure, every context line and the
//! trace of functions the error passed through.

use std::process::ExitCode;

use faultline::{log_info, prelude::*};

fn read_sector(sector_id: u32) -> faultline::Result<()> {
    ensure!(sector_id <= 1000, 500, "Hardware Read Error");
    Ok(())
}

fn load_file(filename: &str) -> faultline::Result<()> {
    log_info!("Loading {filename}...");
    check_ctx!(read_sector(9999), "Failed to read file header");
    Ok(())
}

fn app_main() -> faultline::Result<()> {
    check_ctx!(load_file("data.db"), "Opening the database");
    Ok(())
}

fn main() -> ExitCode {
    faultline::exit_code(app_main())
}
