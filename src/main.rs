//! Pump Log CLI
//!
//! Reads a file of contiguous 34-byte transaction frames and writes the
//! chronological log to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.bin > transactions.log
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace per-frame decoding

use pump_log::{pipeline, CliError, FRAME_SIZE};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(CliError::MissingArgument);
    }

    let buffer = fs::read(&args[1])?;
    if buffer.len() % FRAME_SIZE != 0 {
        return Err(CliError::RaggedInput {
            len: buffer.len() as u64,
            frame_size: FRAME_SIZE,
        });
    }
    let frame_count = buffer.len() / FRAME_SIZE;

    let log = pipeline::run(&buffer, frame_count)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(&log.data)?;

    Ok(())
}
