//! Guest logger.
//!
//! Routes `log` records to the host write syscall. Filtering happens on the
//! host side; the guest emits everything up to `Info`.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use log::{LevelFilter, Log, Metadata, Record};

use crate::syscall::write_stdout;

/// Logger that routes records to the host write syscall.
pub struct GuestLogger;

/// Render a record as a single output line.
fn format_record(record: &Record) -> String {
    format!("[{} {}] {}\n", record.level(), record.target(), record.args())
}

impl Log for GuestLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format_record(record);
        write_stdout(line.as_bytes());
    }

    fn flush(&self) {
        // No-op: write_stdout is unbuffered.
    }
}

/// Install the guest logger.
pub fn init() {
    let logger = Box::new(GuestLogger);
    log::set_logger(Box::leak(logger))
        .map(|()| log::set_max_level(LevelFilter::Info))
        .expect("logger already installed");
}
