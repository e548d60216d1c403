//! Guest benchmark image.
//!
//! Mirrors the classic bare-metal driver: a Tower of Hanoi warm-up, then the
//! reciprocal-square-root report with per-call cycle and retired-instruction
//! counts. Output goes through the guest logger to the host.

#![no_std]
#![no_main]

extern crate alloc;

use core::panic::PanicInfo;

use log::info;
use rsq_guest::counters::measure;
use rsq_guest::syscall::{exit, write_stdout};
use rsq_guest::{heap, logger};

mod hanoi;
mod report;

/// Panics are formatted into a fixed stack buffer (the heap may be the thing
/// that broke), reported to the host, and the image exits nonzero.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        cursor: usize,
    }

    impl Write for BufWriter<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let to_write = bytes.len().min(self.buf.len() - self.cursor);
            self.buf[self.cursor..self.cursor + to_write].copy_from_slice(&bytes[..to_write]);
            self.cursor += to_write;
            Ok(())
        }
    }

    let mut buf = [0u8; 256];
    let mut writer = BufWriter {
        buf: &mut buf,
        cursor: 0,
    };
    let _ = write!(writer, "panic: {}", info.message());
    if let Some(location) = info.location() {
        let _ = write!(writer, " at {}:{}", location.file(), location.line());
    }
    let _ = writer.write_str("\n");
    let len = writer.cursor;
    write_stdout(&buf[..len]);
    exit(101)
}

#[unsafe(no_mangle)]
pub extern "C" fn main() {
    heap::init();
    logger::init();

    info!("test 1: tower of hanoi");
    let (moves, cycles, instret) = measure(|| hanoi::solve(hanoi::DISCS));
    info!(
        "hanoi({}) = {} moves, {} cycles, {} instructions",
        hanoi::DISCS,
        moves,
        cycles,
        instret
    );

    info!("test 2: fast rsqrt");
    report::run();

    info!("all tests completed");
    exit(0)
}
