//! Guest-side runtime support for RV32I images.
//!
//! Everything the benchmark image needs around the kernel: the `_start`
//! entry stub, a heap for log-message formatting, host syscalls for byte
//! output and exit, the cycle/instret counters, and a `log` backend that
//! routes records to the host.
//!
//! The RISC-V pieces are gated on `target_arch = "riscv32"`; host builds get
//! inert stubs so the pure parts of the crate compile and unit-test
//! anywhere.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod counters;
pub mod entry;
pub mod heap;
pub mod logger;
pub mod syscall;
