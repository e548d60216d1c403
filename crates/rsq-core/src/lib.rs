//! Fixed-point reciprocal square root for integer-only RISC-V cores.
//!
//! This crate computes an approximate `1/sqrt(x)` of a 32-bit unsigned
//! integer, returning an unsigned Q16.16 fixed-point result, using only
//! integer shift/add/compare operations. The target profile is RV32I without
//! the M extension: no FPU, no hardware multiply or divide. It includes:
//! - A software widening 32x32 -> 64-bit multiply ([`softmul`])
//! - A leading-zero-count primitive ([`clz`])
//! - A 32-entry power-of-two seed table ([`table`])
//! - The kernel itself: table seed, piecewise-linear interpolation, and two
//!   Newton-Raphson refinement iterations ([`rsqrt`])
//!
//! The kernel is a pure function of its input. It never allocates or does
//! I/O, and it finishes in bounded, input-independent time.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod clz;
pub mod rsqrt;
pub mod softmul;
pub mod table;
pub mod uq32;

// Re-exports for convenience
pub use clz::clz32;
pub use rsqrt::{__rsq_inv_sqrt_q16, inv_sqrt_q16};
pub use softmul::mul32_wide;
pub use table::RSQRT_TABLE;
pub use uq32::UQ32;
