//! Image entry point.
//!
//! Loads the global and stack pointers from linker-provided symbols, zeroes
//! `.bss`, and calls the image's `main`. If `main` returns, the image exits
//! cleanly through the host. Memory layout itself comes from the emulator's
//! linker script; board bring-up is out of scope here.

#[cfg(target_arch = "riscv32")]
core::arch::global_asm!(
    r#"
    .section .init, "ax"
    .global _start
_start:
    .option push
    .option norelax
    la gp, __global_pointer$
    .option pop
    la sp, __stack_top
    la t0, __bss_start
    la t1, __bss_end
1:
    bgeu t0, t1, 2f
    sw zero, 0(t0)
    addi t0, t0, 4
    j 1b
2:
    call main
    li a7, 93
    li a0, 0
    ecall
"#
);
