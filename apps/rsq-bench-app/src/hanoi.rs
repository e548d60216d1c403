//! Tower of Hanoi warm-up benchmark.
//!
//! Placeholder workload: pure call/return and integer adds, no multiplies,
//! so it exercises the pipeline without touching the kernel's soft-multiply
//! path.

/// Disc count for the warm-up run. 2^8 - 1 = 255 moves.
pub const DISCS: u32 = 8;

/// Count the moves to solve an `n`-disc tower.
pub fn solve(n: u32) -> u32 {
    transfer(n, 0, 2, 1)
}

fn transfer(n: u32, from: u8, to: u8, via: u8) -> u32 {
    if n == 0 {
        return 0;
    }
    let mut moves = transfer(n - 1, from, via, to);
    moves += 1; // disc n moves from `from` to `to`
    moves + transfer(n - 1, via, to, from)
}
