//! Reciprocal-square-root accuracy and cost report.

use log::info;
use rsq_core::inv_sqrt_q16;
use rsq_guest::counters::measure;

/// Sample inputs with the expected Q16.16 encodings of their true values.
const SAMPLES: [(u32, u32); 7] = [
    (1, 65536),
    (4, 32768),
    (9, 21845),
    (25, 13107),
    (64, 8192),
    (144, 5461),
    (256, 4096),
];

/// Integer error percentage of `actual` against `expected`. The division
/// lowers to compiler-builtins' software routine on riscv32i.
fn error_percent(actual: u32, expected: u32) -> u32 {
    let diff = actual.abs_diff(expected) as u64;
    ((diff * 100) / expected as u64) as u32
}

pub fn run() {
    for (input, expected) in SAMPLES {
        let (result, cycles, instret) = measure(|| inv_sqrt_q16(input));
        info!(
            "rsqrt({input}) = {result} (raw {}, expected {expected}, error {}%, {cycles} cycles, {instret} instructions)",
            result.to_fixed(),
            error_percent(result.to_fixed(), expected),
        );
    }
    info!("fast rsqrt report completed");
}
