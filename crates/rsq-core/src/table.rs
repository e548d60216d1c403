//! Seed table for the reciprocal square root kernel.

/// `RSQRT_TABLE[e]` holds `1/sqrt(2^e)` in Q16.16, one entry per power-of-two
/// exponent 0..=31.
///
/// The values are supplied literally rather than computed: the kernel must
/// not depend on any prior square-root capability, and downstream error
/// characteristics depend on these exact constants. Entries are strictly
/// non-increasing.
pub const RSQRT_TABLE: [u32; 32] = [
    65536, 46341, 32768, 23170, 16384, // 2^0 to 2^4
    11585, 8192, 5793, 4096, 2896, // 2^5 to 2^9
    2048, 1448, 1024, 724, 512, // 2^10 to 2^14
    362, 256, 181, 128, 90, // 2^15 to 2^19
    64, 45, 32, 23, 16, // 2^20 to 2^24
    11, 8, 6, 4, 3, // 2^25 to 2^29
    2, 1, // 2^30, 2^31
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(RSQRT_TABLE[0], 65536); // 1.0
        assert_eq!(RSQRT_TABLE[31], 1); // smallest nonzero value
    }

    #[test]
    fn strictly_non_increasing() {
        for e in 1..32 {
            assert!(
                RSQRT_TABLE[e] < RSQRT_TABLE[e - 1],
                "table[{e}] = {} >= table[{}] = {}",
                RSQRT_TABLE[e],
                e - 1,
                RSQRT_TABLE[e - 1]
            );
        }
    }

    #[test]
    fn tracks_the_closed_form() {
        // Each entry sits within one unit of 65536/sqrt(2^e). (Entry 19 is
        // truncated rather than rounded, so exact round-to-nearest does not
        // hold across the whole table.)
        for e in 0..32 {
            let reference = 65536.0 / (2.0f64).powi(e as i32).sqrt();
            let distance = (RSQRT_TABLE[e] as f64 - reference).abs();
            assert!(
                distance < 1.0,
                "table[{e}] = {} vs reference {reference}",
                RSQRT_TABLE[e]
            );
        }
    }

    #[test]
    fn alternate_entries_halve() {
        // table[e + 2] = table[e] / 2 within rounding, since
        // 1/sqrt(4x) = (1/sqrt(x)) / 2.
        for e in 0..30 {
            let halved = RSQRT_TABLE[e] / 2;
            let diff = RSQRT_TABLE[e + 2].abs_diff(halved);
            assert!(diff <= 1, "table[{}] = {} vs table[{e}]/2 = {halved}", e + 2, RSQRT_TABLE[e + 2]);
        }
    }
}
