//! Fast reciprocal square root in Q16.16 fixed point.
//!
//! Pipeline: locate the power-of-two band of the input with [`clz32`], seed
//! the estimate from [`RSQRT_TABLE`], apply a piecewise-linear correction
//! toward the next table entry based on the input's fractional position
//! inside its band, then sharpen with two Newton-Raphson iterations:
//!
//! ```text
//! y <- y * (3 - x*y^2) / 2
//! ```
//!
//! scaled for Q16.16 arithmetic (the final `>> 17` absorbs both the
//! fixed-point scale and the constant divisor 2). All wide products go
//! through [`mul32_wide`]; every narrowing is plain two's-complement
//! truncation, never saturation, so results match the shift-and-add
//! reference bit for bit even when an intermediate product wraps.

use log::trace;

use crate::clz::clz32;
use crate::softmul::mul32_wide;
use crate::table::RSQRT_TABLE;
use crate::uq32::UQ32;

/// Fixed refinement budget. Not adaptive: the tested error profile of the
/// kernel assumes exactly two iterations.
const NEWTON_ITERATIONS: u32 = 2;

/// 3.0 in Q16.16, the constant term of the Newton update.
const THREE: u32 = 3 << 16;

/// Approximate `1/sqrt(x)` as unsigned Q16.16.
///
/// Input `0` yields [`UQ32::MAX`] as an "undefined/infinite" sentinel; the
/// sentinel must not be used as a real reciprocal-square-root value. Every
/// other input produces a usable approximation in bounded,
/// input-independent time.
pub fn inv_sqrt_q16(x: u32) -> UQ32 {
    if x == 0 {
        return UQ32::MAX;
    }
    if x == 1 {
        return UQ32::ONE;
    }

    // Index of the highest set bit; x >= 2 here, so 1 <= exp <= 31.
    let exp = 31 - clz32(x);
    let mut y = RSQRT_TABLE[exp as usize];
    trace!("x={x} exp={exp} seed={y}");

    // Not an exact power of two: interpolate toward the next table entry
    // based on how far x sits inside [2^exp, 2^(exp+1)).
    if x > (1u32 << exp) {
        let y_next = if exp < 31 { RSQRT_TABLE[exp as usize + 1] } else { 0 };
        let delta = y - y_next;
        // Fractional position in the band as Q16.16, in [0, 1).
        let frac = ((((x - (1u32 << exp)) as u64) << 16) >> exp) as u32;
        y -= (mul32_wide(delta, frac) >> 16) as u32;
    }

    for _ in 0..NEWTON_ITERATIONS {
        let y2 = mul32_wide(y, y) as u32;
        let xy2 = (mul32_wide(x, y2) >> 16) as u32;
        y = (mul32_wide(y, THREE.wrapping_sub(xy2)) >> 17) as u32;
    }

    UQ32(y)
}

/// Raw-symbol wrapper so guest images and JIT-linked callers can reach the
/// kernel without the typed surface.
#[unsafe(no_mangle)]
pub extern "C" fn __rsq_inv_sqrt_q16(x: u32) -> u32 {
    inv_sqrt_q16(x).to_fixed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_yields_the_sentinel() {
        assert_eq!(inv_sqrt_q16(0), UQ32::MAX);
    }

    #[test]
    fn one_yields_exactly_one() {
        assert_eq!(inv_sqrt_q16(1), UQ32::ONE);
    }

    #[test]
    fn power_of_two_inputs_follow_the_table() {
        // Powers of two skip the interpolation branch and keep the table
        // seed, except where the table entry is rounded up from the true
        // value: there the refinement settles one step lower.
        let refined_down: [(u32, u32); 4] = [(7, 5792), (23, 22), (27, 5), (29, 2)];
        for e in 0..32u32 {
            let expected = refined_down
                .iter()
                .find(|(exp, _)| *exp == e)
                .map(|(_, v)| *v)
                .unwrap_or(RSQRT_TABLE[e as usize]);
            assert_eq!(
                inv_sqrt_q16(1u32 << e).to_fixed(),
                expected,
                "x = 2^{e}"
            );
        }
    }

    #[test]
    fn sample_inputs_stay_within_tolerance() {
        // Expected Q16.16 encodings of 1/sqrt(x) for the reference sample
        // set. Tolerance is well inside the kernel's few-percent error
        // budget.
        let samples: [(u32, u32); 7] = [
            (1, 65536),
            (4, 32768),
            (9, 21845),
            (25, 13107),
            (64, 8192),
            (144, 5461),
            (256, 4096),
        ];
        for (x, expected) in samples {
            let got = inv_sqrt_q16(x).to_fixed();
            let error = got.abs_diff(expected) as f64 / expected as f64;
            assert!(
                error < 0.01,
                "rsqrt({x}) = {got}, expected ~{expected} (error {error})"
            );
        }
    }

    #[test]
    fn raw_wrapper_matches_typed_surface() {
        for x in [0u32, 1, 2, 9, 64, 1000, u32::MAX] {
            assert_eq!(__rsq_inv_sqrt_q16(x), inv_sqrt_q16(x).to_fixed());
        }
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        for x in [0u32, 1, 9, 144, 0xDEAD_BEEF, u32::MAX] {
            let first = inv_sqrt_q16(x);
            for _ in 0..8 {
                assert_eq!(inv_sqrt_q16(x), first, "x={x}");
            }
        }
    }

    #[test]
    fn largest_inputs_stay_at_the_floor() {
        // Beyond 2^31 the next table entry is conceptually 0; the result
        // bottoms out at the smallest nonzero fixed-point value.
        assert_eq!(inv_sqrt_q16(1u32 << 31).to_fixed(), 1);
        assert_eq!(inv_sqrt_q16(u32::MAX).to_fixed(), 1);
    }
}
