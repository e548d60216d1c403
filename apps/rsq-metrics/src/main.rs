//! Accuracy metrics for the reciprocal-square-root kernel.
//!
//! Sweeps the kernel against an `f64` reference and reports worst-case and
//! mean relative error plus monotonicity violations. With `--toml-out` the
//! snapshot is also written as TOML, so accuracy regressions show up as
//! diffs when the kernel changes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::info;
use rsq_core::inv_sqrt_q16;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "rsq-metrics", about = "Reciprocal square root accuracy metrics")]
struct Args {
    /// Highest input to sweep (inclusive).
    #[arg(long, default_value_t = 1 << 20)]
    max_input: u32,

    /// Stride between swept inputs.
    #[arg(long, default_value_t = 1)]
    step: u32,

    /// Write the metrics snapshot to this TOML file.
    #[arg(long)]
    toml_out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AccuracyMetrics {
    max_input: u32,
    step: u32,
    samples: u64,
    max_relative_error: f64,
    mean_relative_error: f64,
    worst_input: u32,
    monotonicity_violations: u64,
}

fn sweep(max_input: u32, step: u32) -> AccuracyMetrics {
    let mut samples = 0u64;
    let mut max_err = 0.0f64;
    let mut err_sum = 0.0f64;
    let mut worst_input = 1u32;
    let mut violations = 0u64;
    let mut prev_raw: Option<u32> = None;

    let mut x = 1u32;
    while x <= max_input {
        let raw = inv_sqrt_q16(x).to_fixed();
        let reference = 65536.0 / (x as f64).sqrt();
        let err = (raw as f64 - reference).abs() / reference;
        if err > max_err {
            max_err = err;
            worst_input = x;
        }
        err_sum += err;
        if let Some(prev) = prev_raw {
            if raw > prev {
                violations += 1;
            }
        }
        prev_raw = Some(raw);
        samples += 1;

        match x.checked_add(step) {
            Some(next) => x = next,
            None => break,
        }
    }

    AccuracyMetrics {
        max_input,
        step,
        samples,
        max_relative_error: max_err,
        mean_relative_error: if samples == 0 { 0.0 } else { err_sum / samples as f64 },
        worst_input,
        monotonicity_violations: violations,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.step > 0, "--step must be nonzero");
    ensure!(args.max_input >= 1, "--max-input must be at least 1");

    info!(
        "sweeping inputs 1..={} with step {}",
        args.max_input, args.step
    );
    let metrics = sweep(args.max_input, args.step);

    println!("samples:                 {}", metrics.samples);
    println!(
        "max relative error:      {:.6} (at input {})",
        metrics.max_relative_error, metrics.worst_input
    );
    println!("mean relative error:     {:.6}", metrics.mean_relative_error);
    println!("monotonicity violations: {}", metrics.monotonicity_violations);

    if let Some(path) = args.toml_out {
        let body = toml::to_string_pretty(&metrics).context("serializing metrics")?;
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
