//! Command-line configuration

use crate::engine::algorithm::Algorithm;
use crate::input::{Distribution, GeneratorConfig, DEFAULT_LEN};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Fastest autoplay interval
pub const MIN_DELAY_MS: u64 = 100;
/// Slowest autoplay interval
pub const MAX_DELAY_MS: u64 = 5000;
/// Interval granularity used by the speed keys
pub const DELAY_STEP_MS: u64 = 100;
pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Parser)]
#[command(name = "sortty")]
#[command(about = "Step-by-step sorting algorithm visualizer with time travel")]
#[command(version)]
pub struct Cli {
    /// Algorithm to run first
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Numbers to sort, separated by whitespace or commas
    #[arg(short, long, conflicts_with = "random")]
    pub input: Option<String>,

    /// Generate N random values instead of using --input
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Shape of generated arrays
    #[arg(short, long, value_enum, default_value_t = Distribution::Random)]
    pub distribution: Distribution,

    /// Adjacent swaps applied to a nearly sorted array, as a percentage of its length
    #[arg(long = "nearly-sorted", value_name = "PCT", default_value_t = 10,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub swap_percent: u8,

    /// Seed for generated arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Autoplay interval in milliseconds
    #[arg(long = "delay-ms", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Start paused instead of playing
    #[arg(long)]
    pub step_mode: bool,

    /// Run to completion without the TUI and print the step log
    #[arg(long)]
    pub headless: bool,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Generator settings derived from the flags
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            len: self.random.unwrap_or(DEFAULT_LEN),
            distribution: self.distribution,
            swap_percent: self.swap_percent,
        }
    }

    /// Autoplay interval after snapping
    pub fn delay(&self) -> Duration {
        Duration::from_millis(snap_delay(self.delay_ms))
    }
}

/// Round to the nearest step and clamp into the supported range
pub fn snap_delay(ms: u64) -> u64 {
    let rounded = ms.saturating_add(DELAY_STEP_MS / 2) / DELAY_STEP_MS * DELAY_STEP_MS;
    rounded.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_delay() {
        assert_eq!(snap_delay(0), MIN_DELAY_MS);
        assert_eq!(snap_delay(149), 100);
        assert_eq!(snap_delay(150), 200);
        assert_eq!(snap_delay(520), 500);
        assert_eq!(snap_delay(60_000), MAX_DELAY_MS);
        assert_eq!(snap_delay(u64::MAX), MAX_DELAY_MS);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sortty"]).unwrap();
        assert_eq!(cli.algorithm, Algorithm::Bubble);
        assert_eq!(cli.input, None);
        assert_eq!(cli.delay(), Duration::from_millis(DEFAULT_DELAY_MS));
        assert_eq!(cli.generator(), GeneratorConfig::default());
        assert!(!cli.headless);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "sortty",
            "--algorithm",
            "radix",
            "--random",
            "30",
            "--distribution",
            "nearly-sorted",
            "--nearly-sorted",
            "25",
            "--seed",
            "9",
            "--headless",
        ])
        .unwrap();
        assert_eq!(cli.algorithm, Algorithm::Radix);
        assert_eq!(cli.seed, Some(9));
        let generator = cli.generator();
        assert_eq!(generator.len, 30);
        assert_eq!(generator.distribution, Distribution::NearlySorted);
        assert_eq!(generator.swap_percent, 25);
    }

    #[test]
    fn test_huge_delay_is_clamped() {
        let cli = Cli::try_parse_from(["sortty", "--delay-ms", "18446744073709551615"]).unwrap();
        assert_eq!(cli.delay(), Duration::from_millis(MAX_DELAY_MS));
    }

    #[test]
    fn test_input_conflicts_with_random() {
        assert!(Cli::try_parse_from(["sortty", "--input", "3 1 2", "--random", "5"]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_percentage() {
        assert!(Cli::try_parse_from(["sortty", "--nearly-sorted", "101"]).is_err());
    }
}
