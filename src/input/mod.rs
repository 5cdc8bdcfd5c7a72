//! Array input: parsing user-typed lists and generating arrays
//!
//! Parsing is lenient. Tokens are split on whitespace and commas, anything
//! that is not an `i64` is collected in [`ParsedInput::rejected`] and the rest
//! is kept. Validation of the resulting length happens in
//! [`RunController::start`](crate::engine::controller::RunController::start).

use clap::ValueEnum;
use rand::seq::index;
use rand::Rng;
use std::fmt;

/// Array shown when the program starts without input
pub const DEFAULT_INPUT: &str = "58 12 91 7 34 76 25 63 89 3 47 68 20 99 14 55 81 39 6 72";

/// Generated values lie in `MIN_VALUE..=MAX_VALUE`
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 100;

/// Length of a generated array unless configured otherwise
pub const DEFAULT_LEN: usize = 20;

/// Distinct values drawn from for [`Distribution::FewUnique`]
const FEW_UNIQUE_COUNT: usize = 5;

/// Result of parsing a typed list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub values: Vec<i64>,
    pub rejected: Vec<String>,
}

impl ParsedInput {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse a whitespace and/or comma separated list of integers
pub fn parse_numbers(text: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        match token.parse::<i64>() {
            Ok(value) => parsed.values.push(value),
            Err(_) => parsed.rejected.push(token.to_string()),
        }
    }
    parsed
}

/// Shape of a generated array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Distribution {
    #[default]
    Random,
    Sorted,
    Reversed,
    NearlySorted,
    FewUnique,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reversed => "reversed",
            Distribution::NearlySorted => "nearly sorted",
            Distribution::FewUnique => "few unique",
        };
        f.write_str(name)
    }
}

/// Parameters for [`generate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub len: usize,
    pub distribution: Distribution,
    /// Adjacent swaps applied to a nearly sorted array, as a percentage of `len`
    pub swap_percent: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            len: DEFAULT_LEN,
            distribution: Distribution::Random,
            swap_percent: 10,
        }
    }
}

/// Generate an array according to `config`
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<i64> {
    let len = config.len;
    match config.distribution {
        Distribution::Random => random_values(len, rng),
        Distribution::Sorted => {
            let mut values = random_values(len, rng);
            values.sort_unstable();
            values
        }
        Distribution::Reversed => {
            let mut values = random_values(len, rng);
            values.sort_unstable_by(|a, b| b.cmp(a));
            values
        }
        Distribution::NearlySorted => {
            let mut values = random_values(len, rng);
            values.sort_unstable();
            if len >= 2 && config.swap_percent > 0 {
                let swaps = (len * usize::from(config.swap_percent.min(100)) / 100).max(1);
                for _ in 0..swaps {
                    let i = rng.gen_range(0..len - 1);
                    values.swap(i, i + 1);
                }
            }
            values
        }
        Distribution::FewUnique => {
            let span = (MAX_VALUE - MIN_VALUE + 1) as usize;
            let pool: Vec<i64> = index::sample(rng, span, FEW_UNIQUE_COUNT)
                .into_iter()
                .map(|offset| MIN_VALUE + offset as i64)
                .collect();
            (0..len).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
        }
    }
}

fn random_values<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}
