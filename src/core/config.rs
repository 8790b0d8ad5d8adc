//! Generation configuration with documented constants
//!
//! All magic numbers of the synthetic panel are collected here with
//! explanations of what each one controls.

use serde::Deserialize;

use crate::core::error::{BoardError, Result};

/// Configuration for a generation run.
///
/// The defaults reproduce the reference dataset: seed 42, a dense panel
/// over 2000..=2024.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the ChaCha8 stream. Two runs with the same seed produce
    /// identical panels.
    pub seed: u64,
    /// First year of the panel (inclusive).
    pub start_year: i32,
    /// Last year of the panel (inclusive).
    pub end_year: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_year: 2000,
            end_year: 2024,
        }
    }
}

impl GeneratorConfig {
    /// Fail fast on an empty year range before anything is generated.
    pub fn validate(&self) -> Result<()> {
        if self.end_year < self.start_year {
            return Err(BoardError::Config(format!(
                "empty year range: {}..={}",
                self.start_year, self.end_year
            )));
        }
        Ok(())
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    pub fn n_years(&self) -> usize {
        (self.end_year - self.start_year + 1) as usize
    }
}

/// Trend parameters for one linearly-drifting indicator.
///
/// Yearly value = base + growth_per_year * offset + uniform(-noise, noise),
/// clamped to [min, max] and rounded to `decimals` places.
#[derive(Debug, Clone, Copy)]
pub struct TrendSpec {
    /// Deterministic drift added per year of offset from the start year.
    pub growth_per_year: f64,
    /// Half-width of the uniform noise band around the trend line.
    pub noise: f64,
    /// Lower clamp bound; generation never emits values below this.
    pub min: f64,
    /// Upper clamp bound; generation never emits values above this.
    pub max: f64,
    /// Rounding precision matching the indicator's semantic granularity.
    pub decimals: u32,
}

/// Life expectancy creeps up ~0.15 years per year, stays within a
/// plausible 45..90 band.
pub const LIFE_EXP: TrendSpec = TrendSpec {
    growth_per_year: 0.15,
    noise: 0.3,
    min: 45.0,
    max: 90.0,
    decimals: 1,
};

/// Unemployment drifts slowly downward with wide year-to-year swings.
pub const UNEMPLOYMENT: TrendSpec = TrendSpec {
    growth_per_year: -0.1,
    noise: 0.8,
    min: 0.5,
    max: 35.0,
    decimals: 1,
};

/// Education index improves very slowly; bounded inside (0, 1).
pub const EDUCATION: TrendSpec = TrendSpec {
    growth_per_year: 0.005,
    noise: 0.01,
    min: 0.15,
    max: 0.99,
    decimals: 3,
};

/// Health expenditure as % of GDP grows modestly.
pub const HEALTH: TrendSpec = TrendSpec {
    growth_per_year: 0.08,
    noise: 0.3,
    min: 1.0,
    max: 20.0,
    decimals: 1,
};

/// CO₂ per capita rises slowly; tons per person per year.
pub const CO2: TrendSpec = TrendSpec {
    growth_per_year: 0.05,
    noise: 0.3,
    min: 0.1,
    max: 25.0,
    decimals: 2,
};

/// Internet adoption is the fastest-moving indicator, +2.5 points per
/// year, saturating just below 100%.
pub const INTERNET: TrendSpec = TrendSpec {
    growth_per_year: 2.5,
    noise: 2.0,
    min: 0.5,
    max: 99.9,
    decimals: 1,
};

/// GDP per capita compounds exponentially rather than drifting linearly;
/// only the noise band and clamp live here (the growth rate is sampled
/// per country from [GDP_GROWTH_LO, GDP_GROWTH_HI]).
pub const GDP_NOISE: f64 = 500.0;
pub const GDP_MIN: f64 = 300.0;
pub const GDP_MAX: f64 = 120_000.0;

/// Per-country annual population growth rate range (0.5%..2.5%).
pub const POP_GROWTH_LO: f64 = 0.005;
pub const POP_GROWTH_HI: f64 = 0.025;

/// Per-country annual GDP growth rate range (1%..4%).
pub const GDP_GROWTH_LO: f64 = 0.01;
pub const GDP_GROWTH_HI: f64 = 0.04;
