//! Synthetic panel generation
//!
//! Each country gets a fixed parameter tuple (base values plus two growth
//! rates) drawn from its continent's region profile, then a trajectory
//! expanded across every year in range: linear drift with bounded uniform
//! noise for most indicators, compounding exponential growth for GDP and
//! population. Everything is driven by an explicit seeded ChaCha8 stream,
//! one stream per country, so a panel is byte-for-byte reproducible and a
//! country's trajectory does not depend on generation order.

pub mod profiles;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::{self, GeneratorConfig, TrendSpec};
use crate::core::error::Result;
use crate::core::types::{Continent, CountryYearRecord};
use crate::store::RecordStore;
use profiles::{RegionProfile, REGIONS};

/// Fixed per-country generation parameters, sampled once and then
/// expanded across the whole year range.
#[derive(Debug, Clone)]
struct CountryParams {
    country: &'static str,
    continent: Continent,
    base_life: f64,
    base_gdp: f64,
    base_pop: f64,
    base_unemp: f64,
    base_edu: f64,
    base_health: f64,
    base_co2: f64,
    base_internet: f64,
    pop_growth: f64,
    gdp_growth: f64,
}

/// Dedicated random stream for one country: same seed + same index
/// always yields the same stream, regardless of how other countries
/// are generated around it.
fn country_rng(seed: u64, country_index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(country_index);
    rng
}

fn uniform(rng: &mut ChaCha8Rng, (lo, hi): (f64, f64)) -> f64 {
    rng.gen_range(lo..=hi)
}

/// Linear trend + bounded noise, clamped to the indicator's plausible
/// range.
fn trend(base: f64, offset: i32, spec: &TrendSpec, rng: &mut ChaCha8Rng) -> f64 {
    let value = base + spec.growth_per_year * offset as f64 + rng.gen_range(-spec.noise..=spec.noise);
    round_to(value.clamp(spec.min, spec.max), spec.decimals)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

impl CountryParams {
    /// Sampling order is fixed: eight bases, then the two growth rates.
    fn sample(country: &'static str, region: &RegionProfile, rng: &mut ChaCha8Rng) -> Self {
        Self {
            country,
            continent: region.continent,
            base_life: uniform(rng, region.life_exp),
            base_gdp: uniform(rng, region.gdp),
            base_pop: uniform(rng, region.pop),
            base_unemp: uniform(rng, region.unemployment),
            base_edu: uniform(rng, region.education),
            base_health: uniform(rng, region.health),
            base_co2: uniform(rng, region.co2),
            base_internet: uniform(rng, region.internet),
            pop_growth: rng.gen_range(config::POP_GROWTH_LO..=config::POP_GROWTH_HI),
            gdp_growth: rng.gen_range(config::GDP_GROWTH_LO..=config::GDP_GROWTH_HI),
        }
    }

    /// One record for one year offset. Noise draws happen in a fixed
    /// field order so the stream stays aligned across years.
    fn record_for(&self, year: i32, offset: i32, rng: &mut ChaCha8Rng) -> CountryYearRecord {
        let life_exp = trend(self.base_life, offset, &config::LIFE_EXP, rng);

        let gdp_raw = self.base_gdp * (1.0 + self.gdp_growth).powi(offset)
            + rng.gen_range(-config::GDP_NOISE..=config::GDP_NOISE);
        let gdp_per_cap = round_to(gdp_raw.clamp(config::GDP_MIN, config::GDP_MAX), 1);

        // Population compounds unbounded within the modeled range;
        // truncated to whole persons, no clamp.
        let pop = (self.base_pop * (1.0 + self.pop_growth).powi(offset)) as i64;

        let unemployment = trend(self.base_unemp, offset, &config::UNEMPLOYMENT, rng);
        let education_index = trend(self.base_edu, offset, &config::EDUCATION, rng);
        let health_exp_pct = trend(self.base_health, offset, &config::HEALTH, rng);
        let co2_per_cap = trend(self.base_co2, offset, &config::CO2, rng);
        let internet_pct = trend(self.base_internet, offset, &config::INTERNET, rng);

        CountryYearRecord {
            country: self.country.to_string(),
            continent: self.continent,
            year,
            life_exp,
            pop,
            gdp_per_cap,
            unemployment,
            education_index,
            health_exp_pct,
            co2_per_cap,
            internet_pct,
        }
    }
}

/// Generate the complete panel: one record per (country, year) pair.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<CountryYearRecord>> {
    config.validate()?;
    profiles::validate()?;

    let mut records = Vec::with_capacity(profiles::total_countries() * config.n_years());
    let mut country_index = 0u64;

    for region in &REGIONS {
        for country in region.countries {
            let mut rng = country_rng(config.seed, country_index);
            let params = CountryParams::sample(country, region, &mut rng);

            for year in config.years() {
                let offset = year - config.start_year;
                records.push(params.record_for(year, offset, &mut rng));
            }
            country_index += 1;
        }
    }

    tracing::debug!(
        records = records.len(),
        countries = country_index,
        years = config.n_years(),
        "panel generated"
    );
    Ok(records)
}

/// Result of a seeding run, for the CLI to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded {
        records: usize,
        countries: usize,
        years: usize,
    },
    /// Store already held data and reset was not requested; nothing was
    /// written (idempotent skip, not a merge).
    AlreadySeeded { records: usize },
}

/// Seed the store with a freshly generated panel.
///
/// Normal mode skips entirely when the store already holds at least one
/// record. Reset mode drops everything first and regenerates
/// unconditionally; if the insert fails the store is left empty, which a
/// retry recovers by re-running generation.
pub fn seed<S: RecordStore>(
    store: &mut S,
    config: &GeneratorConfig,
    reset: bool,
) -> Result<SeedOutcome> {
    if reset {
        store.drop_all()?;
        tracing::info!("store dropped for reset");
    } else {
        let existing = store.all()?.len();
        if existing > 0 {
            tracing::info!(records = existing, "store already seeded, skipping");
            return Ok(SeedOutcome::AlreadySeeded { records: existing });
        }
    }

    let records = generate(config)?;
    let total = records.len();
    store.insert_all(records)?;

    let countries = profiles::total_countries();
    let years = config.n_years();
    tracing::info!(records = total, countries, years, "seed complete");
    Ok(SeedOutcome::Seeded {
        records: total,
        countries,
        years,
    })
}
