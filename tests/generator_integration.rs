//! Integration tests for the synthetic panel generator
//!
//! These verify the dataset-level contracts:
//! - dense panel: one record per (country, year), no gaps, no duplicates
//! - every numeric field inside its documented clamp range
//! - determinism under a fixed seed
//! - seeding/reset semantics against the record store

use std::collections::{HashMap, HashSet};

use worldboard::core::config::GeneratorConfig;
use worldboard::generator::{self, profiles, SeedOutcome};
use worldboard::store::{MemoryStore, RecordStore};

#[test]
fn panel_is_dense_with_unique_keys() {
    let config = GeneratorConfig::default();
    let records = generator::generate(&config).unwrap();

    assert_eq!(records.len(), 65 * 25);
    assert_eq!(profiles::total_countries(), 65);

    let mut seen = HashSet::new();
    let mut per_country: HashMap<&str, Vec<i32>> = HashMap::new();
    for r in &records {
        assert!(
            seen.insert((r.country.as_str(), r.year)),
            "duplicate key ({}, {})",
            r.country,
            r.year
        );
        per_country.entry(r.country.as_str()).or_default().push(r.year);
    }

    let expected: Vec<i32> = (2000..=2024).collect();
    assert_eq!(per_country.len(), 65);
    for (country, mut years) in per_country {
        years.sort_unstable();
        assert_eq!(years, expected, "year gaps for {country}");
    }
}

#[test]
fn every_field_is_inside_its_clamp_range() {
    let records = generator::generate(&GeneratorConfig::default()).unwrap();

    for r in &records {
        assert!((45.0..=90.0).contains(&r.life_exp), "life_exp {}", r.life_exp);
        assert!(
            (300.0..=120_000.0).contains(&r.gdp_per_cap),
            "gdp {}",
            r.gdp_per_cap
        );
        assert!(r.pop > 0, "pop {}", r.pop);
        assert!(
            (0.5..=35.0).contains(&r.unemployment),
            "unemployment {}",
            r.unemployment
        );
        assert!(
            (0.15..=0.99).contains(&r.education_index),
            "education {}",
            r.education_index
        );
        assert!(
            (1.0..=20.0).contains(&r.health_exp_pct),
            "health {}",
            r.health_exp_pct
        );
        assert!((0.1..=25.0).contains(&r.co2_per_cap), "co2 {}", r.co2_per_cap);
        assert!(
            (0.5..=99.9).contains(&r.internet_pct),
            "internet {}",
            r.internet_pct
        );
    }
}

#[test]
fn same_seed_reproduces_the_panel_exactly() {
    let config = GeneratorConfig::default();
    let a = generator::generate(&config).unwrap();
    let b = generator::generate(&config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_diverge() {
    let a = generator::generate(&GeneratorConfig::default()).unwrap();
    let b = generator::generate(&GeneratorConfig {
        seed: 43,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}

#[test]
fn population_compounds_from_its_base() {
    let records = generator::generate(&GeneratorConfig::default()).unwrap();

    // Growth rates are all positive, so each country's final population
    // exceeds its starting population.
    let mut first: HashMap<&str, i64> = HashMap::new();
    let mut last: HashMap<&str, i64> = HashMap::new();
    for r in &records {
        if r.year == 2000 {
            first.insert(r.country.as_str(), r.pop);
        }
        if r.year == 2024 {
            last.insert(r.country.as_str(), r.pop);
        }
    }
    for (country, start) in first {
        assert!(last[country] > start, "population shrank for {country}");
    }
}

#[test]
fn normal_seed_is_a_noop_on_populated_store() {
    let config = GeneratorConfig::default();
    let mut store = MemoryStore::new();

    let first = generator::seed(&mut store, &config, false).unwrap();
    assert!(matches!(first, SeedOutcome::Seeded { records: 1625, .. }));
    let count = store.len();

    let second = generator::seed(&mut store, &config, false).unwrap();
    assert_eq!(second, SeedOutcome::AlreadySeeded { records: count });
    assert_eq!(store.len(), count);
}

#[test]
fn reset_is_idempotent() {
    let config = GeneratorConfig::default();
    let mut store = MemoryStore::new();

    generator::seed(&mut store, &config, true).unwrap();
    let first_count = store.len();
    generator::seed(&mut store, &config, true).unwrap();
    assert_eq!(store.len(), first_count);
}

#[test]
fn store_distinct_queries_cover_the_panel() {
    let config = GeneratorConfig::default();
    let mut store = MemoryStore::new();
    generator::seed(&mut store, &config, false).unwrap();

    let years = store.distinct_years().unwrap();
    assert_eq!(years.len(), 25);
    assert_eq!(years.first(), Some(&2000));
    assert_eq!(years.last(), Some(&2024));

    let continents = store.distinct_continents().unwrap();
    assert_eq!(continents.len(), 5);
}
