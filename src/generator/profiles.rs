//! Per-continent region profiles: fixed country lists and base-value
//! ranges for every indicator.
//!
//! This is plain immutable configuration data. Each country's starting
//! point for every indicator is sampled uniformly from its continent's
//! (low, high) range, so countries diverge while regions cluster.

use crate::core::error::{BoardError, Result};
use crate::core::types::Continent;

/// Base-value ranges for one continent.
#[derive(Debug, Clone, Copy)]
pub struct RegionProfile {
    pub continent: Continent,
    pub countries: &'static [&'static str],
    pub life_exp: (f64, f64),
    pub gdp: (f64, f64),
    pub pop: (f64, f64),
    pub unemployment: (f64, f64),
    pub education: (f64, f64),
    pub health: (f64, f64),
    pub co2: (f64, f64),
    pub internet: (f64, f64),
}

pub const REGIONS: [RegionProfile; 5] = [
    RegionProfile {
        continent: Continent::Europa,
        countries: &[
            "Alemania",
            "Francia",
            "España",
            "Italia",
            "Reino Unido",
            "Países Bajos",
            "Suecia",
            "Polonia",
            "Noruega",
            "Suiza",
            "Portugal",
            "Bélgica",
            "Austria",
            "Grecia",
            "Dinamarca",
        ],
        life_exp: (76.0, 84.0),
        gdp: (20_000.0, 65_000.0),
        pop: (4_000_000.0, 83_000_000.0),
        unemployment: (3.0, 15.0),
        education: (0.75, 0.95),
        health: (6.0, 12.0),
        co2: (4.0, 12.0),
        internet: (60.0, 98.0),
    },
    RegionProfile {
        continent: Continent::America,
        countries: &[
            "Estados Unidos",
            "Brasil",
            "México",
            "Argentina",
            "Colombia",
            "Canadá",
            "Chile",
            "Perú",
            "Venezuela",
            "Uruguay",
            "Ecuador",
            "Cuba",
            "Paraguay",
            "Bolivia",
            "Costa Rica",
        ],
        life_exp: (65.0, 82.0),
        gdp: (3_000.0, 62_000.0),
        pop: (3_000_000.0, 330_000_000.0),
        unemployment: (3.0, 18.0),
        education: (0.55, 0.92),
        health: (3.0, 17.0),
        co2: (1.0, 16.0),
        internet: (30.0, 95.0),
    },
    RegionProfile {
        continent: Continent::Asia,
        countries: &[
            "China",
            "Japón",
            "India",
            "Corea del Sur",
            "Indonesia",
            "Tailandia",
            "Vietnam",
            "Filipinas",
            "Malasia",
            "Turquía",
            "Arabia Saudita",
            "Israel",
            "Singapur",
            "Taiwán",
            "Pakistán",
        ],
        life_exp: (62.0, 85.0),
        gdp: (1_500.0, 60_000.0),
        pop: (5_000_000.0, 1_400_000_000.0),
        unemployment: (2.0, 12.0),
        education: (0.40, 0.93),
        health: (2.0, 11.0),
        co2: (1.0, 18.0),
        internet: (15.0, 96.0),
    },
    RegionProfile {
        continent: Continent::Africa,
        countries: &[
            "Nigeria",
            "Egipto",
            "Sudáfrica",
            "Kenia",
            "Etiopía",
            "Ghana",
            "Tanzania",
            "Marruecos",
            "Senegal",
            "Uganda",
            "Túnez",
            "Costa de Marfil",
            "Mozambique",
            "Camerún",
            "Angola",
        ],
        life_exp: (50.0, 75.0),
        gdp: (500.0, 12_000.0),
        pop: (2_000_000.0, 220_000_000.0),
        unemployment: (5.0, 30.0),
        education: (0.25, 0.72),
        health: (2.0, 8.0),
        co2: (0.2, 8.0),
        internet: (5.0, 70.0),
    },
    RegionProfile {
        continent: Continent::Oceania,
        countries: &[
            "Australia",
            "Nueva Zelanda",
            "Papúa Nueva Guinea",
            "Fiyi",
            "Samoa",
        ],
        life_exp: (60.0, 84.0),
        gdp: (2_000.0, 55_000.0),
        pop: (200_000.0, 26_000_000.0),
        unemployment: (3.0, 12.0),
        education: (0.45, 0.94),
        health: (3.0, 10.0),
        co2: (1.0, 17.0),
        internet: (20.0, 95.0),
    },
];

/// Total number of countries across all profiles.
pub fn total_countries() -> usize {
    REGIONS.iter().map(|r| r.countries.len()).sum()
}

/// Sanity-check the fixed table. Runs once at startup; a malformed
/// profile is a fatal configuration error.
pub fn validate() -> Result<()> {
    for region in &REGIONS {
        if region.countries.is_empty() {
            return Err(BoardError::Config(format!(
                "region {} has no countries",
                region.continent
            )));
        }
        let ranges = [
            ("life_exp", region.life_exp),
            ("gdp", region.gdp),
            ("pop", region.pop),
            ("unemployment", region.unemployment),
            ("education", region.education),
            ("health", region.health),
            ("co2", region.co2),
            ("internet", region.internet),
        ];
        for (name, (lo, hi)) in ranges {
            if !(lo <= hi) {
                return Err(BoardError::Config(format!(
                    "region {}: {} range ({}, {}) is inverted",
                    region.continent, name, lo, hi
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_table_is_well_formed() {
        validate().unwrap();
        assert_eq!(REGIONS.len(), 5);
        assert_eq!(total_countries(), 65);
    }

    #[test]
    fn country_names_are_unique_across_regions() {
        let mut seen = std::collections::HashSet::new();
        for region in &REGIONS {
            for country in region.countries {
                assert!(seen.insert(*country), "duplicate country {country}");
            }
        }
    }
}
