//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::BoardError;

/// Closed set of world regions. Every country belongs to exactly one
/// continent for the lifetime of the dataset.
///
/// Labels are the original Spanish dataset values; the rendering layer
/// binds on them, so serialization uses the labels rather than the
/// variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "Europa")]
    Europa,
    #[serde(rename = "América")]
    America,
    #[serde(rename = "Asia")]
    Asia,
    #[serde(rename = "África")]
    Africa,
    #[serde(rename = "Oceanía")]
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Europa,
        Continent::America,
        Continent::Asia,
        Continent::Africa,
        Continent::Oceania,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Continent::Europa => "Europa",
            Continent::America => "América",
            Continent::Asia => "Asia",
            Continent::Africa => "África",
            Continent::Oceania => "Oceanía",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Europa" => Ok(Continent::Europa),
            "América" | "America" => Ok(Continent::America),
            "Asia" => Ok(Continent::Asia),
            "África" | "Africa" => Ok(Continent::Africa),
            "Oceanía" | "Oceania" => Ok(Continent::Oceania),
            _ => Err(BoardError::UnknownContinent(s.to_string())),
        }
    }
}

/// Dashboard metrics. Keys are the column names the rendering layer binds
/// axes to; labels are the Spanish display strings shown on the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "lifeExp")]
    LifeExp,
    #[serde(rename = "gdpPercap")]
    GdpPercap,
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "unemployment")]
    Unemployment,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "co2")]
    Co2,
    #[serde(rename = "internet")]
    Internet,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::LifeExp,
        Metric::GdpPercap,
        Metric::Pop,
        Metric::Unemployment,
        Metric::Education,
        Metric::Health,
        Metric::Co2,
        Metric::Internet,
    ];

    /// The seven continuous indicators the correlation matrix covers
    /// (population is a sizing value, not a correlated indicator).
    pub const NUMERIC: [Metric; 7] = [
        Metric::LifeExp,
        Metric::GdpPercap,
        Metric::Unemployment,
        Metric::Education,
        Metric::Health,
        Metric::Co2,
        Metric::Internet,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::LifeExp => "lifeExp",
            Metric::GdpPercap => "gdpPercap",
            Metric::Pop => "pop",
            Metric::Unemployment => "unemployment",
            Metric::Education => "education",
            Metric::Health => "health",
            Metric::Co2 => "co2",
            Metric::Internet => "internet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::LifeExp => "Esperanza de vida (años)",
            Metric::GdpPercap => "PBI per cápita (USD)",
            Metric::Pop => "Población",
            Metric::Unemployment => "Desempleo (%)",
            Metric::Education => "Índice de educación",
            Metric::Health => "Gasto en salud (% PBI)",
            Metric::Co2 => "CO₂ per cápita (ton)",
            Metric::Internet => "Usuarios de internet (%)",
        }
    }

    /// Compact label for correlation matrix headers.
    pub fn short_label(&self) -> &'static str {
        match self {
            Metric::LifeExp => "Esp. vida",
            Metric::GdpPercap => "PBI p/c",
            Metric::Pop => "Población",
            Metric::Unemployment => "Desempleo",
            Metric::Education => "Educación",
            Metric::Health => "Salud",
            Metric::Co2 => "CO₂",
            Metric::Internet => "Internet",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .find(|m| m.key() == s)
            .copied()
            .ok_or_else(|| BoardError::UnknownMetric(s.to_string()))
    }
}

/// One observation for one country in one year.
///
/// Records are created once by the generator and never mutated; the
/// aggregation engine reads them in bulk. Serialized field names match
/// the chart column names the rendering layer binds on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryYearRecord {
    pub country: String,
    pub continent: Continent,
    pub year: i32,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: i64,
    #[serde(rename = "gdpPercap")]
    pub gdp_per_cap: f64,
    pub unemployment: f64,
    #[serde(rename = "education")]
    pub education_index: f64,
    #[serde(rename = "health")]
    pub health_exp_pct: f64,
    #[serde(rename = "co2")]
    pub co2_per_cap: f64,
    #[serde(rename = "internet")]
    pub internet_pct: f64,
}

impl CountryYearRecord {
    /// Value of a metric for this record, as a float regardless of the
    /// field's native type.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::LifeExp => self.life_exp,
            Metric::GdpPercap => self.gdp_per_cap,
            Metric::Pop => self.pop as f64,
            Metric::Unemployment => self.unemployment,
            Metric::Education => self.education_index,
            Metric::Health => self.health_exp_pct,
            Metric::Co2 => self.co2_per_cap,
            Metric::Internet => self.internet_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_keys_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.key().parse::<Metric>().unwrap(), metric);
        }
        assert!("gdp".parse::<Metric>().is_err());
    }

    #[test]
    fn continent_parses_with_and_without_accents() {
        assert_eq!("África".parse::<Continent>().unwrap(), Continent::Africa);
        assert_eq!("Africa".parse::<Continent>().unwrap(), Continent::Africa);
        assert!("Atlantis".parse::<Continent>().is_err());
    }
}
