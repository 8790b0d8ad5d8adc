//! Chart-ready output tables
//!
//! One type per widget. Column names and shapes are the contract with
//! the rendering layer, which binds axes by name; the serialized form is
//! what gets handed to a chart call.

use serde::Serialize;

use crate::core::types::{Continent, Metric};

/// Headline figures for the KPI card row.
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    /// Count of distinct countries in the filtered set ("Países").
    pub countries: usize,
    pub life_exp: f64,
    pub gdp_per_cap: f64,
    pub unemployment: f64,
    pub internet: f64,
    pub co2: f64,
}

/// One bubble of the scatter chart.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub country: String,
    pub continent: Continent,
    pub x: f64,
    pub y: f64,
    /// Bubble sizing value.
    pub pop: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterTable {
    pub x_metric: Metric,
    pub y_metric: Metric,
    /// Rendering hint: use a logarithmic x axis (set when x is gdpPercap).
    pub log_x: bool,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarRow {
    pub continent: Continent,
    pub value: f64,
}

/// Mean of one metric grouped by continent.
#[derive(Debug, Clone, Serialize)]
pub struct BarTable {
    pub metric: Metric,
    pub rows: Vec<BarRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesRow {
    pub year: i32,
    pub continent: Continent,
    pub value: f64,
}

/// Mean of one metric grouped by (year, continent), spanning the full
/// year range.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesTable {
    pub metric: Metric,
    pub rows: Vec<TimeSeriesRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreemapRow {
    pub continent: Continent,
    pub country: String,
    /// Tile sizing value.
    pub pop: i64,
    /// Tile color value.
    pub value: f64,
}

/// Hierarchical continent → country breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct TreemapTable {
    pub metric: Metric,
    pub rows: Vec<TreemapRow>,
}

/// Symmetric Pearson matrix over the seven continuous indicators.
///
/// `values[i][j]` correlates `metrics[i]` with `metrics[j]`. Cells are
/// NaN when the filtered set is too small (fewer than two rows) or a
/// column is constant.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub metrics: Vec<Metric>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn size(&self) -> usize {
        self.metrics.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    pub country: String,
    pub continent: Continent,
    pub value: f64,
}

/// Top-N countries by one metric, sorted ascending so the rendering
/// layer draws the largest bar first.
#[derive(Debug, Clone, Serialize)]
pub struct RankingTable {
    pub metric: Metric,
    pub rows: Vec<RankingRow>,
}
