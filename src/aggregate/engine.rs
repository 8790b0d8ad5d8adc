//! Aggregation operations
//!
//! Pure functions of (records, filters) -> table. No side effects, no
//! store access; callers pass the full scan in and hand the table to the
//! rendering layer.
//!
//! Empty continent selections follow two different rules, both load-
//! bearing for the dashboard: the KPI cards disappear entirely, while
//! every chart falls back to showing all continents. See DESIGN.md.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::aggregate::stats::{mean, pearson};
use crate::aggregate::tables::{
    BarRow, BarTable, CorrelationMatrix, KpiSummary, RankingRow, RankingTable, ScatterPoint,
    ScatterTable, TimeSeriesRow, TimeSeriesTable, TreemapRow, TreemapTable,
};
use crate::core::types::{Continent, CountryYearRecord, Metric};

/// Default ranking depth for the top chart.
pub const DEFAULT_TOP_N: usize = 10;

/// Shared filtering primitive: rows for one year whose continent is in
/// the selection. An empty selection matches nothing.
pub fn select<'a>(
    records: &'a [CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
) -> Vec<&'a CountryYearRecord> {
    records
        .iter()
        .filter(|r| r.year == year && continents.contains(&r.continent))
        .collect()
}

/// Chart-side filtering rule: an empty selection means the continent
/// filter is ignored, not that nothing matches.
fn year_rows<'a>(
    records: &'a [CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
) -> Vec<&'a CountryYearRecord> {
    if continents.is_empty() {
        records.iter().filter(|r| r.year == year).collect()
    } else {
        select(records, year, continents)
    }
}

fn column(rows: &[&CountryYearRecord], metric: Metric) -> Vec<f64> {
    rows.iter().map(|r| r.metric(metric)).collect()
}

/// Mean of one metric grouped by continent, rows sorted by continent
/// display name.
fn grouped_mean(rows: &[&CountryYearRecord], metric: Metric) -> Vec<BarRow> {
    let mut groups: BTreeMap<Continent, Vec<f64>> = BTreeMap::new();
    for r in rows {
        groups.entry(r.continent).or_default().push(r.metric(metric));
    }
    let mut out: Vec<BarRow> = groups
        .into_iter()
        .map(|(continent, values)| BarRow {
            continent,
            value: mean(&values),
        })
        .collect();
    out.sort_by_key(|row| row.continent.name());
    out
}

/// KPI card row. `None` when no continent is selected (no cards shown);
/// means are NaN when the filtered set is empty, never a panic.
pub fn kpi_summary(
    records: &[CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
) -> Option<KpiSummary> {
    if continents.is_empty() {
        return None;
    }
    let rows = select(records, year, continents);

    let countries: HashSet<&str> = rows.iter().map(|r| r.country.as_str()).collect();
    Some(KpiSummary {
        countries: countries.len(),
        life_exp: mean(&column(&rows, Metric::LifeExp)),
        gdp_per_cap: mean(&column(&rows, Metric::GdpPercap)),
        unemployment: mean(&column(&rows, Metric::Unemployment)),
        internet: mean(&column(&rows, Metric::Internet)),
        co2: mean(&column(&rows, Metric::Co2)),
    })
}

/// Scatter bubbles plus the per-continent bar chart for the same filter.
/// The log-x hint is attached when the x axis is GDP per capita.
pub fn scatter_bar(
    records: &[CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
    metric_x: Metric,
    metric_y: Metric,
) -> (ScatterTable, BarTable) {
    let rows = year_rows(records, year, continents);

    let points = rows
        .iter()
        .map(|r| ScatterPoint {
            country: r.country.clone(),
            continent: r.continent,
            x: r.metric(metric_x),
            y: r.metric(metric_y),
            pop: r.pop,
        })
        .collect();

    let scatter = ScatterTable {
        x_metric: metric_x,
        y_metric: metric_y,
        log_x: metric_x == Metric::GdpPercap,
        points,
    };
    let bar = BarTable {
        metric: metric_y,
        rows: grouped_mean(&rows, metric_y),
    };
    (scatter, bar)
}

/// Evolution of one metric: mean grouped by (year, continent) over the
/// full year range. An empty selection spans every continent.
pub fn time_series(
    records: &[CountryYearRecord],
    continents: &BTreeSet<Continent>,
    metric: Metric,
) -> TimeSeriesTable {
    let mut groups: BTreeMap<(i32, Continent), Vec<f64>> = BTreeMap::new();
    for r in records {
        if continents.is_empty() || continents.contains(&r.continent) {
            groups
                .entry((r.year, r.continent))
                .or_default()
                .push(r.metric(metric));
        }
    }

    let mut rows: Vec<TimeSeriesRow> = groups
        .into_iter()
        .map(|((year, continent), values)| TimeSeriesRow {
            year,
            continent,
            value: mean(&values),
        })
        .collect();
    rows.sort_by(|a, b| (a.year, a.continent.name()).cmp(&(b.year, b.continent.name())));
    TimeSeriesTable { metric, rows }
}

/// Continent → country hierarchy sized by population and colored by the
/// chosen metric.
pub fn treemap(
    records: &[CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
    metric: Metric,
) -> TreemapTable {
    let rows = year_rows(records, year, continents)
        .into_iter()
        .map(|r| TreemapRow {
            continent: r.continent,
            country: r.country.clone(),
            pop: r.pop,
            value: r.metric(metric),
        })
        .collect();
    TreemapTable { metric, rows }
}

/// Pairwise Pearson matrix over the seven continuous indicators.
/// All cells NaN when the filtered set has fewer than two rows.
pub fn correlation(
    records: &[CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
) -> CorrelationMatrix {
    let rows = year_rows(records, year, continents);
    let metrics = Metric::NUMERIC.to_vec();
    let columns: Vec<Vec<f64>> = metrics.iter().map(|m| column(&rows, *m)).collect();

    let n = metrics.len();
    let degenerate = rows.len() < 2;
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        if !degenerate {
            values[i][i] = 1.0;
        }
        for j in (i + 1)..n {
            let r = if degenerate {
                f64::NAN
            } else {
                pearson(&columns[i], &columns[j])
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { metrics, values }
}

/// Stable top-N by one metric (ties keep original row order), presented
/// ascending so the rendering layer draws the largest bar at the top.
pub fn top_n(
    records: &[CountryYearRecord],
    year: i32,
    continents: &BTreeSet<Continent>,
    metric: Metric,
    n: usize,
) -> RankingTable {
    let mut rows = year_rows(records, year, continents);
    rows.sort_by(|a, b| b.metric(metric).total_cmp(&a.metric(metric)));
    rows.truncate(n);
    rows.sort_by(|a, b| a.metric(metric).total_cmp(&b.metric(metric)));

    let rows = rows
        .into_iter()
        .map(|r| RankingRow {
            country: r.country.clone(),
            continent: r.continent,
            value: r.metric(metric),
        })
        .collect();
    RankingTable { metric, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        country: &str,
        continent: Continent,
        year: i32,
        life_exp: f64,
        gdp: f64,
    ) -> CountryYearRecord {
        CountryYearRecord {
            country: country.to_string(),
            continent,
            year,
            life_exp,
            pop: 1_000_000,
            gdp_per_cap: gdp,
            unemployment: 5.0,
            education_index: 0.8,
            health_exp_pct: 7.0,
            co2_per_cap: 4.0,
            internet_pct: 80.0,
        }
    }

    fn fixture() -> Vec<CountryYearRecord> {
        vec![
            record("Alemania", Continent::Europa, 2020, 81.0, 50_000.0),
            record("Francia", Continent::Europa, 2020, 82.0, 42_000.0),
            record("Kenia", Continent::Africa, 2020, 66.0, 2_000.0),
            record("Alemania", Continent::Europa, 2021, 81.2, 51_000.0),
            record("Kenia", Continent::Africa, 2021, 66.5, 2_100.0),
        ]
    }

    fn continents(cs: &[Continent]) -> BTreeSet<Continent> {
        cs.iter().copied().collect()
    }

    #[test]
    fn kpi_empty_selection_returns_nothing() {
        let records = fixture();
        assert!(kpi_summary(&records, 2020, &BTreeSet::new()).is_none());
    }

    #[test]
    fn kpi_means_over_selection() {
        let records = fixture();
        let kpi = kpi_summary(&records, 2020, &continents(&[Continent::Europa])).unwrap();
        assert_eq!(kpi.countries, 2);
        assert!((kpi.life_exp - 81.5).abs() < 1e-9);
        assert!((kpi.gdp_per_cap - 46_000.0).abs() < 1e-9);
    }

    #[test]
    fn kpi_means_are_nan_for_empty_filtered_set() {
        let records = fixture();
        // Oceania is selected but has no rows for the year.
        let kpi = kpi_summary(&records, 2020, &continents(&[Continent::Oceania])).unwrap();
        assert_eq!(kpi.countries, 0);
        assert!(kpi.life_exp.is_nan());
    }

    #[test]
    fn scatter_ignores_empty_continent_selection() {
        let records = fixture();
        let (scatter, bar) = scatter_bar(
            &records,
            2020,
            &BTreeSet::new(),
            Metric::GdpPercap,
            Metric::LifeExp,
        );
        assert_eq!(scatter.points.len(), 3);
        assert!(scatter.log_x);
        // Bar rows sorted by continent name, so Europa after África.
        assert_eq!(bar.rows.len(), 2);
        assert_eq!(bar.rows[0].continent, Continent::Europa);
        assert_eq!(bar.rows[1].continent, Continent::Africa);
        assert!((bar.rows[0].value - 81.5).abs() < 1e-9);
    }

    #[test]
    fn scatter_respects_non_empty_selection() {
        let records = fixture();
        let (scatter, _) = scatter_bar(
            &records,
            2020,
            &continents(&[Continent::Africa]),
            Metric::LifeExp,
            Metric::GdpPercap,
        );
        assert_eq!(scatter.points.len(), 1);
        assert_eq!(scatter.points[0].country, "Kenia");
        assert!(!scatter.log_x);
    }

    #[test]
    fn time_series_spans_all_years_per_continent() {
        let records = fixture();
        let table = time_series(&records, &BTreeSet::new(), Metric::LifeExp);
        // (2020, Africa) (2020, Europa) (2021, Africa) (2021, Europa)
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0].year, 2020);
        assert_eq!(table.rows[0].continent, Continent::Europa);
        assert_eq!(table.rows[1].continent, Continent::Africa);

        let africa_only = time_series(&records, &continents(&[Continent::Africa]), Metric::LifeExp);
        assert_eq!(africa_only.rows.len(), 2);
        assert!(africa_only
            .rows
            .iter()
            .all(|r| r.continent == Continent::Africa));
    }

    #[test]
    fn treemap_carries_population_and_metric() {
        let records = fixture();
        let table = treemap(&records, 2020, &BTreeSet::new(), Metric::GdpPercap);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].pop, 1_000_000);
        assert_eq!(table.rows[0].value, 50_000.0);
    }

    #[test]
    fn correlation_is_symmetric_with_unit_diagonal() {
        let records = fixture();
        let matrix = correlation(&records, 2020, &BTreeSet::new());
        assert_eq!(matrix.size(), 7);
        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.size() {
                let a = matrix.get(i, j);
                let b = matrix.get(j, i);
                assert!(a == b || (a.is_nan() && b.is_nan()));
            }
        }
        // Constant columns (unemployment etc in the fixture) correlate as NaN.
        assert!(matrix.get(0, 2).is_nan());
    }

    #[test]
    fn correlation_under_two_rows_is_all_nan() {
        let records = fixture();
        let matrix = correlation(&records, 2020, &continents(&[Continent::Africa]));
        for i in 0..matrix.size() {
            for j in 0..matrix.size() {
                assert!(matrix.get(i, j).is_nan());
            }
        }
    }

    #[test]
    fn top_n_is_ascending_with_stable_ties() {
        let mut records = fixture();
        // Tie on life_exp with Francia; original order must win.
        records.push(record("Kenia bis", Continent::Africa, 2020, 82.0, 2_500.0));

        let table = top_n(&records, 2020, &BTreeSet::new(), Metric::LifeExp, 2);
        assert_eq!(table.rows.len(), 2);
        // Largest drawn last: ascending order.
        assert!(table.rows[0].value <= table.rows[1].value);
        // Francia appears before the later tie.
        assert_eq!(table.rows[0].country, "Francia");
        assert_eq!(table.rows[1].country, "Kenia bis");
    }

    #[test]
    fn top_n_handles_small_and_empty_sets() {
        let records = fixture();
        let table = top_n(&records, 2020, &BTreeSet::new(), Metric::LifeExp, 10);
        assert_eq!(table.rows.len(), 3);

        let none = top_n(&records, 1999, &BTreeSet::new(), Metric::LifeExp, 10);
        assert!(none.rows.is_empty());
    }
}
