//! Aggregation engine: pure (records, filters) -> chart table functions

pub mod engine;
pub mod stats;
pub mod tables;

pub use engine::{
    correlation, kpi_summary, scatter_bar, select, time_series, top_n, treemap, DEFAULT_TOP_N,
};
pub use tables::{
    BarRow, BarTable, CorrelationMatrix, KpiSummary, RankingRow, RankingTable, ScatterPoint,
    ScatterTable, TimeSeriesRow, TimeSeriesTable, TreemapRow, TreemapTable,
};
