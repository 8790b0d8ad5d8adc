//! Worldboard - Entry Point
//!
//! Interactive dashboard loop: seeds the record store on first run, then
//! answers filter commands by recomputing the chart tables and printing
//! them. The text output here is the rendering sink; all shaping logic
//! lives in the aggregation engine.

use std::collections::BTreeSet;
use std::io::{self, Write};

use worldboard::aggregate;
use worldboard::core::config::GeneratorConfig;
use worldboard::core::error::Result;
use worldboard::core::types::{Continent, CountryYearRecord, Metric};
use worldboard::generator;
use worldboard::store::{MemoryStore, RecordStore};

/// Filter state supplied by the control surface: one year, a continent
/// set (possibly empty), a primary and a secondary metric.
struct Filters {
    year: i32,
    continents: BTreeSet<Continent>,
    metric: Metric,
    versus: Metric,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("worldboard=info")
        .init();

    tracing::info!("Worldboard starting...");

    let config = GeneratorConfig::default();
    let mut store = MemoryStore::new();
    // Idempotent: a pre-populated store would be left untouched.
    generator::seed(&mut store, &config, false)?;

    let years = store.distinct_years()?;
    let available = store.distinct_continents()?;
    let mut filters = Filters {
        year: years.last().copied().unwrap_or(config.end_year),
        continents: available.iter().copied().collect(),
        metric: Metric::LifeExp,
        versus: Metric::GdpPercap,
    };

    println!("\n=== WORLDBOARD ===");
    println!("Panel de indicadores mundiales ({} registros)", store.len());
    println!();
    println!("Commands:");
    println!("  year <y>             - select year ({}..{})", years.first().unwrap_or(&0), years.last().unwrap_or(&0));
    println!("  continents <a,b>|all|none");
    println!("  metric <key>         - primary metric");
    println!("  versus <key>         - secondary (scatter x) metric");
    println!("  kpi | scatter | bar | line | treemap | corr | top [n]");
    println!("  export <file.json>   - dump current tables");
    println!("  status / s           - show filter state");
    println!("  quit / q             - exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        // Each command performs one full read of the store.
        let records = store.all()?;
        if let Err(e) = run_command(input, &records, &mut filters) {
            println!("error: {e}");
        }
    }

    Ok(())
}

fn run_command(input: &str, records: &[CountryYearRecord], filters: &mut Filters) -> Result<()> {
    let (cmd, rest) = match input.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (input, ""),
    };

    match cmd {
        "year" => {
            filters.year = rest.parse().map_err(|_| {
                worldboard::core::error::BoardError::Config(format!("not a year: {rest}"))
            })?;
            println!("year = {}", filters.year);
        }
        "continents" => {
            filters.continents = match rest {
                "all" => Continent::ALL.iter().copied().collect(),
                "none" | "" => BTreeSet::new(),
                list => list
                    .split(',')
                    .map(|s| s.trim().parse::<Continent>())
                    .collect::<Result<BTreeSet<_>>>()?,
            };
            println!("continents = {}", continent_list(&filters.continents));
        }
        "metric" => {
            filters.metric = rest.parse()?;
            println!("metric = {} ({})", filters.metric, filters.metric.label());
        }
        "versus" => {
            filters.versus = rest.parse()?;
            println!("versus = {} ({})", filters.versus, filters.versus.label());
        }
        "status" | "s" => print_status(filters),
        "kpi" => print_kpi(records, filters),
        "scatter" => print_scatter(records, filters),
        "bar" => print_bar(records, filters),
        "line" => print_line(records, filters),
        "treemap" => print_treemap(records, filters),
        "corr" => print_corr(records, filters),
        "top" => {
            let n = rest.parse().unwrap_or(aggregate::DEFAULT_TOP_N);
            print_top(records, filters, n);
        }
        "export" => export_tables(records, filters, rest)?,
        other => println!("unknown command: {other}"),
    }
    Ok(())
}

fn continent_list(continents: &BTreeSet<Continent>) -> String {
    if continents.is_empty() {
        return "(ninguno)".to_string();
    }
    let names: Vec<&str> = continents.iter().map(|c| c.name()).collect();
    names.join(", ")
}

fn print_status(filters: &Filters) {
    println!("year       = {}", filters.year);
    println!("continents = {}", continent_list(&filters.continents));
    println!("metric     = {} ({})", filters.metric, filters.metric.label());
    println!("versus     = {} ({})", filters.versus, filters.versus.label());
}

/// NaN means "empty filtered set"; render a placeholder, never panic.
fn fmt_value(v: f64, decimals: usize) -> String {
    if v.is_nan() {
        "—".to_string()
    } else {
        format!("{v:.decimals$}")
    }
}

fn print_kpi(records: &[CountryYearRecord], filters: &Filters) {
    match aggregate::kpi_summary(records, filters.year, &filters.continents) {
        None => println!("(sin continentes seleccionados)"),
        Some(kpi) => {
            println!("Países:            {}", kpi.countries);
            println!("Esperanza de vida: {} años", fmt_value(kpi.life_exp, 1));
            println!("PBI per cápita:    ${}", fmt_value(kpi.gdp_per_cap, 0));
            println!("Desempleo:         {}%", fmt_value(kpi.unemployment, 1));
            println!("Internet:          {}%", fmt_value(kpi.internet, 1));
            println!("CO₂ per cápita:    {} ton", fmt_value(kpi.co2, 1));
        }
    }
}

fn print_scatter(records: &[CountryYearRecord], filters: &Filters) {
    let (scatter, _) = aggregate::scatter_bar(
        records,
        filters.year,
        &filters.continents,
        filters.versus,
        filters.metric,
    );
    println!(
        "{} vs {} ({}){}",
        filters.metric.label(),
        filters.versus.label(),
        filters.year,
        if scatter.log_x { " [log x]" } else { "" },
    );
    for p in &scatter.points {
        println!(
            "  {:<22} {:<10} x={:<12} y={:<10} pop={}",
            p.country,
            p.continent,
            fmt_value(p.x, 2),
            fmt_value(p.y, 2),
            p.pop
        );
    }
}

fn print_bar(records: &[CountryYearRecord], filters: &Filters) {
    let (_, bar) = aggregate::scatter_bar(
        records,
        filters.year,
        &filters.continents,
        filters.versus,
        filters.metric,
    );
    println!("Promedio por continente ({})", filters.year);
    for row in &bar.rows {
        println!("  {:<10} {}", row.continent, fmt_value(row.value, 2));
    }
}

fn print_line(records: &[CountryYearRecord], filters: &Filters) {
    let table = aggregate::time_series(records, &filters.continents, filters.metric);
    println!("Evolución - {}", filters.metric.label());
    for row in &table.rows {
        println!(
            "  {} {:<10} {}",
            row.year,
            row.continent,
            fmt_value(row.value, 2)
        );
    }
}

fn print_treemap(records: &[CountryYearRecord], filters: &Filters) {
    let table = aggregate::treemap(records, filters.year, &filters.continents, filters.metric);
    println!(
        "Población y {} ({})",
        filters.metric.label(),
        filters.year
    );
    for row in &table.rows {
        println!(
            "  {:<10} {:<22} pop={:<12} {}",
            row.continent,
            row.country,
            row.pop,
            fmt_value(row.value, 2)
        );
    }
}

fn print_corr(records: &[CountryYearRecord], filters: &Filters) {
    let matrix = aggregate::correlation(records, filters.year, &filters.continents);
    println!("Correlación entre métricas ({})", filters.year);
    print!("{:<12}", "");
    for m in &matrix.metrics {
        print!("{:>10}", m.short_label());
    }
    println!();
    for (i, m) in matrix.metrics.iter().enumerate() {
        print!("{:<12}", m.short_label());
        for j in 0..matrix.size() {
            print!("{:>10}", fmt_value(matrix.get(i, j), 2));
        }
        println!();
    }
}

fn print_top(records: &[CountryYearRecord], filters: &Filters, n: usize) {
    let table = aggregate::top_n(records, filters.year, &filters.continents, filters.metric, n);
    println!("Top {} - {} ({})", n, filters.metric.label(), filters.year);
    for row in &table.rows {
        println!(
            "  {:<22} {:<10} {}",
            row.country,
            row.continent,
            fmt_value(row.value, 2)
        );
    }
}

/// Dump every table for the current filters into one JSON document.
fn export_tables(records: &[CountryYearRecord], filters: &Filters, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(worldboard::core::error::BoardError::Config(
            "export needs a file path".to_string(),
        ));
    }

    let (scatter, bar) = aggregate::scatter_bar(
        records,
        filters.year,
        &filters.continents,
        filters.versus,
        filters.metric,
    );
    let doc = serde_json::json!({
        "year": filters.year,
        "continents": filters.continents,
        "kpi": aggregate::kpi_summary(records, filters.year, &filters.continents),
        "scatter": scatter,
        "bar": bar,
        "line": aggregate::time_series(records, &filters.continents, filters.metric),
        "treemap": aggregate::treemap(records, filters.year, &filters.continents, filters.metric),
        "correlation": aggregate::correlation(records, filters.year, &filters.continents),
        "top": aggregate::top_n(
            records,
            filters.year,
            &filters.continents,
            filters.metric,
            aggregate::DEFAULT_TOP_N,
        ),
    });
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    println!("tables written to {path}");
    Ok(())
}
