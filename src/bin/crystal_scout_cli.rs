//! Headless run of the screening pipeline: one filter pass, printed to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crystal_scout::config::GeneratorConfig;
use crystal_scout::data::filter::FilterCriteria;
use crystal_scout::data::model::{Candidate, Stability};
use crystal_scout::pipeline::Pipeline;

#[derive(Debug, Parser)]
#[command(name = "crystal_scout_cli", version, about = "Filter synthetic materials candidates")]
struct Args {
    /// Lower band gap bound (eV, inclusive)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    band_gap_min: f64,

    /// Upper band gap bound (eV, inclusive)
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    band_gap_max: f64,

    /// Maximum synthesis cost ($/kg, inclusive)
    #[arg(long, default_value_t = 200)]
    max_cost: u32,

    /// Minimum stability tier: Unstable, Meta-Stable or Stable
    #[arg(long, default_value = "Meta-Stable")]
    stability: Stability,

    /// JSON generator config (seed, size, formula_set, stability_weights)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of a text table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    criteria: &'a FilterCriteria,
    count: usize,
    rows: &'a [Candidate],
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    print!("{}", render(&args)?);
    Ok(())
}

/// Run one pipeline pass and format the output for stdout.
fn render(args: &Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    let criteria = FilterCriteria::new(
        args.band_gap_min,
        args.band_gap_max,
        args.max_cost,
        args.stability,
    )?;

    let mut pipeline = Pipeline::new(config)?;
    let presentation = pipeline.run(&criteria).context("running filter pipeline")?;

    let mut out = String::new();
    if args.json {
        let report = JsonReport {
            seed: pipeline.config().seed,
            criteria: &criteria,
            count: presentation.count,
            rows: &presentation.listing.rows,
        };
        out.push_str(&serde_json::to_string_pretty(&report).context("serializing report")?);
        out.push('\n');
    } else {
        out.push_str(&format!("Candidates found: {}\n", presentation.count));
        if !presentation.listing.is_empty() {
            out.push_str(&presentation.listing.to_pretty_table()?);
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("crystal_scout_cli").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_dashboard_controls() {
        let args = parse(&[]);
        let defaults = FilterCriteria::default();
        assert_eq!(args.band_gap_min, defaults.band_gap_min);
        assert_eq!(args.band_gap_max, defaults.band_gap_max);
        assert_eq!(args.max_cost, defaults.max_cost);
        assert_eq!(args.stability, defaults.min_stability);
        assert!(args.config.is_none());
        assert!(!args.json);
    }

    #[test]
    fn stability_accepts_lowercase_names() {
        assert_eq!(parse(&["--stability", "metastable"]).stability, Stability::MetaStable);
        assert_eq!(parse(&["--stability", "Stable"]).stability, Stability::Stable);
        assert!(Args::try_parse_from(["crystal_scout_cli", "--stability", "solid"]).is_err());
    }

    #[test]
    fn negative_band_gap_flag_parses() {
        assert_eq!(parse(&["--band-gap-min", "-0.5"]).band_gap_min, -0.5);
    }

    #[test]
    fn text_output_leads_with_count() {
        let out = render(&parse(&[])).unwrap();
        let mut pipeline = Pipeline::new(GeneratorConfig::default()).unwrap();
        let expected = pipeline.run(&FilterCriteria::default()).unwrap().count;
        assert!(out.starts_with(&format!("Candidates found: {expected}\n")), "{out}");
        assert!(out.contains("Material_ID"));
    }

    #[test]
    fn empty_result_prints_count_only() {
        let out = render(&parse(&["--max-cost", "40"])).unwrap();
        assert_eq!(out, "Candidates found: 0\n");
    }

    #[test]
    fn json_report_shape() {
        let out = render(&parse(&["--json", "--stability", "stable", "--max-cost", "800"])).unwrap();
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["seed"], 42);
        assert_eq!(report["criteria"]["min_stability"], "Stable");
        assert_eq!(report["criteria"]["max_cost"], 800);
        let rows = report["rows"].as_array().unwrap();
        assert_eq!(report["count"].as_u64().unwrap() as usize, rows.len());
        for row in rows {
            assert_eq!(row["predicted_stability"], "Stable");
            assert!(row["material_id"].as_str().unwrap().starts_with("mp-"));
            assert!(row["band_gap_ev"].is_f64());
            assert!(row["synthesis_cost"].is_u64());
            assert!(row["formula"].is_string());
        }
    }

    #[test]
    fn inverted_range_is_an_error() {
        assert!(render(&parse(&["--band-gap-min", "3", "--band-gap-max", "1"])).is_err());
    }
}
