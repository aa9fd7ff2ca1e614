//! Command line front end for the biomaterial explorer

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use biomat_explorer::curve::library;
use biomat_explorer::prelude::*;

#[derive(Parser)]
#[command(name = "biomat-cli")]
#[command(about = "Explore biomaterial properties and simulate stress-strain curves")]
struct Cli {
    /// Property table to load instead of the default locations
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a stress-strain curve
    Curve {
        /// Library material id (see `library`)
        #[arg(long, conflicts_with_all = ["yield_str", "ult_str", "elastic_mod", "elongation"])]
        material: Option<String>,
        /// Yield strength
        #[arg(long)]
        yield_str: Option<f64>,
        /// Ultimate tensile strength
        #[arg(long)]
        ult_str: Option<f64>,
        /// Elastic modulus
        #[arg(long)]
        elastic_mod: Option<f64>,
        /// Fractional elongation at break, e.g. 0.1
        #[arg(long)]
        elongation: Option<f64>,
        /// Unit of explicit inputs and of the printed stresses
        #[arg(long, default_value = "psi")]
        units: StressUnit,
        /// Total number of samples
        #[arg(long, default_value_t = 100)]
        samples: usize,
        /// Share of samples on the elastic segment
        #[arg(long, default_value_t = 0.2)]
        elastic_fraction: f64,
        /// Print the curve as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the curated stress-strain library by type
    Library,
    /// Filter the property table by ranges, e.g. `--range hardness=20:60`
    Filter {
        #[arg(long = "range", value_parser = parse_range)]
        ranges: Vec<(Property, ValueRange)>,
        /// Only keep names or types containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Percentage deviation of each material from the property mean
    Deviation {
        #[arg(long)]
        property: Property,
    },
}

fn parse_range(arg: &str) -> std::result::Result<(Property, ValueRange), String> {
    let (property, bounds) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected property=min:max, got '{arg}'"))?;
    let (min, max) = bounds
        .split_once(':')
        .ok_or_else(|| format!("expected min:max, got '{bounds}'"))?;
    let property: Property = property.parse().map_err(|e: MaterialsError| e.to_string())?;
    let min: f64 = min.trim().parse().map_err(|_| format!("invalid minimum '{min}'"))?;
    let max: f64 = max.trim().parse().map_err(|_| format!("invalid maximum '{max}'"))?;
    let range = ValueRange::new(min, max).map_err(|e| e.to_string())?;
    Ok((property, range))
}

fn load_records(data: Option<PathBuf>) -> Vec<MaterialRecord> {
    let config = match data {
        Some(path) => LoaderConfig::single(path),
        None => LoaderConfig::from_env(),
    };
    let (records, source) = load_and_parse(&config);
    if source.is_bundled() {
        eprintln!("(using bundled sample data)");
    }
    records
}

#[allow(clippy::too_many_arguments)]
fn run_curve(
    material: Option<String>,
    yield_str: Option<f64>,
    ult_str: Option<f64>,
    elastic_mod: Option<f64>,
    elongation: Option<f64>,
    units: StressUnit,
    options: CurveOptions,
    json: bool,
) -> Result<()> {
    let input = match material {
        Some(id) => library::find(&id)?.to_input().to_unit(StressUnit::Psi, units),
        None => match (yield_str, ult_str, elastic_mod, elongation) {
            (Some(y), Some(u), Some(e), Some(el)) => StressStrainInput::new(y, u, e, el),
            _ => bail!("give --material or all of --yield-str, --ult-str, --elastic-mod, --elongation"),
        },
    };

    let curve = generate(&input, &options).context("curve generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&curve)?);
        return Ok(());
    }

    println!("=== Stress-Strain Curve ===\n");
    println!("Yield point:      e = {:.6}, s = {:.1} {units}", curve.eng_strain_at_yield, curve.eng_yield_str);
    println!("Ultimate point:   e = {:.6}, s = {:.1} {units}", curve.eng_strain_ultimate, curve.eng_ult_str);
    println!("True at break:    e = {:.6}, s = {:.1} {units}", curve.true_strain_at_break, curve.true_ult_str);
    println!("Hardening:        n = {:.4}, K = {:.1} {units}\n", curve.n, curve.k);

    println!("{:>10} {:>14} {:>10} {:>14}", "eng e", "eng s", "true e", "true s");
    for s in curve.samples() {
        println!(
            "{:>10.6} {:>14.1} {:>10.6} {:>14.1}",
            s.eng_strain, s.eng_stress, s.true_strain, s.true_stress
        );
    }
    Ok(())
}

fn run_library() {
    for (material_type, materials) in library::group_by_type() {
        let modulus = library::typical_elastic_modulus_psi(material_type);
        println!("{material_type} (E ~ {modulus:.0} psi)");
        for m in materials {
            println!(
                "  {:<22} {:<22} Sy {:>7.0}  Su {:>7.0}  el {:.2}",
                m.id, m.name, m.yield_strength, m.tensile_strength, m.elongation
            );
        }
    }
}

fn run_filter(records: &[MaterialRecord], ranges: Vec<(Property, ValueRange)>, term: Option<String>) {
    let mut filter = PropertyFilter::new();
    for (property, range) in ranges {
        filter.activate(property, range);
    }

    let matched: Vec<&MaterialRecord> = if filter.is_empty() {
        match term.as_deref() {
            Some(t) => search(records, t),
            None => {
                println!("Activate at least one property filter (--range property=min:max)");
                return;
            }
        }
    } else {
        let found = term.as_deref().map(|t| search(records, t));
        filter
            .apply(records)
            .into_iter()
            .filter(|r| found.as_ref().map_or(true, |f| f.iter().any(|x| x.id == r.id)))
            .collect()
    };

    println!("{} of {} materials match", matched.len(), records.len());
    for r in matched {
        print!("  {:<36} {:<28}", r.name, r.material_type);
        for (property, _) in filter.constraints() {
            print!(" {}={}", property, r.value(property));
        }
        println!();
    }
}

fn run_deviation(records: &[MaterialRecord], property: Property) {
    let report = deviation(records, property);
    println!(
        "{} mean: {:.2} {}",
        property.label(),
        report.mean,
        property.unit()
    );
    for e in &report.entries {
        println!("  {:<36} {:>10.2} {:>+9.2}%", e.name, e.value, e.deviation_pct);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Curve {
            material,
            yield_str,
            ult_str,
            elastic_mod,
            elongation,
            units,
            samples,
            elastic_fraction,
            json,
        } => run_curve(
            material,
            yield_str,
            ult_str,
            elastic_mod,
            elongation,
            units,
            CurveOptions::new(samples, elastic_fraction),
            json,
        )?,
        Commands::Library => run_library(),
        Commands::Filter { ranges, search } => run_filter(&load_records(cli.data), ranges, search),
        Commands::Deviation { property } => run_deviation(&load_records(cli.data), property),
    }
    Ok(())
}
