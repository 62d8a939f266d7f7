use clap::{Args, Parser, Subcommand};
use pq_app::{compute, load_catalog, AppError, AppResult, OperatingState};
use pq_catalog::schema::{Catalog, DeviceRecord};
use pq_core::units::PressureUnit;
use pq_curves::Curve;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pq-cli")]
#[command(about = "P-Q calculator - fan vs. filter operating point tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog file syntax and structure
    Validate {
        /// Path to the catalog file (.json, .yaml)
        catalog_path: PathBuf,
    },
    /// List fans and filters in a catalog
    List {
        /// Path to the catalog file
        catalog_path: PathBuf,
        /// Case-insensitive substring filter on id, name, manufacturer
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Compute the operating point for a fan/filter selection
    Solve {
        /// Path to the catalog file
        catalog_path: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Export the transformed curves as CSV for external charting
    ExportCurves {
        /// Path to the catalog file
        catalog_path: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SelectionArgs {
    /// Fan record id
    #[arg(long)]
    fan: Option<String>,
    /// Number of identical fans in parallel
    #[arg(long, default_value_t = 1)]
    fan_qty: u32,
    /// Filter record id
    #[arg(long)]
    filter: Option<String>,
    /// Filter size: a variant label or a zero-based index
    #[arg(long)]
    size: Option<String>,
    /// Number of identical filter assemblies
    #[arg(long, default_value_t = 1)]
    filter_qty: u32,
    /// Pressure unit: inches or millimeters
    #[arg(long, default_value = "inches")]
    units: PressureUnit,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { catalog_path } => cmd_validate(&catalog_path),
        Commands::List {
            catalog_path,
            query,
        } => cmd_list(&catalog_path, query.as_deref()),
        Commands::Solve {
            catalog_path,
            selection,
        } => cmd_solve(&catalog_path, &selection),
        Commands::ExportCurves {
            catalog_path,
            selection,
            output,
        } => cmd_export_curves(&catalog_path, &selection, output.as_deref()),
    }
}

fn cmd_validate(catalog_path: &Path) -> AppResult<()> {
    println!("Validating catalog: {}", catalog_path.display());
    let catalog = load_catalog(catalog_path)?;
    println!(
        "✓ Catalog is valid ({} fans, {} filters)",
        catalog.fans.len(),
        catalog.filters.len()
    );
    Ok(())
}

fn cmd_list(catalog_path: &Path, query: Option<&str>) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let query = query.unwrap_or("");

    let fans: Vec<_> = catalog
        .fans
        .iter()
        .filter(|record| record.matches_query(query))
        .collect();
    if fans.is_empty() {
        println!("No matching fans");
    } else {
        println!("Fans:");
        for fan in fans {
            println!("  {} - {} ({})", fan.id, fan.name, fan.manufacturer);
        }
    }

    let filters: Vec<_> = catalog
        .filters
        .iter()
        .filter(|record| record.matches_query(query))
        .collect();
    if filters.is_empty() {
        println!("No matching filters");
    } else {
        println!("Filters:");
        for filter in filters {
            println!("  {} - {} ({})", filter.id, filter.name, filter.manufacturer);
            for (index, size) in filter.available_sizes.iter().flatten().enumerate() {
                println!("    [{index}] {} ({} sq ft)", size.label, size.area);
            }
        }
    }

    Ok(())
}

fn cmd_solve(catalog_path: &Path, selection: &SelectionArgs) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let state = resolve_state(&catalog, selection)?;
    let output = compute(&catalog, &state);

    print_curve_summary("Fan curve", output.fan_curve.as_ref());
    print_curve_summary("Filter curve", output.filter_curve.as_ref());

    match output.operating_point {
        Some(point) => {
            println!(
                "✓ Operating point: {:.1} CFM @ {:.prec$} {}",
                point.flow,
                point.pressure,
                state.units.label(),
                prec = state.units.display_decimals()
            );
        }
        None if output.fan_curve.is_some() && output.filter_curve.is_some() => {
            println!("No stable operating point: the curves do not cross");
        }
        None => {
            println!("Select a fan and a filter size to compute an operating point");
        }
    }

    Ok(())
}

fn cmd_export_curves(
    catalog_path: &Path,
    selection: &SelectionArgs,
    output: Option<&Path>,
) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let state = resolve_state(&catalog, selection)?;
    let result = compute(&catalog, &state);

    // Build CSV
    let mut csv = String::from("curve,flow_cfm,pressure\n");
    let mut rows = 0usize;
    for (label, curve) in [
        ("fan", result.fan_curve.as_ref()),
        ("filter", result.filter_curve.as_ref()),
    ] {
        if let Some(curve) = curve {
            for point in curve.points() {
                csv.push_str(&format!("{},{},{}\n", label, point.flow, point.pressure));
                rows += 1;
            }
        }
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} curve samples to {}", rows, path.display());
    } else {
        print!("{csv}");
    }

    Ok(())
}

fn resolve_state(catalog: &Catalog, args: &SelectionArgs) -> AppResult<OperatingState> {
    let mut state = OperatingState {
        fan_quantity: args.fan_qty,
        filter_quantity: args.filter_qty,
        units: args.units,
        ..OperatingState::default()
    };

    if let Some(fan_id) = &args.fan {
        catalog
            .fan(fan_id)
            .ok_or_else(|| AppError::FanNotFound(fan_id.clone()))?;
        state.fan_id = Some(fan_id.clone());
    }

    if let Some(filter_id) = &args.filter {
        let record = catalog
            .filter(filter_id)
            .ok_or_else(|| AppError::FilterNotFound(filter_id.clone()))?;
        state.filter_id = Some(filter_id.clone());

        if let Some(size) = &args.size {
            state.filter_size_index = Some(resolve_size(record, size)?);
        }
    }

    Ok(state)
}

/// Size selection accepts a variant label first, then a zero-based index.
fn resolve_size(record: &DeviceRecord, size: &str) -> AppResult<usize> {
    let sizes = record.available_sizes.as_deref().unwrap_or_default();

    if let Some(index) = sizes.iter().position(|variant| variant.label == size) {
        return Ok(index);
    }
    if let Ok(index) = size.parse::<usize>() {
        if index < sizes.len() {
            return Ok(index);
        }
    }

    Err(AppError::SizeNotFound {
        filter: record.id.clone(),
        size: size.to_string(),
    })
}

fn print_curve_summary(label: &str, curve: Option<&Curve>) {
    match curve {
        Some(curve) => match curve.flow_range() {
            Some((min, max)) => println!(
                "  {}: {} samples, {:.1} to {:.1} CFM",
                label,
                curve.len(),
                min,
                max
            ),
            None => println!("  {label}: no samples"),
        },
        None => println!("  {label}: not selected"),
    }
}
