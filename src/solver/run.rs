use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{CHART_WIDTH, CSV_FILE_NAME, PARAMS_PATH_ENV, TXT_FILE_NAME};
use crate::domain::{HaulParameters, HaulResult, RankedResultSet, TieBreak};
use crate::evaluation::{evaluate_with, quote};
use crate::export::{best_summary, save_json, save_summary, save_to_csv};
use crate::setup::{apply_overrides, load_parameters, Overrides};
use crate::utils::parse_assignment;

use super::report::{print_chart, print_ranking, print_selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    InputOrder,
    Name,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::InputOrder => TieBreak::InputOrder,
            TieBreakArg::Name => TieBreak::Name,
        }
    }
}

/// Haul-truck round-trip calculator: ranks every loading equipment and route combination.
#[derive(Debug, Parser)]
pub struct Args {
    /// JSON parameter file (falls back to HAUL_PARAMS_PATH, then the built-in tables)
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Number of trips (one truck = one trip)
    #[arg(short, long)]
    pub trips: Option<u32>,

    /// Set a load time, NAME=MINUTES. Repeatable
    #[arg(short, long = "load", value_name = "NAME=MINUTES")]
    pub load: Vec<String>,

    /// Set a transport time, NAME=MINUTES. Repeatable
    #[arg(short, long = "route", value_name = "NAME=MINUTES")]
    pub route: Vec<String>,

    /// Ordering of combinations with equal total time
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreakArg>,

    /// Equipment for the single-selection estimate (defaults to the first one)
    #[arg(long)]
    pub select_equipment: Option<String>,

    /// Route for the single-selection estimate (defaults to the first one)
    #[arg(long)]
    pub select_route: Option<String>,

    /// Write the ranked table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the best-alternative summary as text
    #[arg(long)]
    pub txt: Option<PathBuf>,

    /// Write the ranked table and best entry as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write CSV and TXT under their default file names in this directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Skip the bar chart
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
}

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .try_init()?;

    Ok(())
}

/// Resolve and load the parameter tables. An explicit `--params` must exist;
/// a path from the environment falls back to the defaults when unreadable.
fn resolve_parameters(args: &Args) -> HaulResult<HaulParameters> {
    if let Some(path) = &args.params {
        return load_parameters(Some(path.as_path()));
    }

    match env::var(PARAMS_PATH_ENV) {
        Ok(path) => {
            let path = PathBuf::from(path);
            load_parameters(Some(path.as_path())).or_else(|e| {
                warn!(
                    "Failed to load {} from {}: {}. Falling back to built-in tables.",
                    PARAMS_PATH_ENV,
                    path.display(),
                    e
                );
                load_parameters(None)
            })
        }
        Err(_) => load_parameters(None),
    }
}

fn collect_overrides(args: &Args) -> HaulResult<Overrides> {
    Ok(Overrides {
        load_times: args
            .load
            .iter()
            .map(|s| parse_assignment(s))
            .collect::<HaulResult<_>>()?,
        transport_times: args
            .route
            .iter()
            .map(|s| parse_assignment(s))
            .collect::<HaulResult<_>>()?,
        trips: args.trips,
        tie_break: args.tie_break.map(TieBreak::from),
    })
}

fn show_selection(args: &Args, params: &HaulParameters) -> HaulResult<()> {
    let equipment = args
        .select_equipment
        .as_deref()
        .or_else(|| params.load_times.first_name());
    let route = args
        .select_route
        .as_deref()
        .or_else(|| params.transport_times.first_name());

    // empty tables are reported by the evaluator
    if let (Some(equipment), Some(route)) = (equipment, route) {
        let minutes = quote(
            &params.load_times,
            &params.transport_times,
            params.trips,
            equipment,
            route,
        )?;
        print_selection(equipment, route, minutes);
    }
    Ok(())
}

fn export(args: &Args, ranked: &RankedResultSet) -> HaulResult<()> {
    let dir_targets = args
        .export_dir
        .as_deref()
        .map(|dir| (dir.join(CSV_FILE_NAME), dir.join(TXT_FILE_NAME)));

    if let Some(dir) = &args.export_dir {
        std::fs::create_dir_all(dir)?;
    }

    let csv_paths = args.csv.iter().chain(dir_targets.as_ref().map(|(c, _)| c));
    for path in csv_paths {
        save_to_csv(ranked, path)?;
    }

    let txt_paths = args.txt.iter().chain(dir_targets.as_ref().map(|(_, t)| t));
    for path in txt_paths {
        save_summary(ranked, path)?;
    }

    if let Some(path) = &args.json {
        save_json(ranked, path)?;
    }
    Ok(())
}

pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let params = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();

        let mut params = resolve_parameters(&args)?;
        apply_overrides(&mut params, &collect_overrides(&args)?);
        params
    };

    info!(
        "Evaluating {} equipment x {} routes over {} trips",
        params.load_times.len(),
        params.transport_times.len(),
        params.trips
    );

    let ranked = {
        let span = span!(Level::INFO, "evaluate");
        let _guard = span.enter();
        evaluate_with(&params)?
    };

    show_selection(&args, &params)?;
    println!();
    print_ranking(&ranked);
    if !args.no_chart {
        print_chart(&ranked, CHART_WIDTH);
    }
    println!();
    println!("{}", best_summary(ranked.best()));

    export(&args, &ranked)?;

    info!(
        "Best alternative: {} + {} ({:.1} min)",
        ranked.best().equipment,
        ranked.best().route,
        ranked.best().total_minutes
    );
    Ok(())
}
