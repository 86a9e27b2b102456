use clap::Parser;
use heliostate::config::{load_body_table, write_body_table, SOLAR_SYSTEM};
use heliostate::constants::{DEFAULT_TIME_STEP, MAX_TIME_STEP, SUN_MASS};
use heliostate::output::{write_report, write_state_csv, Scenario};
use heliostate::{BodyTable, SystemSolution};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "heliostate",
    version,
    about = "Heliocentric periapsis state vectors and zero-momentum Sun velocity"
)]
struct Cli {
    /// CSV body table (defaults to the built-in eight planets)
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Mass of the Sun in kg
    #[arg(long, default_value_t = SUN_MASS)]
    sun_mass: f64,

    /// Also write state vectors to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write a simulator scenario to this YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Scenario time step in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIME_STEP,
        value_parser = clap::value_parser!(i64).range(1..=MAX_TIME_STEP)
    )]
    time_step: i64,

    /// Write the body table in use to this CSV file
    #[arg(long)]
    export_bodies: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    let loaded;
    let table: &BodyTable = match &cli.bodies {
        Some(path) => {
            info!("Loading body table from {:?}", path);
            loaded = load_body_table(path)?;
            &loaded
        }
        None => {
            info!("Using built-in Solar System table");
            &*SOLAR_SYSTEM
        }
    };
    info!(bodies = table.len(), sun_mass = cli.sun_mass, "Solving system");

    let solution = SystemSolution::solve(table, cli.sun_mass)?;
    info!(
        total_momentum = ?solution.total_momentum,
        residual = ?solution.residual_momentum(),
        "Momentum balanced"
    );

    write_report(io::stdout().lock(), &solution)?;

    if let Some(path) = &cli.csv {
        write_state_csv(BufWriter::new(File::create(path)?), &solution)?;
        info!("State vectors written to {:?}", path);
    }

    if let Some(path) = &cli.scenario {
        Scenario::from_solution(&solution, cli.time_step)?.save(path)?;
        info!("Scenario written to {:?}", path);
    }

    if let Some(path) = &cli.export_bodies {
        write_body_table(BufWriter::new(File::create(path)?), table)?;
        info!("Body table written to {:?}", path);
    }

    Ok(())
}
