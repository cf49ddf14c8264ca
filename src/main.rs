use clap::Parser;
use couettesampling::dataset::Dataset;
use couettesampling::errors::*;
use couettesampling::output::path::OutputPath;
use couettesampling::output::{pretty_print_duration, write_dataset};
use couettesampling::settings;
use couettesampling::VERSION;
use log::{error, info};
use std::path::PathBuf;
use std::time::Instant;

/// Generates analytical startup Couette flow data sets.
#[derive(Parser)]
#[command(name = "couettesampling", version, about, long_about = None)]
struct Cli {
    /// TOML parameter file
    parameter_file: PathBuf,

    /// Directory in which the output folder is created
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(ref e) = run(&cli) {
        error!("Error during data generation: {}", e);

        for cause in e.iter().skip(1) {
            error!("caused by: {}", cause);
        }

        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = settings::read_parameter_file(&cli.parameter_file).chain_err(|| {
        format!(
            "Error reading parameter file '{}'.",
            cli.parameter_file.display()
        )
    })?;
    settings.set_version(VERSION);

    let output_path = OutputPath::new(&cli.output_dir, &settings.environment.prefix);
    output_path.create()?;

    // keep the effective parameters next to the data
    settings.save_to_file(output_path.with_extension("toml"))?;

    let start = Instant::now();
    let dataset = Dataset::generate(&settings)?;
    info!(
        "Generated data set of shape {:?} in {}.",
        dataset.shape(),
        pretty_print_duration(start.elapsed())
    );

    let file = write_dataset(&output_path, &settings, &dataset)?;
    info!("Data set written to '{}'.", file.display());

    Ok(())
}
