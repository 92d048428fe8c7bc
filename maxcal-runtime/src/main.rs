use anyhow::{anyhow, Context, Result};
use clap::{arg, Arg, ArgAction, ArgMatches, Command};
use maxcal_algorithms::SolverSettings;
use maxcal_foods::{
    format_food_database, generate_instance, load_food_database, verify_selection,
    write_food_database, Capacity, FoodItem, Track,
};
use maxcal_utils::{compress_obj, dejsonify, jsonify, seed_from_str};
use serde::Serialize;
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("maxcal-runtime")
        .about("Computes or verifies maximum-calorie food selections")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("compute_selection")
                .about("Computes a selection")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<DATABASE> "Path to a '^' delimited food database")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--report "Also print a human readable report of the selection")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_selection")
                .about("Verifies a selection")
                .arg(
                    arg!(<DATABASE> "Path to a '^' delimited food database")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<CAPACITY> "Maximum total weight in ounces")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(<INDICES> "Json array of catalog indices, e.g. [0,3,4]")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate_catalog")
                .about("Generates a random food database")
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<NUM_ITEMS> "Number of food items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("max-item-weight")
                        .long("max-item-weight")
                        .help("Maximum weight of an item in ounces")
                        .default_value("20")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("max-calories")
                        .long("max-calories")
                        .help("Maximum calories of an item")
                        .default_value("500")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the database will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("compute_selection", sub_m)) => compute_selection(
            required::<String>(sub_m, "SETTINGS")?,
            required::<PathBuf>(sub_m, "DATABASE")?,
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
            sub_m.get_flag("report"),
        ),
        Some(("verify_selection", sub_m)) => verify(
            required::<PathBuf>(sub_m, "DATABASE")?,
            required::<f64>(sub_m, "CAPACITY")?,
            required::<String>(sub_m, "INDICES")?,
        ),
        Some(("generate_catalog", sub_m)) => generate_catalog(
            required::<String>(sub_m, "SEED")?,
            Track {
                num_items: required::<usize>(sub_m, "NUM_ITEMS")?,
                max_item_weight: required::<u32>(sub_m, "max-item-weight")?,
                max_calories: required::<u32>(sub_m, "max-calories")?,
            },
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

#[derive(Serialize)]
struct OutputData<'a> {
    algorithm: String,
    capacity: f64,
    items: Vec<&'a FoodItem>,
    total_weight: f64,
    total_calories: f64,
}

fn compute_selection(
    settings: String,
    database_path: PathBuf,
    output_file: Option<PathBuf>,
    compress: bool,
    report: bool,
) -> Result<()> {
    let settings = load_settings(&settings)?;
    let foods = load_food_database(&database_path)?;
    let foods = settings.prepare(&foods)?;
    info!(
        algorithm = %settings.algorithm,
        num_items = foods.len(),
        capacity = settings.capacity.ounces(),
        "computing selection"
    );

    let selection = settings.solve(&foods)?;
    if report {
        eprintln!("{}", selection);
    }

    let output_data = OutputData {
        algorithm: settings.algorithm.to_string(),
        capacity: settings.capacity.ounces(),
        items: selection.items().to_vec(),
        total_weight: selection.total_weight(),
        total_calories: selection.total_calories(),
    };
    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&output_data)?)?;
        } else {
            fs::write(&path, jsonify(&output_data)?)?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data)?);
    }
    Ok(())
}

fn verify(database_path: PathBuf, capacity: f64, indices: String) -> Result<()> {
    let foods = load_food_database(&database_path)?;
    let capacity = Capacity::new(capacity)?;
    let indices: Vec<usize> =
        dejsonify(&indices).context("Failed to parse indices; expected a json array")?;
    let total_calories =
        verify_selection(&foods, &indices, capacity).context("Invalid selection")?;
    println!("Selection is valid ({} calories)", total_calories);
    Ok(())
}

fn generate_catalog(seed: String, track: Track, output_file: Option<PathBuf>) -> Result<()> {
    let foods = generate_instance(&seed_from_str(&seed), &track)?;
    info!(num_items = foods.len(), "generated catalog");
    match output_file {
        Some(path) => {
            write_food_database(&path, &foods)?;
            println!("catalog written to: {:?}", path);
        }
        None => print!("{}", format_food_database(&foods)),
    }
    Ok(())
}

fn load_settings(settings: &str) -> Result<SolverSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .with_context(|| format!("Failed to read settings file: {}", settings))?
    } else {
        settings.to_string()
    };

    dejsonify::<SolverSettings>(&settings).context("Failed to parse settings")
}
