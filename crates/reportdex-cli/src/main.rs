mod commands;
mod logging;
mod output;

use clap::{Args, Parser, Subcommand};
use reportdex_core::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT, DEFAULT_URL_PREFIX};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reportdex",
    version,
    about = "Build a JSON index of monthly HTML reports"
)]
struct Cli {
    /// Log each resolved document to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory of reports and write the JSON manifest (default)
    Build(BuildArgs),
    /// Show what would be extracted from a single report
    Inspect {
        /// Path to an HTML report
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Prefix joined with the filename to form the URL
        #[arg(long, default_value = DEFAULT_URL_PREFIX)]
        url_prefix: String,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Directory containing *.html reports
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Manifest file to write
    #[arg(short = 'O', long = "out", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Prefix joined with each filename to form the URL
    #[arg(long, default_value = DEFAULT_URL_PREFIX)]
    url_prefix: String,
}

impl Default for BuildArgs {
    fn default() -> Self {
        BuildArgs {
            input: PathBuf::from(DEFAULT_INPUT_DIR),
            out: PathBuf::from(DEFAULT_OUTPUT),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command.unwrap_or_else(|| Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => commands::build::run(&args.input, &args.out, &args.url_prefix),
        Commands::Inspect {
            input_file,
            output,
            url_prefix,
        } => commands::inspect::run(&input_file, &output, &url_prefix),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
