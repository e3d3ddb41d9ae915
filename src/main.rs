use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;

use textsum::config::DEFAULT_CONFIG_PATH;
use textsum::logging;
use textsum::stage::data_validation::DataValidationStage;
use textsum::stage::Pipeline;

/// Run the text summarization data pipeline
#[derive(Parser)]
#[command(name = "textsum")]
#[command(about = "Run the text summarization data pipeline", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline, or a single stage with --stage
    Run {
        /// Path to the pipeline configuration file
        #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Run only the named stage
        #[arg(long)]
        stage: Option<String>,
    },
    /// List the registered pipeline stages
    Stages,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Some(Commands::Run { config, stage }) => run_pipeline(config, stage),
        Some(Commands::Stages) => {
            for name in build_pipeline(PathBuf::from(DEFAULT_CONFIG_PATH)).stage_names() {
                println!("{name}");
            }
            Ok(())
        }
        // Default to running the full pipeline with the default config
        None => run_pipeline(PathBuf::from(DEFAULT_CONFIG_PATH), None),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn build_pipeline(config: PathBuf) -> Pipeline {
    Pipeline::new().register(Box::new(DataValidationStage::new(config)))
}

fn run_pipeline(config: PathBuf, stage: Option<String>) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config);
    match stage {
        Some(name) => pipeline
            .run_stage(&name)
            .with_context(|| format!("stage {name} failed")),
        None => pipeline.run().context("pipeline run failed"),
    }
}
