use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::executor::{bundled_plugin, load_script, Expr, Interpreter};

#[derive(Parser)]
#[command(name = "keyscript")]
#[command(about = "keyscript - evaluate JSON-encoded keyword scripts", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script
    Run {
        /// JSON file holding the script
        file: PathBuf,

        /// Bundled plugin to import before running (repeatable)
        #[arg(short = 'p', long = "plugin")]
        plugins: Vec<String>,

        /// Print the value of every top-level expression after the run
        #[arg(long)]
        print_results: bool,
    },

    /// Load and validate a script without running it
    Check {
        /// JSON file holding the script
        file: PathBuf,
    },
}

/// Run the CLI by parsing process arguments
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli)
}

/// Run the CLI with provided arguments
pub fn run_cli_from_args(args: Vec<String>) -> Result<()> {
    let cli = Cli::parse_from(args);
    run_cli_with_args(cli)
}

fn run_cli_with_args(cli: Cli) -> Result<()> {
    // Load configuration before anything else so config errors surface first
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.log_level);

    match cli.command {
        Commands::Run {
            file,
            plugins,
            print_results,
        } => {
            let script = read_script(&file)?;

            let mut interp = Interpreter::new().with_max_call_depth(config.max_call_depth);
            for name in config.plugins.iter().chain(plugins.iter()) {
                let plugin =
                    bundled_plugin(name).ok_or_else(|| anyhow!("Unknown plugin: {}", name))?;
                interp.import(plugin);
            }

            // Runtime errors can carry script values, which are not `Send`
            let values = interp
                .run(&script)
                .map_err(|e| anyhow!("{}", e))
                .with_context(|| format!("Failed to run {}", file.display()))?;

            if print_results {
                for value in values {
                    println!("{}", value);
                }
            }
        }

        Commands::Check { file } => {
            let script = read_script(&file)?;
            println!("{}: {} top-level expression(s)", file.display(), script.len());
        }
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<Expr>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    load_script(json).with_context(|| format!("Failed to load script {}", path.display()))
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
