use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use module_schema::{LoaderConfig, LoggingSystem, ModuleSchemaBuilder, ModulesPool, Symbol};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the loader configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration file
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// How a built symbol tree is printed
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Indented tree
    Pretty,
    /// JSON document
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one module from schema files, applied in the given order
    Inspect {
        /// Schema JSON files of the module
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },
    /// Discover and build every module in a directory
    Scan {
        /// Directory holding module schemas (defaults to the configured one)
        directory: Option<PathBuf>,

        /// Import features to load modules with (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        features: Vec<String>,
    },
}

fn handle_inspect(
    paths: Vec<PathBuf>,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let module = ModuleSchemaBuilder::build(&paths)?;
    let root = module
        .root_symbol()
        .ok_or("module was not initialized")?;
    let root = Symbol::Structure(root.clone());

    match output {
        OutputFormat::Pretty => print!("{}", root),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&root)?),
    }
    Ok(())
}

fn handle_scan(
    directory: Option<PathBuf>,
    features: Vec<String>,
    config: &LoaderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = directory.unwrap_or_else(|| config.modules_dir.clone());
    let features = if features.is_empty() {
        config.import_features()?
    } else {
        let mut config = config.clone();
        config.features = features;
        config.import_features()?
    };

    let mut pool = ModulesPool::from_directory(&directory)?;
    let names: Vec<String> = pool.module_names().into_iter().map(String::from).collect();

    let mut failures = 0;
    for name in names {
        match pool.load(&name, features) {
            Ok(Some(module)) => {
                println!("{}: {}", module.name(), module.paths_as_string());
            }
            Ok(None) => {
                info!("Module '{}' is not available with features {}", name, features);
            }
            Err(e) => {
                error!("Failed to load module '{}': {}", name, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} module(s) failed to load", failures).into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LoaderConfig::from_file(path)?,
        None => LoaderConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    LoggingSystem::init_with_config(&config)?;

    match cli.command {
        Commands::Inspect { paths, output } => handle_inspect(paths, output)?,
        Commands::Scan {
            directory,
            features,
        } => handle_scan(directory, features, &config)?,
    }

    Ok(())
}
