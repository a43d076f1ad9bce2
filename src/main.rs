// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use course_site::utils::logging::{format_error, format_success, format_warning};
use course_site::{Config, JsonExporter, SiteBuilder};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "course_site")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Static site generator for markdown courses", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the content and asset directories if they are missing
    Init,

    /// Build the whole site into the output directory
    Build {
        /// Remove the output directory first
        #[arg(long)]
        clean: bool,
    },

    /// Print or export the planned pages as JSON
    Plan {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Classify content and report errors without writing anything
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    course_site::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        let config = Config::default_config();
        config.validate().context("Invalid default configuration")?;
        config
    };

    let builder = SiteBuilder::new(config).with_progress(true);

    match cli.command {
        Commands::Init => cmd_init(&builder)?,
        Commands::Build { clean } => cmd_build(&builder, clean).await?,
        Commands::Plan { output, pretty } => cmd_plan(&builder, output, pretty)?,
        Commands::Check => cmd_check(&builder)?,
    }

    Ok(())
}

fn cmd_init(builder: &SiteBuilder) -> Result<()> {
    let created = builder
        .bootstrap()
        .context("Failed to create site directories")?;

    if created.is_empty() {
        println!("{}", format_success("Site directories already exist"));
    } else {
        for dir in created {
            println!("{}", format_success(&format!("Created {}", dir.display())));
        }
    }

    Ok(())
}

async fn cmd_build(builder: &SiteBuilder, clean: bool) -> Result<()> {
    info!("Building site into {}", builder.output_dir().display());

    let stats = builder.build(clean).await.context("Site build failed")?;

    println!("{}", stats.summary());
    Ok(())
}

fn cmd_plan(builder: &SiteBuilder, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let loaded = builder.load_content().context("Failed to load content")?;
    let pages = builder
        .plan(&loaded.store)
        .context("Page planning failed")?;

    let exporter = JsonExporter::new(pretty);
    let manifest = exporter.manifest(&builder.options().base_path, &pages);

    match output {
        Some(path) => {
            exporter
                .export(&manifest, &path)
                .context("Failed to export page plan")?;
            println!(
                "{}",
                format_success(&format!("Wrote {} pages to {}", pages.len(), path.display()))
            );
        }
        None => println!("{}", exporter.to_json(&manifest)?),
    }

    Ok(())
}

fn cmd_check(builder: &SiteBuilder) -> Result<()> {
    let loaded = builder.load_content().context("Failed to load content")?;
    let errors = builder.check(&loaded.store);

    if errors.is_empty() {
        println!(
            "{}",
            format_success(&format!(
                "{} documents, {} entities, no content errors",
                loaded.stats.documents_ingested,
                loaded.stats.entities()
            ))
        );
        if loaded.stats.courses == 0 {
            println!("{}", format_warning("No course landing page found"));
        }
        return Ok(());
    }

    for err in &errors {
        error!("{}", err);
        println!("{}", format_error(&err.to_string()));
    }

    Err(anyhow::anyhow!("{} content error(s) found", errors.len()))
}
