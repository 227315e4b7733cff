use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use bubbletea_rs::Program;
use clap::Parser;
use tracing as log;
use usertable::{config::Config, editor, Error};

/// Browse, search and edit a remote list of users.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = usertable::config::DEFAULT_PATH)]
    config: String,

    /// URL to fetch the users from, overriding the configuration.
    #[arg(short, long)]
    endpoint: Option<String>,

    /// File to write logs to, overriding the configuration.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        config,
        endpoint,
        log_file,
    } = Args::parse();

    let mut config = Config::new(config)?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(file) = log_file {
        config.log.file = Some(file);
    }

    init_logging(&config)?;
    log::info!(endpoint = %config.endpoint, "starting");

    config.install();
    let program = Program::<editor::Model>::builder().alt_screen(true).build()?;
    program.run().await?;

    log::info!("exiting");
    Ok(())
}

/// Installs a file logger when a log file is configured. The terminal belongs
/// to the table, so nothing is logged otherwise.
fn init_logging(config: &Config) -> Result<(), Error> {
    let Some(path) = &config.log.file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_max_level(log::Level::from(config.log.level))
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
