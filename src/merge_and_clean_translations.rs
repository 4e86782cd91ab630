/*
cargo run --bin merge_and_clean_translations

cargo run --bin merge_and_clean_translations -- \
    --base-dir MMEX/Resources/ \
    --file-name Localizable.xcstrings \
    --log-dir logs \
    --verbose
*/

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use xcstrings_merge::{run, COMPLETION_MESSAGE, DEFAULT_BASE_DIR, DEFAULT_FILE_NAME};

/// Merge per-locale Localizable.xcstrings files into one and delete the originals.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory to scan; the merged file is written at its top level
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Name of the per-locale files to merge
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Also write an info-level log file into this directory
    #[arg(long = "log-dir", value_name = "PATH")]
    log_dir: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ----- initialise logging ----------------------------------------------
    let term_level = if cli.verbose { LevelFilter::Info } else { LevelFilter::Warn };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(dir) = &cli.log_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let log_path = dir.join(format!("{timestamp}.log"));
        let file = fs::File::create(&log_path)
            .with_context(|| format!("creating {}", log_path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Info, Config::default(), file));
    }

    CombinedLogger::init(loggers).context("initialising logger")?;

    info!("Started - base_dir: {:?}, file_name: {:?}", cli.base_dir, cli.file_name);

    let summary = run(&cli.base_dir, &cli.file_name)?;

    info!(
        "Merged {} file(s), removed {} file(s) and {} director(ies)",
        summary.merged_files, summary.removed_files, summary.removed_dirs
    );
    println!("{COMPLETION_MESSAGE}");
    Ok(())
}
