use color_eyre::eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use clap::Parser;

use crate::vendor::{StatementParser, Vendor};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Statement PDF to process
    statement: PathBuf,

    /// Directory to write the generated .bean files into
    #[clap(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Which vendor layout the statement uses
    #[clap(short, long)]
    vendor: Vendor,
}

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let cli = Cli::parse();

    let text = extract::extract_text(&cli.statement)?;
    let entries = cli.vendor.parser().parse(&text)?;
    validate::validate(&entries)?;
    write::write_bean_files(&cli.output_dir, &cli.statement, &entries)?;

    tracing::info!(
        statement = %cli.statement.display(),
        vendor = %cli.vendor,
        entries = entries.len(),
        "processed statement"
    );

    Ok(())
}

pub(crate) mod extract;
pub(crate) mod format;
pub(crate) mod ledger;
pub(crate) mod scrub;
pub(crate) mod validate;
pub(crate) mod vendor;
pub(crate) mod write;
