use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use time::OffsetDateTime;

use ddd_core::catalog;

use crate::{config::Config, site};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the host page, robots.txt and sitemap.xml
    Render {
        /// Output directory (overrides the configuration)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Print all conferences
    List,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    match args.command {
        Command::Render { out } => {
            let out_dir = out.unwrap_or_else(|| cfg.site.output_dir.clone());
            let today = OffsetDateTime::now_utc().date();
            site::render_to_dir(&cfg, &out_dir, today)?;
        }
        Command::List => {
            for line in site::catalog_lines(&catalog::conferences()) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
