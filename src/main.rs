//! Icon Mapping Generator
//!
//! Reads the icon catalog (icon id + image filename) and writes the Go source
//! that maps each id to the embedded fyne resource built from that image.
//!
//! Usage:
//!   icongen [CATALOG] [OUTPUT]
//!
//! CATALOG defaults to `icons.json`, OUTPUT to `mapping.go`; `-` writes to stdout.

mod catalog;
mod config;
mod emitter;
mod error;
mod logging;
mod models;
mod symbol;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::config::{ExclusionSet, Invocation, OutputTarget, RenderConfig, USAGE};

fn main() {
    logging::init(LevelFilter::Info);

    if let Err(e) = run() {
        log::error!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let invocation = Invocation::from_args(std::env::args_os().skip(1))
        .map_err(|e| {
            eprintln!("{}", USAGE);
            e
        })
        .context("parsing command line")?;

    if invocation.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let exclusions = ExclusionSet::builtin();
    let render_config = RenderConfig::default();

    // 1. Load, filter, transform and render entirely in memory
    let text = emitter::generate(&invocation.catalog, &exclusions, &render_config)
        .context("loading icon catalog")?;

    // 2. Hand the finished text to the sink
    let destination = invocation.output.describe();
    match &invocation.output {
        OutputTarget::File(path) => {
            emitter::write_atomic(path, &text).context("writing generated mapping")?;
        }
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            emitter::emit(&text, &mut lock, &destination).context("writing generated mapping")?;
        }
    }

    log::info!("✅ Wrote {} ({} bytes)", destination, text.len());
    Ok(())
}
