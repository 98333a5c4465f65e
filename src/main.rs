//! Main entry point for the `baldu` CLI application.
//!
//! `baldu` lists the largest entries under a path, like a `du` that stops
//! once it has found `--max` entries instead of sizing every file separately.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Rejects a missing path or a zero `--max` with the usage line
//! - Sets up stderr logging and the thread pool used to size subtrees
//! - Delegates the exploration to [`select_largest`]
//! - Prints the selected entries as terminal lines or CSV
//!
//! # Flags of Interest
//! - `--max N`: number of entries to report (default 100)
//! - `--verbose`: trace every selection and expansion step on stderr
//! - `--sort admission|size|name`: output order
//! - `--output FILE`: write CSV instead of terminal lines

use anyhow::{Context, Result};
use baldu::cli::Args;
use baldu::output::{render_csv, render_terminal};
use baldu::reader::FsReader;
use baldu::select::select_largest;
use baldu::utils::sort_entries;
use baldu::{Entry, logging};
use clap::Parser;
use std::process;
use tracing::debug;

/// Sets up the thread pool configuration based on CLI arguments.
fn setup_thread_pool(args: &Args) -> Result<()> {
    if let Some(n_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build_global()
            .context("Failed to configure thread pool")?;
        debug!("using {} thread(s)", n_threads);
    } else {
        debug!("using all {} available threads", num_cpus::get());
    }
    Ok(())
}

/// Outputs the results either to CSV or to the terminal based on CLI arguments.
fn output_results(entries: &[Entry], args: &Args) -> Result<()> {
    if args.output.is_some() {
        render_csv(entries, args)
    } else {
        render_terminal(entries, args)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let root = match &args.path {
        Some(path) if args.max > 0 => path.clone(),
        _ => {
            println!("{}", Args::usage());
            process::exit(1);
        }
    };

    // Parse args → logging → thread pool → select_largest → sort → output
    logging::init(args.verbose)?;
    setup_thread_pool(&args)?;

    let selection = select_largest(root, args.max, &FsReader)?;
    let mut entries = selection.entries();
    sort_entries(&mut entries, args.sort);
    output_results(&entries, &args)?;

    Ok(())
}
