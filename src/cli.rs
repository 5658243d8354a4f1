// CLI module - command-line argument parsing for the demo binary
//
// The binary mounts a page (built-in sample or a JSON fixture) and drives
// it with an interaction script (built-in demo session or a JSON event
// array), logging every mutation the behaviors perform.

use clap::Parser;
use std::path::PathBuf;

/// Headless page behavior controller for a static portfolio page
#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Headless portfolio page behavior controller", long_about = None)]
pub struct Cli {
    /// Page fixture to mount: a JSON node tree (defaults to the built-in
    /// sample page)
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Interaction script to run: a JSON array of page events (defaults to
    /// the built-in demo session)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Viewport height in page units
    #[arg(long, default_value_t = 800.0)]
    pub viewport: f64,
}
