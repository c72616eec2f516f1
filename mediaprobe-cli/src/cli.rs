// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mediaprobe: Media file probing tool",
    long_about = "Inspects audio, video and image files using ffprobe via the mediaprobe-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional: Explicit path to the ffprobe binary (defaults to 'ffprobe' on PATH).
    /// Can also be set via the MEDIAPROBE_FFPROBE environment variable.
    #[arg(long, global = true, value_name = "FFPROBE_PATH", env = "MEDIAPROBE_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes a single file and prints its metadata as JSON
    Probe(ProbeArgs),
    /// Scans a directory for probeable media files and probes each one
    Scan(ScanArgs),
    /// Reports ffprobe availability and version information
    Info,
}

#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// File to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Print a human-readable summary instead of raw JSON
    #[arg(long, conflicts_with = "pretty")]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to scan (top level only)
    #[arg(required = true, value_name = "DIR")]
    pub dir: PathBuf,
}
