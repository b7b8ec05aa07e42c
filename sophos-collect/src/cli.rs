use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sophos-collect")]
#[command(about = "Collect Sophos firewall configuration snapshots over the XML API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Query every device in the list and write snapshot files.
    Collect(CollectArgs),
    /// Extract records for one object type from a saved XML response.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Device list JSON file: an array of {name, ip, port, username, password}.
    #[arg(long, default_value = "firewalls.json")]
    pub devices: PathBuf,
    /// Directory for the aggregate snapshot file.
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
    /// Directory for per-device history files.
    #[arg(long, default_value = "history")]
    pub history_dir: PathBuf,
    /// Query-group TOML file overriding the built-in table.
    #[arg(long, conflicts_with = "types")]
    pub groups_file: Option<PathBuf>,
    /// Ad-hoc object types queried as a single group instead of the table.
    #[arg(long, num_args = 1..)]
    pub types: Vec<String>,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 45)]
    pub timeout: u64,
    /// Skip TLS certificate verification (self-signed appliance certs).
    #[arg(long)]
    pub insecure_tls: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Saved XML response body.
    pub file: PathBuf,
    /// Object type tag to extract.
    #[arg(long)]
    pub tag: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
