//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for dumppath_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for dumppath
#[derive(Parser, Debug)]
#[command(name = "dumppath")]
#[command(author, version, about = "Turn untrusted titles into safe, length-bounded output paths")]
#[command(long_about = r#"
dumppath turns application titles and metadata names into filesystem-legal,
UTF-8 safe path components and full output paths.

Every path component is limited to a byte budget on codepoint boundaries,
the file extension is preserved when the file name is shortened, and the
full path must stay below the platform path limit.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. DUMPPATH_* env      e.g. DUMPPATH_LIMITS__MAX_PATH_BYTES=4096
3. ./dumppath.toml     Project-level config
4. ~/.config/dumppath/config.toml   Global config

Example:
  dumppath path "Zelda: Breath of the Wild" --prefix sd:/dumps/NSP --ext .nsp
  dumppath sanitize --ascii-only "héllo"
  dumppath boundary "ゼルダの伝説" 10
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Print only the bare result (path, sanitized name, ...)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a full output path from a raw name
    Path {
        /// Raw title or metadata name (any bytes the OS passes through)
        name: OsString,

        /// Output directory the file is placed in
        #[arg(short, long, value_name = "DIR")]
        prefix: Option<String>,

        /// File extension, including its leading dot
        #[arg(short, long, value_name = "EXT")]
        ext: Option<String>,

        /// Replace everything outside printable 7-bit ASCII
        #[arg(long)]
        ascii_only: bool,

        /// Create the parent directories of the generated path
        #[arg(long)]
        create_dirs: bool,
    },

    /// Replace filesystem-illegal characters in a name
    Sanitize {
        /// Raw name (any bytes the OS passes through)
        name: OsString,

        /// Replace everything outside printable 7-bit ASCII
        #[arg(long)]
        ascii_only: bool,
    },

    /// Find the longest UTF-8 safe prefix within a byte budget
    Boundary {
        /// Text to measure
        text: String,

        /// Byte budget
        budget: usize,
    },

    /// Strip leading and trailing whitespace
    Trim {
        /// Text to trim
        text: String,
    },

    /// Create the configured output directory layout
    InitDirs {
        /// Override the configured layout root
        #[arg(long, value_name = "DIR")]
        root: Option<String>,
    },
}
