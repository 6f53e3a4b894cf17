//! CLI entrypoint for dumppath
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use dumppath_application::{
    GenerateOutputPathError, GenerateOutputPathInput, GenerateOutputPathUseCase,
    PrepareOutputDirectoriesError, PrepareOutputDirectoriesUseCase,
};
use dumppath_domain::{
    OutputFormat, Severity, has_errors, hex_string, sanitize_filename, trim_whitespace,
    utf8_truncation_boundary,
};
use dumppath_infrastructure::{ConfigLoader, FileConfig, LocalDirectoryTree};
use dumppath_presentation::{Cli, Command, ConsoleFormatter, OutputFormatter, Report};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status when a name is well formed but cannot be made to fit the limits.
const EXIT_DOES_NOT_FIT: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };
    debug!("Loaded configuration: {:?}", config);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("Configuration is invalid ({} issue(s))", issues.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        bail!("No command given. Run with --help to see the available commands.");
    };

    let report = match run(command, &config) {
        Ok(report) => report,
        Err(e) if does_not_fit(&e) => {
            warn!("Name cannot be made to fit; shorten the prefix or raise [limits]");
            eprintln!("Error: {e}");
            std::process::exit(EXIT_DOES_NOT_FIT);
        }
        Err(e) => return Err(e),
    };

    print!("{}", render(&report, format, cli.quiet));

    Ok(())
}

/// Whether a command failed only because the path exceeded its limits.
fn does_not_fit(err: &anyhow::Error) -> bool {
    if let Some(GenerateOutputPathError::Path(e)) = err.downcast_ref::<GenerateOutputPathError>() {
        return e.is_length_error();
    }
    if let Some(PrepareOutputDirectoriesError::Path(e)) =
        err.downcast_ref::<PrepareOutputDirectoriesError>()
    {
        return e.is_length_error();
    }
    false
}

fn render(report: &Report, format: OutputFormat, quiet: bool) -> String {
    if quiet {
        return format!("{}\n", report.primary_value());
    }

    let formatter = ConsoleFormatter;
    match format {
        OutputFormat::Plain => formatter.format(report),
        OutputFormat::Json => format!("{}\n", formatter.format_json(report)),
    }
}

fn run(command: Command, config: &FileConfig) -> Result<Report> {
    let mut naming = config.to_naming_config();

    let report = match command {
        Command::Path {
            name,
            prefix,
            ext,
            ascii_only,
            create_dirs,
        } => {
            if ascii_only {
                naming = naming.with_ascii_only(true);
            }

            let mut input = GenerateOutputPathInput::new(name.as_encoded_bytes());
            if let Some(prefix) = prefix {
                input = input.with_prefix(prefix);
            }
            if let Some(ext) = ext {
                input = input.with_extension(ext);
            }

            let output = GenerateOutputPathUseCase::new(naming).execute(&input)?;

            if create_dirs {
                let tree = Arc::new(LocalDirectoryTree::new());
                PrepareOutputDirectoriesUseCase::new(tree, naming).ensure_parents(&output.path)?;
                info!("Created parent directories for {}", output.path);
            }

            Report::from_path_output(&name.to_string_lossy(), output)
        }
        Command::Sanitize { name, ascii_only } => {
            let raw = name.as_encoded_bytes();
            let output = sanitize_filename(raw, ascii_only || naming.ascii_only);
            Report::Sanitize {
                input: name.to_string_lossy().into_owned(),
                input_hex: hex_string(raw, false),
                output,
            }
        }
        Command::Boundary { text, budget } => {
            let boundary = utf8_truncation_boundary(text.as_bytes(), budget);
            let prefix = text.get(..boundary).unwrap_or_default().to_string();
            Report::Boundary {
                input: text,
                budget,
                boundary,
                prefix,
            }
        }
        Command::Trim { text } => {
            let output = trim_whitespace(&text).to_string();
            Report::Trim {
                input: text,
                output,
            }
        }
        Command::InitDirs { root } => {
            let mut layout = config.layout.to_output_layout();
            if let Some(root) = root {
                layout.root = root;
            }

            let tree = Arc::new(LocalDirectoryTree::new());
            let created = PrepareOutputDirectoriesUseCase::new(tree, naming).execute(&layout)?;
            Report::InitDirs { created }
        }
    };

    Ok(report)
}
