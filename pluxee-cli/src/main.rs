use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pluxee_ingest::{open_statement, ParserConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

#[derive(Parser, Debug)]
#[command(name = "pluxee", version, about = "Convert Pluxee CSV exports into normalized statements")]
struct Cli {
    /// Config file (default: ~/.pluxee/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a Pluxee CSV export and print the statement
    Convert {
        /// Path to the export (first line is the header)
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Remove "(Transactie ...)" suffixes from memos
        #[arg(long)]
        strip_transaction_id: bool,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init {
        /// Where to write it (default: --config, then ~/.pluxee/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the effective config
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            file,
            format,
            strip_transaction_id,
        } => {
            let mut cfg = config::load_config(cli.config.as_deref())?;
            if strip_transaction_id {
                cfg.parser.strip_transaction_id = true;
            }
            print!("{}", convert(&file, format, cfg.parser)?);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init { path } => {
                config::init_config(path.as_deref().or(cli.config.as_deref()))?
            }
            ConfigCommand::Show => {
                let cfg = config::load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Parse `file` and render it in `format`.
fn convert(file: &Path, format: OutputFormat, parser_cfg: ParserConfig) -> Result<String> {
    if !file.exists() {
        bail!("CSV not found: {}", file.display());
    }

    let parser = open_statement(file, parser_cfg)
        .with_context(|| format!("opening {}", file.display()))?;
    tracing::debug!(config = ?parser.config(), "parser ready");
    let statement = parser
        .parse()
        .with_context(|| format!("parsing {}", file.display()))?;

    Ok(match format {
        OutputFormat::Text => render::render_text(&statement),
        OutputFormat::Json => format!("{}\n", render::render_json(&statement)?),
    })
}
