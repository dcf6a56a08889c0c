//! `tlist`: build and inspect number/string linked lists from the terminal.
//!
//! # Enabling Debug Logging
//!
//! Pass `--debug`, or set the `TLIST_LOG` environment variable:
//!
//! ```bash
//! TLIST_LOG=debug tlist display a b c
//! ```

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use typed_list::session::{describe_optional, write_list};
use typed_list::{DisplayFormat, LinkedList, Optional, TlistConfig, Value};

mod repl;
mod report;

#[derive(Parser, Debug)]
#[command(name = "tlist", version, about = "Build and inspect number/string linked lists")]
struct Cli {
    /// Enable verbose debug logging (or set TLIST_LOG=debug)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Config file to use instead of ./tlist.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for lists (overrides the config file)
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a list from the values and display it
    Display {
        /// Values in order; numbers and strings only
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Build a list from the values and print its head
    Head {
        /// Values in order; numbers and strings only
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Wrap an optional value and report whether it is present
    Optional {
        /// The value; omit it for an empty optional
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Print a string's length or a number rounded
    Transform {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Start an interactive session (reads commands from stdin when piped)
    Repl,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    Lines,
    Inline,
    Json,
}

impl From<Format> for DisplayFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Lines => DisplayFormat::Lines,
            Format::Inline => DisplayFormat::Inline,
            Format::Json => DisplayFormat::Json,
        }
    }
}

fn init_tracing(debug: bool) {
    // --debug wins over TLIST_LOG, which defaults to "warn"
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TLIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli) {
        report::error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.display.format = Some(format.into());
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Display { values } => run_display(&values, &config),
        Command::Head { values } => {
            let list = build_list(&values)?;
            println!("{}", list.head());
            Ok(())
        }
        Command::Optional { value } => run_optional(value.as_deref(), &config),
        Command::Transform { value } => {
            let value = parse_value(&value)?;
            println!("{}", Value::Number(value.transform()));
            Ok(())
        }
        Command::Repl => repl::run(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TlistConfig> {
    match path {
        Some(path) => TlistConfig::load_from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?
            .ok_or_else(|| anyhow!("config file {} not found", path.display())),
        None => TlistConfig::load_or_default().context("failed to load tlist.toml"),
    }
}

fn parse_value(token: &str) -> anyhow::Result<Value> {
    Value::parse(token).with_context(|| format!("invalid value `{token}`"))
}

fn build_list(values: &[String]) -> anyhow::Result<LinkedList<Value>> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| anyhow!("at least one value is required"))?;
    let mut list = LinkedList::new(parse_value(first)?);
    for token in rest {
        list.add(parse_value(token)?);
    }
    debug!(len = values.len(), "list built");
    Ok(list)
}

fn run_display(values: &[String], config: &TlistConfig) -> anyhow::Result<()> {
    let list = build_list(values)?;
    match config.display.format() {
        DisplayFormat::Lines => list.display()?,
        format => {
            let stdout = io::stdout();
            write_list(&list, format, config.display.separator(), &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn run_optional(value: Option<&str>, config: &TlistConfig) -> anyhow::Result<()> {
    let optional = Optional::new(value.map(parse_value).transpose()?);
    if config.display.format() == DisplayFormat::Json {
        println!("{}", serde_json::to_string(&optional)?);
    } else {
        println!("{}", describe_optional(&optional));
        println!("present: {}", optional.has_value());
    }
    Ok(())
}
