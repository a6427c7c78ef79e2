use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use tutorbook_core::AddressBook;
use tutorbook_parser::{CommandParser, ParserConfig};

/// Output format for parsed commands.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "tutorbook")]
#[command(about = "Parse and replay tutorbook contact commands")]
struct Cli {
    /// Path to a parser configuration YAML file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Validate lessons against this time instead of the system clock
    /// (e.g. 2025-04-01T08:00:00).
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<NaiveDateTime>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one command line and print the resulting command.
    Parse(ParseArgs),
    /// Read command lines from stdin and apply them to a contact list.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// The command line, e.g. "edit 1 n/John Doe".
    line: String,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// JSON file with the starting contact list (default: empty list).
    #[arg(long)]
    contacts: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = build_parser(cli.config.as_ref(), cli.now).and_then(|parser| match cli.command {
        Command::Parse(args) => run_parse(&parser, args),
        Command::Run(args) => run_commands(&parser, args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| format!("invalid date-time '{raw}', expected e.g. 2025-04-01T08:00:00"))
}

fn build_parser(
    config_path: Option<&PathBuf>,
    now: Option<NaiveDateTime>,
) -> Result<CommandParser, String> {
    let mut config = match config_path {
        Some(path) => ParserConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display()))?,
        None => ParserConfig::default(),
    };
    if let Some(now) = now {
        config = config.with_fixed_time(now);
    }
    debug!(mode = ?config.clock.mode, "Building command parser");

    let clock = config.clock().map_err(|e| e.to_string())?;
    Ok(CommandParser::new(clock))
}

fn run_parse(parser: &CommandParser, args: ParseArgs) -> Result<(), String> {
    let command = parser.parse_command(&args.line).map_err(|e| e.to_string())?;
    let output = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&command)
            .map_err(|e| format!("Failed to serialize command: {e}"))?,
        CliOutputFormat::Yaml => serde_yaml::to_string(&command)
            .map_err(|e| format!("Failed to serialize command: {e}"))?,
    };
    println!("{output}");
    Ok(())
}

fn run_commands(parser: &CommandParser, args: RunArgs) -> Result<(), String> {
    let mut book = match &args.contacts {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
            serde_json::from_str::<AddressBook>(&raw)
                .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))?
        }
        None => AddressBook::default(),
    };

    let mut applied = 0usize;
    let mut failed = 0usize;
    let stdin = std::io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.map_err(|err| format!("Failed to read stdin: {err}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let outcome = parser
            .parse_command(trimmed)
            .map_err(|e| e.to_string())
            .and_then(|command| book.execute(&command).map_err(|e| e.to_string()));
        match outcome {
            Ok(feedback) => {
                applied += 1;
                eprintln!("{feedback}");
            }
            Err(message) => {
                failed += 1;
                eprintln!("line {}: {message}", number + 1);
            }
        }
    }

    info!(applied, failed, "Finished replaying commands");
    eprintln!("Applied {applied} command(s), {failed} failed.");

    let json = serde_json::to_string_pretty(&book)
        .map_err(|e| format!("Failed to serialize contacts: {e}"))?;
    println!("{json}");
    Ok(())
}
