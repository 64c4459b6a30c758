use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tapcalc::calculator::parse_keys;
use tapcalc::config::Config;
use tapcalc::session::Session;
use tracing_subscriber::EnvFilter;

/// Two-operand keypad calculator.
///
/// Keys: digits, `.`, `+ - * x /`, `%`, `=`, `sqrt`, `neg`, `del`, `c`/`ac`.
/// With no KEYS, reads one key script per line from stdin.
#[derive(Debug, Parser)]
#[command(name = "tapcalc", version, about)]
struct Cli {
    /// Key script to replay from an empty calculator
    keys: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum characters per operand and result
    #[arg(long)]
    max_length: Option<usize>,

    /// Start over on the next digit after a division-by-zero error
    #[arg(long)]
    guard_error: bool,

    /// Print the state snapshot as JSON instead of the display text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tapcalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(max_length) = cli.max_length {
        config.max_length = max_length;
    }
    if cli.guard_error {
        config.guard_error = true;
    }
    config.validate()?;

    let mut session = Session::new(config.reducer());
    let mut out = io::stdout().lock();

    if !cli.keys.is_empty() {
        let script = cli.keys.join(" ");
        let actions = parse_keys(&script).context("Invalid key script")?;
        session.dispatch_all(actions);
        return print_session(&mut out, &session, cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match parse_keys(&line) {
            Ok(actions) => {
                session.dispatch_all(actions);
                print_session(&mut out, &session, cli.json)?;
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

fn print_session(out: &mut impl Write, session: &Session, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(session.state())?)?;
    } else {
        writeln!(out, "{}", session.display().text)?;
    }
    out.flush()?;
    Ok(())
}
