//! Numberle - CLI
//!
//! Guess-the-equation game with TUI and plain CLI modes, plus equation
//! validation tooling.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use numberle::{
    commands::{print_corpus_report, run_check, run_simple, verify_corpus},
    core::Equation,
    equations::{EQUATIONS, loader},
    game::MAX_ATTEMPTS,
};

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Numberle: guess the hidden 7-character arithmetic equation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Equation list: 'builtin' (default) or path to a corpus file
    #[arg(short = 'e', long, global = true, default_value = "builtin")]
    equations: String,

    /// Fixed secret equation (default: random pick from the equation list)
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Attempts allowed per game
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Validate a candidate equation
    Check {
        /// The equation to validate
        equation: String,
    },

    /// Batch-validate an equations file for use as a secret source
    Corpus {
        /// Path to the equations file
        path: String,
    },
}

/// Load the secret pool based on the -e flag
///
/// "builtin" uses the embedded corpus; anything else is a file path.
fn load_equation_pool(equations_mode: &str) -> Result<Vec<Equation>> {
    let pool = match equations_mode {
        "builtin" => loader::equations_from_slice(EQUATIONS),
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to read equation list {path}"))?,
    };

    if pool.is_empty() {
        return Err(anyhow!(
            "equation list '{equations_mode}' contains no valid equations"
        ));
    }

    Ok(pool)
}

/// Resolve the secret for a new game: --secret wins, otherwise random pick
fn resolve_secret(secret_flag: Option<&str>, pool: &[Equation]) -> Result<Equation> {
    match secret_flag {
        Some(text) => {
            Equation::new(text).map_err(|outcome| anyhow!("invalid --secret '{text}': {outcome}"))
        }
        None => loader::pick_secret(pool)
            .cloned()
            .ok_or_else(|| anyhow!("equation pool is empty")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let pool = load_equation_pool(&cli.equations)?;
            let secret = resolve_secret(cli.secret.as_deref(), &pool)?;
            run_play_command(pool, secret, cli.attempts)
        }
        Commands::Simple => {
            let pool = load_equation_pool(&cli.equations)?;
            let secret = resolve_secret(cli.secret.as_deref(), &pool)?;
            run_simple(&pool, secret, cli.attempts).map_err(|e| anyhow!(e))
        }
        Commands::Check { equation } => {
            if run_check(&equation).is_valid() {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
        Commands::Corpus { path } => {
            let report = verify_corpus(&path)
                .with_context(|| format!("failed to read equation list {path}"))?;
            print_corpus_report(&report);
            if report.failures.is_empty() {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn run_play_command(pool: Vec<Equation>, secret: Equation, attempts: usize) -> Result<()> {
    use numberle::interactive::{App, run_tui};

    let app = App::new(pool, secret, attempts);
    run_tui(app)
}
