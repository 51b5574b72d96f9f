mod command;
mod error;
mod session;

use balance_challenge::{Challenge, Level};
use balance_core::{primitive::DEFAULT_MAX_INTEGER, EngineConfigBuilder};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use rustyline::{error::ReadlineError, DefaultEditor};
use session::{Outcome, Session};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Solve linear equations by applying the same operation to both sides of a balance scale.
#[derive(Parser, Debug)]
#[command(name = "balance", version)]
struct Args {
    /// The level to generate challenges for
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    level: u8,

    /// Seed for the challenge generators, for reproducible sessions
    #[arg(short, long)]
    seed: Option<u64>,

    /// The largest numerator or denominator a term may reach before an operation is undone
    #[arg(long, default_value_t = DEFAULT_MAX_INTEGER)]
    max_integer: u64,

    /// Allow multiplying both sides by zero
    #[arg(long)]
    allow_times_zero: bool,

    /// Start with a debug challenge: a_num,a_den,b_num,b_den,m_num,m_den,n_num,n_den,x
    #[arg(short, long, allow_hyphen_values = true)]
    challenge: Option<String>,
}

/// Parses and runs one line of input, printing the output or the error. Returns false if the
/// host should stop.
fn run_line(session: &mut Session, input: &str) -> bool {
    let result = command::parse(input).and_then(|command| match command {
        Some(command) => session.execute(command),
        None => Ok(Outcome::Continue(String::new())),
    });

    match result {
        Ok(Outcome::Continue(output)) => print!("{}", output),
        Ok(Outcome::Quit) => return false,
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                eprintln!("{}", io_err);
            }
        },
    }
    true
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = EngineConfigBuilder::new()
        .max_integer(args.max_integer)
        .allow_times_zero(args.allow_times_zero)
        .build();
    let rng = args.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let level = Level::from_number(args.level).unwrap_or(Level::One);

    let mut session = match Session::new(level, rng, config) {
        Ok(session) => session,
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("session", "") {
                eprintln!("{}", io_err);
            }
            return ExitCode::FAILURE;
        },
    };

    if let Some(text) = &args.challenge {
        let loaded = Challenge::from_debug_str(text)
            .and_then(|challenge| session.load(challenge, vec![0..text.len()]));
        if let Err(err) = loaded {
            if let Err(io_err) = err.report_to_stderr("--challenge", text) {
                eprintln!("{}", io_err);
            }
            return ExitCode::FAILURE;
        }
    }

    print!("{}", session.banner());

    if !io::stdin().is_terminal() {
        // read commands from stdin, one per line
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            };
            if !run_line(&mut session, &line) {
                break;
            }
        }
        return ExitCode::SUCCESS;
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<bool, ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(true);
        }

        rl.add_history_entry(&input)?;
        Ok(run_line(session, &input))
    }

    loop {
        match process_line(&mut rl, &mut session) {
            Ok(true) => (),
            Ok(false) => break,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}
