//! Vanguard -- an army engagement-order engine.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr; set `RUST_LOG` to change verbosity.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;
use vanguard::engine::Engine;
use vanguard::protocol::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vanguard=info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    tracing::info!("vanguard ready");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hello => engine.handle_hello(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::Armies { tokens } => {
                if let Err(e) = engine.set_armies(&tokens) {
                    engine.handle_error(&e, &mut out)?;
                }
            }
            Command::Add { tokens } => {
                if let Err(e) = engine.add_armies(&tokens) {
                    engine.handle_error(&e, &mut out)?;
                }
            }
            Command::Clear => engine.clear(),
            Command::Demo => {
                if let Err(e) = engine.load_demo() {
                    engine.handle_error(&e, &mut out)?;
                }
            }
            Command::Go => engine.handle_go(&mut out)?,
            Command::Score { tokens } => engine.handle_score(&tokens, &mut out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
