//! Big Five CLI: take the inventory and manage saved results from a terminal.
//!
//! Three modes:
//! - **Shell mode**: `bigfive [flags] COMMAND` — single command, exit
//! - **REPL mode**: `bigfive [flags]` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "score 333..." | bigfive` — line-by-line from stdin

mod commands;
mod format;
mod parse;
mod quiz;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use bigfive_executor::Services;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::build_cli;
use format::{format_notice, format_output, OutputMode};
use parse::matches_to_action;
use quiz::TerminalInput;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let services = match open_services(&matches) {
        Ok(services) => services,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    init_tracing(&services.config.log_level);

    let mut state = SessionState::new(services);

    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn open_services(matches: &clap::ArgMatches) -> Result<Services, String> {
    if matches.get_flag("memory") {
        return Ok(Services::in_memory());
    }
    let path = matches
        .get_one::<String>("db")
        .map(|s| s.as_str())
        .unwrap_or(".bigfive");
    Services::open(path).map_err(|e| format!("Failed to open data directory '{}': {}", path, e))
}

/// Log to stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    let action = match matches_to_action(matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    match state.execute(action, &mut TerminalInput::new()) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(notice) => {
            eprintln!("{}", format_notice(&notice, mode));
            1
        }
    }
}
