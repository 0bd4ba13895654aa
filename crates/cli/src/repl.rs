//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history.
//! Pipe mode: read lines from stdin, execute each. Commands that prompt
//! (`take`, `login`, `signup`) read their answers from the following lines.

use std::io;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::build_repl_cmd;
use crate::format::{format_notice, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, MetaCommand};
use crate::quiz::{LineSource, Lines};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Could not start line editor: {}", e);
            return;
        }
    };

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!("Big Five inventory. Type `help` for commands, `take` to start the test.");

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help { command } => print_help(command.as_deref()),
                    }
                    continue;
                }

                execute_line(trimmed, state, mode, &mut rl);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut input = Lines::new(stdin.lock());
    let mut exit_code = 0;

    while let Some(line) = input.read_line("") {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(meta) = check_meta_command(trimmed) {
            match meta {
                MetaCommand::Quit => break,
                MetaCommand::Clear => {}
                MetaCommand::Help { command } => print_help(command.as_deref()),
            }
            continue;
        }
        if !execute_line(trimmed, state, mode, &mut input) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Parse and execute one command line. Returns true on success.
fn execute_line(
    line: &str,
    state: &mut SessionState,
    mode: OutputMode,
    input: &mut dyn LineSource,
) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };
    let action = match matches_to_action(&matches) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("(error) {}", e);
            return false;
        }
    };
    match state.execute(action, input) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Err(notice) => {
            eprintln!("{}", format_notice(&notice, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.bigfive_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        match build_repl_cmd().try_get_matches_from(vec![cmd, "--help"]) {
            Ok(_) => {}
            Err(e) => println!("{}", e),
        }
    } else {
        println!("Available commands:");
        println!("  questions [--page N]   List the questions");
        println!("  traits                 Describe the five traits");
        println!("  take                   Take the test");
        println!("  score <ratings>        Score 50 ratings (digits 1-5)");
        println!("  signup / login         Create an account / sign in");
        println!("  logout                 Sign out");
        println!("  profile                Show your account and results");
        println!("  history                List saved results");
        println!("  show <id>              Show a saved result");
        println!("  delete <id>            Delete a saved result");
        println!("  rename <name>          Change your display name");
        println!();
        println!("Meta-commands:");
        println!("  help [command]         Show help");
        println!("  clear                  Clear the screen");
        println!("  quit / exit            Exit REPL");
    }
}
