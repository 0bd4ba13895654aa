//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    with_subcommands(
        Command::new("bigfive")
            .about("Big Five personality inventory")
            .subcommand_required(false)
            .arg(
                Arg::new("db")
                    .long("db")
                    .help("Data directory (default: .bigfive)")
                    .global(true),
            )
            .arg(
                Arg::new("memory")
                    .long("memory")
                    .help("Keep accounts and results in memory only, no disk")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("db")
                    .global(true),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("JSON output mode")
                    .action(ArgAction::SetTrue)
                    .global(true),
            ),
    )
}

/// Build a command tree for REPL mode (no global flags).
pub fn build_repl_cmd() -> Command {
    with_subcommands(
        Command::new("repl")
            .multicall(true)
            .subcommand_required(true),
    )
}

fn with_subcommands(cmd: Command) -> Command {
    cmd.subcommand(build_questions())
        .subcommand(build_traits())
        .subcommand(build_take())
        .subcommand(build_score())
        .subcommand(build_signup())
        .subcommand(build_login())
        .subcommand(Command::new("logout").about("Sign out"))
        .subcommand(Command::new("profile").about("Show the signed-in user and their results"))
        .subcommand(Command::new("history").about("List saved results, newest first"))
        .subcommand(
            Command::new("show")
                .about("Show a saved result")
                .arg(Arg::new("id").required(true).help("Result id")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a saved result")
                .arg(Arg::new("id").required(true).help("Result id")),
        )
        .subcommand(
            Command::new("rename")
                .about("Change your display name")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .num_args(1..)
                        .help("New display name"),
                ),
        )
}

// =========================================================================
// Test
// =========================================================================

fn build_questions() -> Command {
    Command::new("questions")
        .about("List the inventory questions")
        .arg(
            Arg::new("page")
                .long("page")
                .short('p')
                .value_parser(clap::value_parser!(u8).range(1..=5))
                .help("Only this page (1-5)"),
        )
}

fn build_traits() -> Command {
    Command::new("traits").about("Describe the five traits")
}

fn build_take() -> Command {
    Command::new("take").about("Take the test interactively")
}

fn build_score() -> Command {
    Command::new("score")
        .about("Score 50 ratings given as digits 1-5")
        .arg(
            Arg::new("ratings")
                .required(true)
                .num_args(1..)
                .help("Ratings in question order; spaces and commas are ignored"),
        )
        .arg(
            Arg::new("no-save")
                .long("no-save")
                .help("Do not save the result")
                .action(ArgAction::SetTrue),
        )
}

// =========================================================================
// Accounts
// =========================================================================

fn build_signup() -> Command {
    Command::new("signup")
        .about("Create an account and sign in")
        .arg(Arg::new("email").long("email").short('e').help("Email address"))
        .arg(
            Arg::new("password")
                .long("password")
                .help("Password (prompted when omitted)"),
        )
        .arg(
            Arg::new("confirm")
                .long("confirm")
                .help("Password confirmation (defaults to --password)"),
        )
}

fn build_login() -> Command {
    Command::new("login")
        .about("Sign in")
        .arg(Arg::new("email").long("email").short('e').help("Email address"))
        .arg(
            Arg::new("password")
                .long("password")
                .help("Password (prompted when omitted)"),
        )
}
