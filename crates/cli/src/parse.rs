//! ArgMatches → CliAction/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into the action to run:
//! - Subcommands → `CliAction`
//! - REPL meta-commands → `MetaCommand`

use bigfive_core::{CompleteAnswers, PageNumber, Rating, RecordId};
use clap::ArgMatches;

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Print questions, one page or all.
    Questions { page: Option<PageNumber> },
    /// Print the trait reference.
    Traits,
    /// Run the interactive test.
    Take,
    /// Score ratings given on the command line.
    Score { answers: CompleteAnswers, save: bool },
    /// Create an account; missing fields are prompted.
    SignUp {
        email: Option<String>,
        password: Option<String>,
        confirm: Option<String>,
    },
    /// Sign in; missing fields are prompted.
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    Logout,
    Profile,
    History,
    Show { id: RecordId },
    Delete { id: RecordId },
    Rename { name: String },
}

/// REPL meta-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Quit,
    Clear,
    Help { command: Option<String> },
}

/// Check if a line is a REPL meta-command.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => Some(MetaCommand::Help {
            command: parts.next().map(str::to_string),
        }),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let string = |name: &str| sub.get_one::<String>(name).cloned();

    match sub_name {
        "questions" => {
            let page = match sub.get_one::<u8>("page") {
                Some(p) => Some(PageNumber::new(*p).map_err(|e| e.to_string())?),
                None => None,
            };
            Ok(CliAction::Questions { page })
        }
        "traits" => Ok(CliAction::Traits),
        "take" => Ok(CliAction::Take),
        "score" => {
            let parts: Vec<String> = sub
                .get_many::<String>("ratings")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            Ok(CliAction::Score {
                answers: parse_ratings(&parts.join(" "))?,
                save: !sub.get_flag("no-save"),
            })
        }
        "signup" => Ok(CliAction::SignUp {
            email: string("email"),
            password: string("password"),
            confirm: string("confirm"),
        }),
        "login" => Ok(CliAction::Login {
            email: string("email"),
            password: string("password"),
        }),
        "logout" => Ok(CliAction::Logout),
        "profile" => Ok(CliAction::Profile),
        "history" => Ok(CliAction::History),
        "show" => Ok(CliAction::Show {
            id: RecordId::new(string("id").unwrap_or_default()),
        }),
        "delete" => Ok(CliAction::Delete {
            id: RecordId::new(string("id").unwrap_or_default()),
        }),
        "rename" => {
            let name: Vec<String> = sub
                .get_many::<String>("name")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            Ok(CliAction::Rename {
                name: name.join(" "),
            })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Parse 50 ratings written as digits, e.g. `3333344444...`.
///
/// Whitespace and commas between digits are ignored.
pub fn parse_ratings(input: &str) -> Result<CompleteAnswers, String> {
    let ratings = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Rating::from_digit(c).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    CompleteAnswers::from_ratings(&ratings).map_err(|e| e.to_string())
}
