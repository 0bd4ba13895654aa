//! Session wrapper around the shared services.
//!
//! Executes parsed actions against one [`Services`] handle. Every command
//! that needs the signed-in user goes through a short-lived
//! [`ProfileScreen`], so the CLI sees the same state the profile would.

use std::io;

use bigfive_core::{score, AnswerVector, PageNumber, RecordId, TraitDescription, DESCRIPTIONS};
use bigfive_engine::{StoredTestResult, UserRef};
use bigfive_executor::{
    Action, LoginForm, Notice, PageView, ProfileScreen, ProfileState, ResultsParams,
    ResultsReport, ResultsScreen, Route, Services, SignUpForm, TestScreen,
};
use serde::Serialize;

use crate::parse::CliAction;
use crate::quiz::{run_take, LineSource, TakeOutcome};

/// What a successful command produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    Questions {
        pages: Vec<PageView>,
    },
    Traits {
        traits: Vec<TraitDescription>,
    },
    Results {
        report: ResultsReport,
        saved: Option<RecordId>,
    },
    SignedIn {
        user: UserRef,
    },
    SignedOut,
    Profile {
        profile: ProfileState,
    },
    History {
        tests: Vec<StoredTestResult>,
    },
    Deleted {
        id: RecordId,
    },
    Renamed {
        name: String,
    },
    /// The user backed out of a prompt.
    Aborted,
}

/// Wraps the services and executes actions.
pub struct SessionState {
    services: Services,
}

impl SessionState {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// REPL prompt, showing the signed-in email.
    pub fn prompt(&self) -> String {
        match self.services.identity.current_user() {
            Some(UserRef {
                email: Some(email), ..
            }) => format!("bigfive({})> ", email),
            Some(_) => "bigfive(signed in)> ".to_string(),
            None => "bigfive> ".to_string(),
        }
    }

    /// Execute one action, reading any prompts from `input`.
    pub fn execute(
        &mut self,
        action: CliAction,
        input: &mut dyn LineSource,
    ) -> Result<Output, Notice> {
        let services = &self.services;
        match action {
            CliAction::Questions { page } => {
                let pages = match page {
                    Some(p) => vec![page_view(p)],
                    None => (1..=bigfive_core::PAGE_COUNT)
                        .filter_map(|n| PageNumber::new(n).ok())
                        .map(page_view)
                        .collect(),
                };
                Ok(Output::Questions { pages })
            }
            CliAction::Traits => Ok(Output::Traits {
                traits: DESCRIPTIONS.to_vec(),
            }),
            CliAction::Take => {
                let outcome =
                    run_take(services, input, &mut io::stdout()).map_err(io_notice)?;
                Ok(match outcome {
                    TakeOutcome::Finished { report, saved } => Output::Results { report, saved },
                    TakeOutcome::Abandoned => Output::Aborted,
                })
            }
            CliAction::Score { answers, save } => {
                if save {
                    let mut results = ResultsScreen::new(ResultsParams::Answers(answers));
                    let report = results.render(services);
                    Ok(Output::Results {
                        report,
                        saved: results.saved_record().cloned(),
                    })
                } else {
                    Ok(Output::Results {
                        report: ResultsReport::new(score(&answers)),
                        saved: None,
                    })
                }
            }
            CliAction::SignUp {
                email,
                password,
                confirm,
            } => {
                let Some(email) = email.or_else(|| input.read_line("Email: ")) else {
                    return Ok(Output::Aborted);
                };
                let (password, confirm) = match (password, confirm) {
                    (Some(p), Some(c)) => (p, c),
                    (Some(p), None) => (p.clone(), p),
                    (None, confirm) => {
                        let Some(p) = input.read_line("Password: ") else {
                            return Ok(Output::Aborted);
                        };
                        let Some(c) = confirm.or_else(|| input.read_line("Confirm password: "))
                        else {
                            return Ok(Output::Aborted);
                        };
                        (p, c)
                    }
                };
                SignUpForm::new(email, password, confirm)
                    .submit(services)
                    .map_err(|e| e.notice(Action::SignUp))?;
                signed_in(services)
            }
            CliAction::Login { email, password } => {
                let Some(email) = email.or_else(|| input.read_line("Email: ")) else {
                    return Ok(Output::Aborted);
                };
                let Some(password) = password.or_else(|| input.read_line("Password: ")) else {
                    return Ok(Output::Aborted);
                };
                LoginForm::new(email, password)
                    .submit(services)
                    .map_err(|e| e.notice(Action::SignIn))?;
                signed_in(services)
            }
            CliAction::Logout => {
                let profile = ProfileScreen::activate(services);
                profile.logout().map_err(|e| e.notice(Action::SignOut))?;
                Ok(Output::SignedOut)
            }
            CliAction::Profile => {
                let profile = ProfileScreen::activate(services).snapshot();
                Ok(Output::Profile { profile })
            }
            CliAction::History => {
                let profile = ProfileScreen::activate(services).snapshot();
                if profile.user.is_none() {
                    return Err(not_signed_in());
                }
                Ok(Output::History {
                    tests: profile.history,
                })
            }
            CliAction::Show { id } => {
                let profile = ProfileScreen::activate(services);
                if profile.snapshot().user.is_none() {
                    return Err(not_signed_in());
                }
                match profile.open_result(&id) {
                    Some(Route::Results { params }) => {
                        let report = ResultsScreen::new(params).render(services);
                        Ok(Output::Results {
                            report,
                            saved: None,
                        })
                    }
                    _ => Err(Notice {
                        title: "Error",
                        message: format!("No saved result with id {}.", id),
                    }),
                }
            }
            CliAction::Delete { id } => {
                let profile = ProfileScreen::activate(services);
                profile
                    .delete_test(&id)
                    .map_err(|e| e.notice(Action::DeleteTest))?;
                Ok(Output::Deleted { id })
            }
            CliAction::Rename { name } => {
                let profile = ProfileScreen::activate(services);
                profile
                    .edit_display_name(&name)
                    .map_err(|e| e.notice(Action::EditName))?;
                let name = profile
                    .snapshot()
                    .user
                    .map(|u| u.display_name)
                    .unwrap_or_default();
                Ok(Output::Renamed { name })
            }
        }
    }
}

fn page_view(page: PageNumber) -> PageView {
    TestScreen::enter(page, AnswerVector::new()).view()
}

fn signed_in(services: &Services) -> Result<Output, Notice> {
    services
        .identity
        .current_user()
        .map(|user| Output::SignedIn { user })
        .ok_or_else(not_signed_in)
}

fn not_signed_in() -> Notice {
    Notice {
        title: "Error",
        message: "No user is signed in. Use `login` or `signup` first.".to_string(),
    }
}

fn io_notice(e: io::Error) -> Notice {
    Notice {
        title: "Error",
        message: e.to_string(),
    }
}
