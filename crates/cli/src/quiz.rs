//! Interactive test: one prompt per page of ten questions.
//!
//! Page input is ten ratings (`1`-`5`, `.` for unset; spaces and commas
//! ignored), `<` for the previous page, `q` to quit. An empty line keeps the
//! page's current selections and moves on.

use std::io::{self, BufRead, Write};

use bigfive_core::{Rating, RecordId, QUESTIONS_PER_PAGE};
use bigfive_executor::{Action, ResultsReport, ResultsScreen, Route, Services, TestScreen};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::format_page;

/// Where interactive input comes from.
pub trait LineSource {
    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.readline(prompt) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                eprintln!("(error) {}", e);
                None
            }
        }
    }
}

/// Lines from any buffered reader; prompts are not echoed.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Lines<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Terminal input via rustyline, falling back to plain stdin.
pub struct TerminalInput {
    editor: Option<DefaultEditor>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            editor: DefaultEditor::new().ok(),
        }
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match &mut self.editor {
            Some(editor) => editor.read_line(prompt),
            None => {
                print!("{}", prompt);
                io::stdout().flush().ok()?;
                Lines::new(io::stdin().lock()).read_line(prompt)
            }
        }
    }
}

/// One line of page input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInput {
    /// Replace the page's selections
    Ratings([Option<Rating>; QUESTIONS_PER_PAGE]),
    /// Keep selections and go on
    Keep,
    Previous,
    Quit,
}

/// Parse one line of page input.
pub fn parse_page_input(line: &str) -> Result<PageInput, String> {
    let line = line.trim();
    match line {
        "" => return Ok(PageInput::Keep),
        "<" => return Ok(PageInput::Previous),
        "q" | "quit" => return Ok(PageInput::Quit),
        _ => {}
    }

    let slots = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '.' => Ok(None),
            _ => Rating::from_digit(c).map(Some).map_err(|e| e.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if slots.len() != QUESTIONS_PER_PAGE {
        return Err(format!(
            "Enter {} ratings (1-5, '.' to skip), '<' to go back or 'q' to quit.",
            QUESTIONS_PER_PAGE
        ));
    }
    let mut ratings = [None; QUESTIONS_PER_PAGE];
    ratings.copy_from_slice(&slots);
    Ok(PageInput::Ratings(ratings))
}

/// How an interactive run ended.
#[derive(Debug)]
pub enum TakeOutcome {
    Finished {
        report: ResultsReport,
        saved: Option<RecordId>,
    },
    Abandoned,
}

/// Run the test from page one to the results.
pub fn run_take(
    services: &Services,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> io::Result<TakeOutcome> {
    let mut route = Route::start_test();
    loop {
        if let Route::Results { params } = &route {
            let mut results = ResultsScreen::new(params.clone());
            let report = results.render(services);
            return Ok(TakeOutcome::Finished {
                report,
                saved: results.saved_record().cloned(),
            });
        }
        let Some(mut screen) = TestScreen::from_route(&route) else {
            return Ok(TakeOutcome::Abandoned);
        };

        route = loop {
            writeln!(out, "{}", format_page(&screen.view()))?;
            let prompt = format!("page {}> ", screen.page());
            let Some(line) = input.read_line(&prompt) else {
                return Ok(TakeOutcome::Abandoned);
            };
            let attempt = match parse_page_input(&line) {
                Err(msg) => {
                    writeln!(out, "{}", msg)?;
                    continue;
                }
                Ok(PageInput::Quit) => return Ok(TakeOutcome::Abandoned),
                Ok(PageInput::Previous) => screen.previous(),
                Ok(PageInput::Keep) => screen.next(),
                Ok(PageInput::Ratings(ratings)) => ratings
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, rating)| match rating {
                        Some(r) => screen.select(i, *r),
                        None => screen.clear(i),
                    })
                    .and_then(|()| screen.next()),
            };
            match attempt {
                Ok(next) => break next,
                Err(e) => writeln!(out, "{}", e.notice(Action::Answer))?,
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn script(lines: &[&str]) -> Lines<Cursor<Vec<u8>>> {
        Lines::new(Cursor::new(lines.join("\n").into_bytes()))
    }

    #[test]
    fn page_input_forms() {
        assert_eq!(parse_page_input(""), Ok(PageInput::Keep));
        assert_eq!(parse_page_input(" < "), Ok(PageInput::Previous));
        assert_eq!(parse_page_input("q"), Ok(PageInput::Quit));

        let three = Rating::new(3).unwrap();
        assert_eq!(
            parse_page_input("3 3 3 3 3 3 3 3 3 ."),
            Ok(PageInput::Ratings([
                Some(three),
                Some(three),
                Some(three),
                Some(three),
                Some(three),
                Some(three),
                Some(three),
                Some(three),
                Some(three),
                None
            ]))
        );
        assert!(parse_page_input("333").is_err());
        assert!(parse_page_input("3333333336").is_err());
    }

    #[test]
    fn full_run_scores_and_saves_for_signed_in_user() {
        let services = Services::in_memory();
        let user = services
            .identity
            .sign_up("ada@example.com", "secret1")
            .unwrap();
        let mut input = script(&["5555555555"; 5]);
        let mut out = Vec::new();

        match run_take(&services, &mut input, &mut out).unwrap() {
            TakeOutcome::Finished { report, saved } => {
                assert_eq!(report.scores.N, 80);
                let history = services.store.list(&user.uid).unwrap();
                assert_eq!(history.len(), 1);
                assert_eq!(saved, Some(history[0].id.clone()));
            }
            TakeOutcome::Abandoned => panic!("run was abandoned"),
        }
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Page 5/5"));
    }

    #[test]
    fn incomplete_page_is_reported_and_retried() {
        let services = Services::in_memory();
        let mut input = script(&[
            "333333333.",
            "3333333333",
            "<",
            "",
            "3333333333",
            "3333333333",
            "3333333333",
            "3333333333",
        ]);
        let mut out = Vec::new();
        let outcome = run_take(&services, &mut input, &mut out).unwrap();
        assert!(matches!(outcome, TakeOutcome::Finished { saved: None, .. }));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Please answer all questions before proceeding."));
    }

    #[test]
    fn dot_clears_a_revisited_answer() {
        let services = Services::in_memory();
        let mut input = script(&[
            "4444444444",
            "<",
            "444444444.",
            "",
            "4444444444",
            "4444444444",
            "4444444444",
            "4444444444",
            "4444444444",
        ]);
        let mut out = Vec::new();
        let outcome = run_take(&services, &mut input, &mut out).unwrap();
        assert!(matches!(outcome, TakeOutcome::Finished { .. }));
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(
            shown
                .matches("Please answer all questions before proceeding.")
                .count(),
            2
        );
    }

    #[test]
    fn quit_and_end_of_input_abandon() {
        let services = Services::in_memory();
        let mut out = Vec::new();
        let outcome = run_take(&services, &mut script(&["q"]), &mut out).unwrap();
        assert!(matches!(outcome, TakeOutcome::Abandoned));
        let outcome = run_take(&services, &mut script(&["3333333333"]), &mut out).unwrap();
        assert!(matches!(outcome, TakeOutcome::Abandoned));
    }
}
