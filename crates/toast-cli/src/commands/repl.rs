//! Interactive login prompt.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::app::LoginApp;
use crate::output;
use toast_core::login::LoginRequest;

/// rustyline helper for the login form.
///
/// Suggests the last-known username while the username line is empty and
/// masks input while reading the password.
struct LoginHelper {
    suggestion: String,
    masking: bool,
}

impl Helper for LoginHelper {}

impl Completer for LoginHelper {
    type Candidate = String;
}

impl Hinter for LoginHelper {
    type Hint = String;

    fn hint(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        (!self.masking && line.is_empty()).then(|| self.suggestion.clone())
    }
}

impl Highlighter for LoginHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Owned("*".repeat(line.chars().count()))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

impl Validator for LoginHelper {}

enum Input {
    Line(String),
    Quit,
}

fn read(rl: &mut Editor<LoginHelper, DefaultHistory>, prompt: &str) -> Result<Input> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("{}", "Exiting...".bright_black());
            Ok(Input::Quit)
        }
        Err(err) => Err(err.into()),
    }
}

/// Runs the login form until the user quits.
pub async fn run(mut app: LoginApp) -> Result<()> {
    let mut rl: Editor<LoginHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(LoginHelper {
        suggestion: app.current_session().username,
        masking: false,
    }));

    println!("{}", "=== Toast Authentication ===".bright_magenta().bold());
    println!("{}", output::greeting(&app.current_session().username));
    println!(
        "{}",
        "Leave the password empty to play offline. Type 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        let username = match read(&mut rl, "Username / Email: ")? {
            Input::Line(line) => line.trim().to_string(),
            Input::Quit => break,
        };
        if username == "quit" || username == "exit" {
            break;
        }

        if let Some(helper) = rl.helper_mut() {
            helper.masking = true;
        }
        let password = read(&mut rl, "Password: ");
        if let Some(helper) = rl.helper_mut() {
            helper.masking = false;
        }
        let password = match password? {
            Input::Line(line) => line,
            Input::Quit => break,
        };

        let request = LoginRequest::new(username, password);
        if !app.can_submit(&request) {
            println!("{}", "Enter a username or a password.".yellow());
            continue;
        }
        if !request.username.is_empty() {
            let _ = rl.add_history_entry(request.username.as_str());
        }

        println!("{}", format!("{}...", output::action_label(&request)).bright_black());

        match app.login(request).await {
            Some(outcome) => {
                println!("{}", output::styled_outcome(&outcome));
                if let Some(session) = outcome.session() {
                    println!("{}", output::greeting(&session.username));
                    if let Some(helper) = rl.helper_mut() {
                        helper.suggestion = session.username.clone();
                    }
                }
            }
            None => println!("{}", "Login did not complete.".yellow()),
        }
        println!();
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
