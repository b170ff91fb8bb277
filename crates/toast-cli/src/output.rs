//! Terminal wording and colors for login results.

use colored::{ColoredString, Colorize};
use toast_core::login::{LoginOutcome, LoginRequest};
use toast_core::session::SessionMode;

/// Label of the submit action for the current form contents.
pub fn action_label(request: &LoginRequest) -> &'static str {
    if request.is_online() { "Login" } else { "Play Offline" }
}

pub fn greeting(username: &str) -> String {
    format!(
        "{} {}",
        "Logged in as".bright_black(),
        username.yellow()
    )
}

pub fn outcome_message(outcome: &LoginOutcome) -> String {
    match outcome {
        LoginOutcome::Success(session) => match session.mode {
            SessionMode::Offline => "Successfully playing offline!".to_string(),
            SessionMode::Online => "Successfully logged in!".to_string(),
        },
        LoginOutcome::InvalidCredentials => "Invalid credentials!".to_string(),
        LoginOutcome::AuthFailure(message) => format!("Unable to login: {message}"),
    }
}

pub fn styled_outcome(outcome: &LoginOutcome) -> ColoredString {
    let message = outcome_message(outcome);
    match outcome {
        LoginOutcome::Success(session) if session.is_online() => message.green().bold(),
        LoginOutcome::Success(_) => message.bright_cyan().bold(),
        _ => message.red().bold(),
    }
}
