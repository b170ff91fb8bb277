use std::process::ExitCode;

use colored::Colorize;

use crate::app::LoginApp;
use crate::output;
use toast_core::login::LoginRequest;

/// Submits a single login and reports the result.
pub async fn run(mut app: LoginApp, request: LoginRequest) -> ExitCode {
    if !app.can_submit(&request) {
        eprintln!("{}", "Enter a username or a password.".yellow());
        return ExitCode::FAILURE;
    }

    println!("{}", format!("{}...", output::action_label(&request)).bright_black());

    let Some(outcome) = app.login(request).await else {
        eprintln!("{}", "Login did not complete.".red());
        return ExitCode::FAILURE;
    };

    println!("{}", output::styled_outcome(&outcome));
    match outcome.session() {
        Some(session) => {
            println!("{}", output::greeting(&session.username));
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
