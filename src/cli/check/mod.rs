//! Check command - evaluates one address from the command line

use clap::Args;

use crate::domain::Outcome;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Email address to check
    pub email: String,
}

/// Evaluate the address and return whether registration would be permitted.
///
/// Operator notifications are not sent from here.
pub async fn run(args: CheckArgs) -> anyhow::Result<bool> {
    let config = super::load_config()?;
    let state = crate::create_app_state(&config)?;

    let settings = state.gate.settings();
    let outcome = state.gate.evaluate(&settings, &args.email).await;
    println!("{}", render(&outcome));

    Ok(outcome.permits_registration())
}

fn render(outcome: &Outcome) -> String {
    match outcome.message() {
        Some(message) => format!("{}: {}", outcome.label(), message),
        None => outcome.label().to_string(),
    }
}
