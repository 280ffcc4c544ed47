//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes wizard feedback, export results and error notices.

use crate::domain::types::Field;

pub const WELCOME: &str = "**🚀 GTM Strategy Generator**\nAnswer five short steps to get a go-to-market plan. Type `.help` for commands.";
pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Type `.help` for the list.";
pub const WIZARD_RESET: &str = "🔄 Answers cleared. Starting over.";
pub const WIZARD_QUIT: &str = "👋 Bye.";
pub const ALREADY_FIRST_STEP: &str = "You are already on the first step.";
pub const RESULTS_ONLY: &str = "Export is available once the strategy has been generated.";
pub const ANSWERS_FROZEN: &str =
    "Answers are locked once the strategy is generated. Use `.back` to revise or `.reset` to start over.";

pub const RESULTS_MENU: &str =
    "`.export` save as text · `.json` save as JSON · `.back` revise answers · `.reset` start over · `.quit` leave";

pub fn missing_fields(missing: &[Field]) -> String {
    let names = missing
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ");
    format!("⚠️ Still needed before continuing: {names}")
}

pub fn generation_failed(err: &str) -> String {
    format!("❌ **Generation Failed**: {err}")
}

pub fn strategy_exported(path: &str) -> String {
    format!("💾 Strategy saved to `{path}`")
}

pub fn export_failed(err: &str) -> String {
    format!("❌ **Export Failed**: {err}")
}

pub fn advance_hint(label: &str) -> String {
    format!("(answering this continues with **{label}**)")
}
